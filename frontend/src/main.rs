use sproutfuture_frontend::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
