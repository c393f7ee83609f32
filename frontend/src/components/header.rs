use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub logo_url: String,
    /// Right-hand side of the bar, e.g. the profile menu
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="dashboard-header">
            <div class="header-brand">
                <img
                    class="header-logo"
                    src={props.logo_url.clone()}
                    alt="SproutFuture Logo"
                    width="50"
                    height="50"
                />
                <h1 class="header-title">{props.title.clone()}</h1>
            </div>
            <div class="header-right">
                {props.children.clone()}
            </div>
        </header>
    }
}
