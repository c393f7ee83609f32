use shared::{build_child_link, new_link_token, validate_child_name, MAX_CHILD_LINKS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct LinkGeneratorProps {
    pub user_id: String,
    /// Receives `(child_name, link)`
    pub on_generate_link: Callback<(String, String)>,
    pub existing_links_count: usize,
    pub existing_child_names: Vec<String>,
}

#[function_component(LinkGenerator)]
pub fn link_generator(props: &LinkGeneratorProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let child_name = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let limit_reached = props.existing_links_count >= MAX_CHILD_LINKS;

    let on_name_input = {
        let child_name = child_name.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            child_name.set(input.value());
            error_message.set(None);
        })
    };

    let on_submit = {
        let child_name = child_name.clone();
        let error_message = error_message.clone();
        let on_generate_link = props.on_generate_link.clone();
        let existing = props.existing_child_names.clone();
        let user_id = props.user_id.clone();
        let link_base_url = config.link_base_url.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if limit_reached {
                error_message.set(Some(format!("You can create at most {} links", MAX_CHILD_LINKS)));
                return;
            }

            match validate_child_name(&child_name, &existing) {
                Ok(name) => {
                    let link = build_child_link(&link_base_url, &user_id, &name, &new_link_token());
                    on_generate_link.emit((name, link));
                    child_name.set(String::new());
                    error_message.set(None);
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <section class="card link-generator">
            <h2 class="card-title">{"Generate a link"}</h2>
            <p class="card-subtitle">
                {"Create a link family and friends can use to contribute to a child's future."}
            </p>

            {if let Some(error) = (*error_message).clone() {
                html! { <div class="form-error" role="alert">{error}</div> }
            } else {
                html! {}
            }}

            <form class="link-generator-form" onsubmit={on_submit}>
                <label for="child-name">{"Child's Name"}</label>
                <input
                    id="child-name"
                    type="text"
                    class="text-input"
                    placeholder="Enter child's name"
                    value={(*child_name).clone()}
                    oninput={on_name_input}
                    disabled={limit_reached}
                />
                <button type="submit" class="btn btn-primary" disabled={limit_reached}>
                    {"Generate link"}
                </button>
            </form>

            if limit_reached {
                <p class="form-hint">{format!("Link limit reached ({} of {})", props.existing_links_count, MAX_CHILD_LINKS)}</p>
            }
        </section>
    }
}
