use shared::{remove_link, rename_link, GeneratedLink};
use web_sys::{HtmlImageElement, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct GeneratedLinksProps {
    pub links: Vec<GeneratedLink>,
    /// Receives the full replacement list after every edit
    pub on_update_links: Callback<Vec<GeneratedLink>>,
}

#[function_component(GeneratedLinks)]
pub fn generated_links(props: &GeneratedLinksProps) -> Html {
    html! {
        <section class="card generated-links">
            <h2 class="card-title">{"Your links"}</h2>
            <ul class="generated-links-list">
                {for props.links.iter().map(|link| html! {
                    <LinkItem
                        key={link.child_name.clone()}
                        link={link.clone()}
                        links={props.links.clone()}
                        on_update_links={props.on_update_links.clone()}
                    />
                })}
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LinkItemProps {
    link: GeneratedLink,
    links: Vec<GeneratedLink>,
    on_update_links: Callback<Vec<GeneratedLink>>,
}

#[function_component(LinkItem)]
fn link_item(props: &LinkItemProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let editing = use_state(|| false);
    let draft = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let on_image_error = {
        let fallback = config.default_child_image_url.clone();
        Callback::from(move |e: Event| {
            let img: HtmlImageElement = e.target_unchecked_into();
            // Guard against a missing placeholder looping forever
            if !img.src().ends_with(&fallback) {
                img.set_src(&fallback);
            }
        })
    };

    let on_start_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let error_message = error_message.clone();
        let current = props.link.child_name.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(current.clone());
            error_message.set(None);
            editing.set(true);
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            error_message.set(None);
            editing.set(false);
        })
    };

    let on_draft_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_save = {
        let editing = editing.clone();
        let draft = draft.clone();
        let error_message = error_message.clone();
        let links = props.links.clone();
        let current = props.link.child_name.clone();
        let on_update_links = props.on_update_links.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match rename_link(&links, &current, &draft) {
                Ok(updated) => {
                    editing.set(false);
                    error_message.set(None);
                    on_update_links.emit(updated);
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    let on_remove = {
        let links = props.links.clone();
        let current = props.link.child_name.clone();
        let on_update_links = props.on_update_links.clone();
        Callback::from(move |_: MouseEvent| {
            on_update_links.emit(remove_link(&links, &current));
        })
    };

    html! {
        <li class="generated-link">
            <img
                class="generated-link-image"
                src={props.link.image_url.clone()}
                alt={props.link.child_name.clone()}
                width="48"
                height="48"
                onerror={on_image_error}
            />
            <div class="generated-link-body">
                if *editing {
                    <form class="generated-link-rename" onsubmit={on_save}>
                        <input
                            type="text"
                            class="text-input"
                            value={(*draft).clone()}
                            oninput={on_draft_input}
                        />
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_edit}>{"Cancel"}</button>
                    </form>
                } else {
                    <span class="generated-link-name">{props.link.child_name.clone()}</span>
                }
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-error" role="alert">{error}</div> }
                } else {
                    html! {}
                }}
                <a class="generated-link-url" href={props.link.link.clone()} target="_blank" rel="noopener noreferrer">
                    {props.link.link.clone()}
                </a>
            </div>
            if !*editing {
                <div class="generated-link-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_start_edit}>{"Rename"}</button>
                    <button type="button" class="btn btn-danger" onclick={on_remove}>{"Remove"}</button>
                </div>
            }
        </li>
    }
}
