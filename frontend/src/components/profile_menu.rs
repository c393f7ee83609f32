use shared::{avatar_src, User};
use web_sys::{HtmlImageElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_click_outside::use_click_outside;

#[derive(Properties, PartialEq)]
pub struct ProfileMenuProps {
    pub user: User,
    pub default_avatar_url: String,
    pub on_profile_click: Callback<()>,
    pub on_sign_out_click: Callback<()>,
}

/// Avatar button with a Profile / Sign out dropdown. The dropdown closes on
/// any pointer-down outside the menu container.
#[function_component(ProfileMenu)]
pub fn profile_menu(props: &ProfileMenuProps) -> Html {
    let is_open = use_state(|| false);
    let container = use_node_ref();

    {
        let is_open = is_open.clone();
        use_click_outside(container.clone(), Callback::from(move |_| is_open.set(false)));
    }

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(!*is_open);
        })
    };

    let on_avatar_error = {
        let fallback = props.default_avatar_url.clone();
        Callback::from(move |e: Event| {
            let img: HtmlImageElement = e.target_unchecked_into();
            if !img.src().ends_with(&fallback) {
                img.set_src(&fallback);
            }
        })
    };

    let on_profile = {
        let on_profile_click = props.on_profile_click.clone();
        Callback::from(move |_: MouseEvent| on_profile_click.emit(()))
    };

    let on_sign_out = {
        let on_sign_out_click = props.on_sign_out_click.clone();
        Callback::from(move |_: MouseEvent| on_sign_out_click.emit(()))
    };

    html! {
        <div class="profile-menu" ref={container}>
            <button
                class="profile-menu-button"
                onclick={toggle_menu}
                aria-label="Open profile menu"
                aria-haspopup="true"
                aria-expanded={is_open.to_string()}
            >
                <img
                    class="profile-avatar"
                    src={avatar_src(&props.user, &props.default_avatar_url)}
                    alt={props.user.label()}
                    width="40"
                    height="40"
                    onerror={on_avatar_error}
                />
            </button>

            if *is_open {
                <div class="profile-dropdown">
                    <div class="profile-dropdown-items" role="menu" aria-orientation="vertical">
                        <button class="profile-dropdown-item profile-item" role="menuitem" onclick={on_profile}>
                            {"Profile"}
                        </button>
                        <button class="profile-dropdown-item sign-out-item" role="menuitem" onclick={on_sign_out}>
                            {"Sign out"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
