use shared::{child_names_consistent, should_show_generated_links, GeneratedLink, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::account_summary::AccountSummary;
use super::generated_links::GeneratedLinks;
use super::header::Header;
use super::link_generator::LinkGenerator;
use super::profile_menu::ProfileMenu;
use super::toast::ToastHandle;
use crate::services::config::AppConfig;
use crate::services::logging::Logger;
use crate::services::session::{navigate_to, run_sign_out, SessionError, SignOutEffects, SignOutHandler};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub balance: f64,
    pub on_sign_out: SignOutHandler,
    pub on_profile_click: Callback<()>,
    pub generated_links: Vec<GeneratedLink>,
    /// Receives `(child_name, link)`
    pub on_generate_link: Callback<(String, String)>,
    /// Receives the full replacement list
    pub on_update_links: Callback<Vec<GeneratedLink>>,
    pub existing_child_names: Vec<String>,
}

/// Browser-side reporting of a sign-out attempt
struct DashboardEffects {
    root_route: String,
    toasts: Option<ToastHandle>,
}

impl SignOutEffects for DashboardEffects {
    fn navigate_to_root(&self) {
        navigate_to(&self.root_route);
    }

    fn notify_failure(&self, message: &str) {
        match &self.toasts {
            Some(toasts) => toasts.error(message),
            None => Logger::warn_with_component("dashboard", "No toast channel available for sign-out failure"),
        }
    }

    fn log_failure(&self, error: &SessionError) {
        Logger::error_with_component("dashboard", &format!("Error signing out: {}", error));
    }
}

/// The dashboard screen. Holds no business data: everything arrives through
/// props and every change is reported through the callbacks.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toasts = use_context::<ToastHandle>();

    // The owner of the links keeps the name list in sync; only report drift
    use_effect_with(
        (props.existing_child_names.clone(), props.generated_links.clone()),
        |(names, links)| {
            if !child_names_consistent(names, links) {
                Logger::warn_with_component("dashboard", "Existing child names do not match the generated links");
            }
            || ()
        },
    );

    let on_sign_out_click = {
        let handler = props.on_sign_out.clone();
        let root_route = config.root_route.clone();
        Callback::from(move |_: ()| {
            let handler = handler.clone();
            let effects = DashboardEffects {
                root_route: root_route.clone(),
                toasts: toasts.clone(),
            };
            spawn_local(async move {
                run_sign_out(&handler, &effects).await;
            });
        })
    };

    html! {
        <div class="dashboard">
            <main class="dashboard-main">
                <Header title={config.app_title.clone()} logo_url={config.logo_url.clone()}>
                    <ProfileMenu
                        user={props.user.clone()}
                        default_avatar_url={config.default_avatar_url.clone()}
                        on_profile_click={props.on_profile_click.clone()}
                        on_sign_out_click={on_sign_out_click}
                    />
                </Header>
                <div class="dashboard-grid">
                    <AccountSummary balance={props.balance} />
                    if should_show_generated_links(&props.generated_links) {
                        <GeneratedLinks
                            links={props.generated_links.clone()}
                            on_update_links={props.on_update_links.clone()}
                        />
                    }
                    <div class="dashboard-generator">
                        <LinkGenerator
                            user_id={props.user.uid.clone()}
                            on_generate_link={props.on_generate_link.clone()}
                            existing_links_count={props.generated_links.len()}
                            existing_child_names={props.existing_child_names.clone()}
                        />
                    </div>
                </div>
            </main>
        </div>
    }
}
