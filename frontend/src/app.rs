use shared::child_names;
use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::toast::ToastProvider;
use crate::hooks::use_dashboard_data::{use_dashboard_data, LOAD_FAILED_MESSAGE};
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::logging::Logger;
use crate::services::session::{navigate_to, SignOutHandler};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());

    use_effect_with((), |_| {
        Logger::info_with_component("app", "SproutFuture dashboard started");
        || ()
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ToastProvider duration_ms={config.toast_duration_ms}>
                <DashboardPage />
            </ToastProvider>
        </ContextProvider<AppConfig>>
    }
}

/// Owns the dashboard's data and connects the dashboard's callbacks to the
/// backend.
#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api_client = use_memo(config.api_base_url.clone(), |base_url| ApiClient::with_base_url(base_url.clone()));
    let dashboard = use_dashboard_data(&api_client, &config.default_child_image_url);

    let on_sign_out = {
        let api_client = (*api_client).clone();
        use_memo((), move |_| {
            SignOutHandler::new(move || {
                let api_client = api_client.clone();
                async move { api_client.sign_out().await }
            })
        })
    };

    let on_profile_click = {
        let profile_route = config.profile_route.clone();
        Callback::from(move |_: ()| navigate_to(&profile_route))
    };

    if dashboard.data.loading {
        return html! { <div class="loading">{"Loading..."}</div> };
    }

    if dashboard.data.load_error.is_some() {
        return html! { <LoadError on_retry={dashboard.actions.reload.clone()} /> };
    }

    let Some(user) = dashboard.data.user.clone() else {
        return html! {
            <div class="signed-out">
                <p>{"You are not signed in."}</p>
                <a href={config.root_route.clone()}>{"Go to the home page"}</a>
            </div>
        };
    };

    html! {
        <Dashboard
            user={user}
            balance={dashboard.data.balance}
            on_sign_out={(*on_sign_out).clone()}
            on_profile_click={on_profile_click}
            existing_child_names={child_names(&dashboard.data.links)}
            generated_links={dashboard.data.links.clone()}
            on_generate_link={dashboard.actions.generate_link.clone()}
            on_update_links={dashboard.actions.update_links.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    pub on_retry: Callback<()>,
}

/// Shown when the session lookup failed, which is not the same as being
/// signed out
#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    let on_click = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="load-error" role="alert">
            <p>{LOAD_FAILED_MESSAGE}</p>
            <button class="btn btn-primary load-error-retry" onclick={on_click}>{"Try again"}</button>
        </div>
    }
}
