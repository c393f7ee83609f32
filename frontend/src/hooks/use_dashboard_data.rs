use shared::{GeneratedLink, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub user: Option<User>,
    pub balance: f64,
    pub links: Vec<GeneratedLink>,
    pub loading: bool,
    /// Set when the session could not be checked, as opposed to there being
    /// no session
    pub load_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct DashboardDataActions {
    pub reload: Callback<()>,
    pub generate_link: Callback<(String, String)>,
    pub update_links: Callback<Vec<GeneratedLink>>,
}

/// What the session lookup means for the page
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    SignedIn(User),
    SignedOut,
    Failed(String),
}

impl From<Result<Option<User>, String>> for SessionLookup {
    fn from(result: Result<Option<User>, String>) -> Self {
        match result {
            Ok(Some(user)) => SessionLookup::SignedIn(user),
            Ok(None) => SessionLookup::SignedOut,
            Err(e) => SessionLookup::Failed(e),
        }
    }
}

pub const LOAD_FAILED_MESSAGE: &str = "We couldn't load your dashboard. Please try again.";

pub struct UseDashboardDataResult {
    pub data: DashboardData,
    pub actions: DashboardDataActions,
}

/// Loads and owns the dashboard's business data: the signed-in user, the
/// account balance and the generated links. Link edits are applied locally
/// and persisted through the API.
#[hook]
pub fn use_dashboard_data(api_client: &ApiClient, default_child_image: &str) -> UseDashboardDataResult {
    let user = use_state(|| Option::<User>::None);
    let balance = use_state(|| 0.0f64);
    let links = use_state(Vec::<GeneratedLink>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let toasts = use_context::<ToastHandle>();

    let reload = {
        let api_client = api_client.clone();
        let user = user.clone();
        let balance = balance.clone();
        let links = links.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let toasts = toasts.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let user = user.clone();
            let balance = balance.clone();
            let links = links.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let toasts = toasts.clone();

            spawn_local(async move {
                loading.set(true);
                load_error.set(None);

                match SessionLookup::from(api_client.current_user().await) {
                    SessionLookup::SignedIn(current) => user.set(Some(current)),
                    SessionLookup::SignedOut => {
                        user.set(None);
                        loading.set(false);
                        return;
                    }
                    SessionLookup::Failed(e) => {
                        Logger::error_with_component("dashboard-data", &format!("Failed to load session: {}", e));
                        if let Some(toasts) = &toasts {
                            toasts.error(LOAD_FAILED_MESSAGE);
                        }
                        user.set(None);
                        load_error.set(Some(e));
                        loading.set(false);
                        return;
                    }
                }

                match api_client.account_summary().await {
                    Ok(summary) => balance.set(summary.balance),
                    Err(e) => Logger::error_with_component("dashboard-data", &e),
                }

                match api_client.list_links().await {
                    Ok(loaded) => links.set(loaded),
                    Err(e) => Logger::error_with_component("dashboard-data", &e),
                }

                loading.set(false);
            });
        })
    };

    // Load once on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let persist = {
        let api_client = api_client.clone();
        let toasts = toasts.clone();
        Callback::from(move |updated: Vec<GeneratedLink>| {
            let api_client = api_client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                if let Err(e) = api_client.save_links(updated).await {
                    Logger::error_with_component("dashboard-data", &format!("Failed to save links: {}", e));
                    if let Some(toasts) = toasts {
                        toasts.error("Failed to save your links. Please try again.");
                    }
                }
            });
        })
    };

    let generate_link = {
        let links = links.clone();
        let persist = persist.clone();
        let toasts = toasts.clone();
        let image_url = default_child_image.to_string();
        Callback::from(move |(child_name, link): (String, String)| {
            let mut updated = (*links).clone();
            updated.push(GeneratedLink::new(child_name.clone(), link, image_url.clone()));
            links.set(updated.clone());
            persist.emit(updated);
            if let Some(toasts) = &toasts {
                toasts.success(format!("Link created for {}", child_name));
            }
        })
    };

    let update_links = {
        let links = links.clone();
        Callback::from(move |updated: Vec<GeneratedLink>| {
            links.set(updated.clone());
            persist.emit(updated);
        })
    };

    UseDashboardDataResult {
        data: DashboardData {
            user: (*user).clone(),
            balance: *balance,
            links: (*links).clone(),
            loading: *loading,
            load_error: (*load_error).clone(),
        },
        actions: DashboardDataActions {
            reload,
            generate_link,
            update_links,
        },
    }
}
