/// Runtime settings for the frontend. Defaults are compiled in; a few can be
/// overridden at build time through environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Base used when building child links
    pub link_base_url: String,
    pub root_route: String,
    pub profile_route: String,
    pub app_title: String,
    pub logo_url: String,
    pub default_avatar_url: String,
    pub default_child_image_url: String,
    pub toast_duration_ms: u32,
    /// Forward `Logger` output to the backend's log endpoint
    pub remote_logging: bool,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LINK_BASE_URL: &str = "http://localhost:8080";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("SPROUT_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            link_base_url: option_env!("SPROUT_LINK_BASE_URL")
                .unwrap_or(DEFAULT_LINK_BASE_URL)
                .to_string(),
            root_route: "/".to_string(),
            profile_route: "/profile".to_string(),
            app_title: "SproutFuture Dashboard".to_string(),
            logo_url: "/sproutfuture-logo.png".to_string(),
            default_avatar_url: "/default-user-icon.png".to_string(),
            default_child_image_url: "/default-child.png".to_string(),
            toast_duration_ms: 4000,
            remote_logging: parse_flag(option_env!("SPROUT_REMOTE_LOGGING")),
        }
    }
}

impl AppConfig {
    /// Configuration compiled into this build
    pub fn from_env() -> Self {
        Self::default()
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}
