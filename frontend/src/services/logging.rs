use gloo::net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
    timestamp: String,
}

/// Component-tagged logging. Always writes to the browser console; also
/// forwards to the backend when remote logging is enabled in `AppConfig`.
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, Some(component));
    }

    fn log(level: LogLevel, message: &str, component: Option<&str>) {
        let line = format_line(level, message, component);
        match level {
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }

        let config = AppConfig::from_env();
        if !config.remote_logging {
            return;
        }

        let request = LogRequest {
            level: level.as_str().to_string(),
            message: message.to_string(),
            component: component.map(str::to_string),
            timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        };
        let url = format!("{}/api/logs", config.api_base_url);

        // Fire and forget; a failed log post must never surface to the user
        spawn_local(async move {
            if let Ok(builder) = Request::post(&url).json(&request) {
                let _ = builder.send().await;
            }
        });
    }
}

fn format_line(level: LogLevel, message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] [{}] {}", level.as_str(), component, message),
        None => format!("[{}] {}", level.as_str(), message),
    }
}
