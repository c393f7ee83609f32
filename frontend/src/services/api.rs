use gloo::net::http::Request;
use shared::{
    AccountSummary, GeneratedLink, GeneratedLinksResponse, SignOutResponse, UpdateLinksRequest, User,
};

use super::session::SessionError;

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Currently signed-in user, `None` when there is no session
    pub async fn current_user(&self) -> Result<Option<User>, String> {
        let url = format!("{}/api/session/user", self.base_url);

        match Request::get(&url).credentials(web_sys::RequestCredentials::Include).send().await {
            Ok(response) => {
                if response.status() == 401 {
                    return Ok(None);
                }
                if !response.ok() {
                    return Err(format!("Failed to load user: HTTP {}", response.status()));
                }
                match response.json::<User>().await {
                    Ok(user) => Ok(Some(user)),
                    Err(e) => Err(format!("Failed to parse user: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch user: {}", e)),
        }
    }

    /// Account balance for the signed-in user
    pub async fn account_summary(&self) -> Result<AccountSummary, String> {
        let url = format!("{}/api/account/summary", self.base_url);

        match Request::get(&url).credentials(web_sys::RequestCredentials::Include).send().await {
            Ok(response) => match response.json::<AccountSummary>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse account summary: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch account summary: {}", e)),
        }
    }

    pub async fn list_links(&self) -> Result<Vec<GeneratedLink>, String> {
        let url = format!("{}/api/links", self.base_url);

        match Request::get(&url).credentials(web_sys::RequestCredentials::Include).send().await {
            Ok(response) => match response.json::<GeneratedLinksResponse>().await {
                Ok(data) => Ok(data.links),
                Err(e) => Err(format!("Failed to parse links: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch links: {}", e)),
        }
    }

    /// Replace the stored link list with `links`
    pub async fn save_links(&self, links: Vec<GeneratedLink>) -> Result<(), String> {
        let url = format!("{}/api/links", self.base_url);
        let request = UpdateLinksRequest { links };

        match Request::put(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let url = format!("{}/api/session/sign-out", self.base_url);

        let response = Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SessionError::Rejected { status, message });
        }

        match response.json::<SignOutResponse>().await {
            Ok(SignOutResponse { success: true, .. }) => Ok(()),
            Ok(SignOutResponse { message, .. }) => Err(SessionError::Rejected {
                status,
                message: message.unwrap_or_else(|| "Sign out was refused".to_string()),
            }),
            Err(e) => Err(SessionError::Network(format!("Failed to parse response: {}", e))),
        }
    }
}
