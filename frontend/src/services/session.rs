use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thiserror::Error;

pub const SIGN_OUT_FAILED_MESSAGE: &str = "Failed to sign out. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("sign out rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

pub type SignOutFuture = Pin<Box<dyn Future<Output = Result<(), SessionError>>>>;

/// Caller-supplied asynchronous sign-out notifier.
///
/// Compared by identity so it can live in component props.
#[derive(Clone)]
pub struct SignOutHandler(Rc<dyn Fn() -> SignOutFuture>);

impl SignOutHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), SessionError>> + 'static,
    {
        Self(Rc::new(move || Box::pin(f()) as SignOutFuture))
    }

    pub fn invoke(&self) -> SignOutFuture {
        (self.0)()
    }
}

impl PartialEq for SignOutHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Where the outcome of a sign-out attempt is reported
pub trait SignOutEffects {
    fn navigate_to_root(&self);
    fn notify_failure(&self, message: &str);
    fn log_failure(&self, error: &SessionError);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignOutOutcome {
    SignedOut,
    Failed(SessionError),
}

/// Runs one sign-out attempt: navigate on success, log and notify on
/// failure. Never retries and never propagates the error.
pub async fn run_sign_out(handler: &SignOutHandler, effects: &impl SignOutEffects) -> SignOutOutcome {
    match handler.invoke().await {
        Ok(()) => {
            effects.navigate_to_root();
            SignOutOutcome::SignedOut
        }
        Err(error) => {
            effects.log_failure(&error);
            effects.notify_failure(SIGN_OUT_FAILED_MESSAGE);
            SignOutOutcome::Failed(error)
        }
    }
}

/// Full-page navigation to `route`
pub fn navigate_to(route: &str) {
    let result = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|window| {
            window
                .location()
                .set_href(route)
                .map_err(|e| format!("{:?}", e))
        });

    if let Err(e) = result {
        gloo::console::error!("Navigation failed:", route, e);
    }
}
