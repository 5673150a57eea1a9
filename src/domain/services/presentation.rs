use crate::domain::models::client::{Client, UpdateClient};

/// Snapshot of the account screen, published to every subscribed presenter
/// after a state transition. `error_message` and `account` may coexist: a
/// failed refresh keeps the previously loaded account on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub account: Option<Client>,
    pub error_message: Option<String>,
    pub form: UpdateClient,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            loading: true,
            account: None,
            error_message: None,
            form: UpdateClient::default(),
        }
    }
}

/// Explicit refresh step decoupled from any rendering engine. The controller
/// invokes it after state transitions; presenters re-render from the snapshot.
pub trait ViewObserver: Send + Sync {
    fn refreshed(&self, state: &ViewState);
}
