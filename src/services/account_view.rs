use std::sync::Arc;

use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use crate::domain::{
    error::{load_error_message, save_error_message},
    models::client::UpdateClient,
    services::{
        account::AccountGateway,
        notification::{Notice, NotificationService},
        presentation::{ViewObserver, ViewState},
    },
};

#[rustfmt::skip]
pub mod summary {
    pub static LOAD_FAILED: &str = "Erro ao carregar dados";
    pub static SAVE_FAILED: &str = "Erro ao salvar dados";
    pub static SAVED: &str = "Dados atualizados";
}

static SAVED_DETAIL: &str = "Seus dados foram atualizados com sucesso.";

/// Controller of the account screen. Owns the screen state, orchestrates the
/// gateway calls and republishes every transition to subscribed presenters.
///
/// Operations take `&mut self`, so a second invocation cannot start while one
/// is in flight: the exclusive borrow serializes loads and rules out the
/// stale-response interleavings an unguarded implementation would allow.
pub struct AccountView {
    gateway: Arc<dyn AccountGateway>,
    notifications: Arc<dyn NotificationService>,
    observers: Vec<Arc<dyn ViewObserver>>,
    state: ViewState,
}

impl AccountView {
    pub fn new(
        gateway: Arc<dyn AccountGateway>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            gateway,
            notifications,
            observers: Vec::new(),
            state: ViewState::default(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The form the presentation layer binds its inputs to.
    pub fn form_mut(&mut self) -> &mut UpdateClient {
        &mut self.state.form
    }

    /// Fetches the current account. Idempotent; on failure the previously
    /// loaded account is kept and only the error message changes.
    pub async fn load_account(&mut self) {
        info!("loading account data");
        self.state.loading = true;
        self.state.error_message = None;

        match self.gateway.fetch_account().await {
            Ok(account) => {
                info!(account_id = account.id, "account loaded");
                self.finish_loading();
                self.state.form = UpdateClient::from_account(&account);
                self.state.account = Some(account);
                self.refresh();
            }
            Err(err) => {
                error!(status = ?err.status, "account request failed");
                let detail = load_error_message(Some(&err));
                self.state.error_message = Some(detail.clone());
                self.notifications
                    .notify(Notice::error(summary::LOAD_FAILED, detail));
                self.finish_loading();
            }
        }
    }

    /// Submits the form as a partial update. Validation failures never reach
    /// the gateway.
    pub async fn save_account(&mut self) {
        if let Err(errors) = self.state.form.validate() {
            let detail = validation_detail(&errors);
            self.state.error_message = Some(detail.clone());
            self.notifications
                .notify(Notice::error(summary::SAVE_FAILED, detail));
            self.refresh();
            return;
        }

        info!("submitting account update");
        self.state.loading = true;
        self.state.error_message = None;

        match self.gateway.update_account(self.state.form.clone()).await {
            Ok(account) => {
                info!(account_id = account.id, "account updated");
                self.finish_loading();
                self.state.form = UpdateClient::from_account(&account);
                self.state.account = Some(account);
                self.notifications
                    .notify(Notice::success(summary::SAVED, SAVED_DETAIL));
                self.refresh();
            }
            Err(err) => {
                error!(status = ?err.status, "account update failed");
                let detail = save_error_message(Some(&err));
                self.state.error_message = Some(detail.clone());
                self.notifications
                    .notify(Notice::error(summary::SAVE_FAILED, detail));
                self.finish_loading();
            }
        }
    }

    // Single finalization step per invocation: clears the loading flag and
    // emits one refresh. On the success path it runs before the
    // outcome-specific refresh.
    fn finish_loading(&mut self) {
        self.state.loading = false;
        self.refresh();
    }

    fn refresh(&self) {
        for observer in &self.observers {
            observer.refreshed(&self.state);
        }
    }
}

fn validation_detail(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: valor inválido"),
            })
        })
        .collect();

    parts.sort();
    parts.join("; ")
}
