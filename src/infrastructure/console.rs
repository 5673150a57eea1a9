use tracing::{error, info, warn};

use crate::domain::services::notification::{Notice, NotificationService, Severity};
use crate::domain::services::presentation::{ViewObserver, ViewState};

/// Terminal rendering of the account screen. Each refresh redraws the whole
/// snapshot; there is no partial update.
pub struct ConsolePresenter;

impl ViewObserver for ConsolePresenter {
    fn refreshed(&self, state: &ViewState) {
        if state.loading {
            println!("Carregando seus dados...");
            return;
        }

        if let Some(message) = &state.error_message {
            println!("Erro: {message}");
        }

        if let Some(account) = &state.account {
            println!("Conta #{}: {} <{}>", account.id, account.name, account.email);

            if let Some(cpf) = account.cpf_digits() {
                println!("CPF: {cpf}");
            }

            if let Some(phone) = &account.phone_number {
                println!("Telefone: {phone}");
            }

            if let Some(date_of_birth) = &account.date_of_birth {
                println!("Nascimento: {date_of_birth}");
            }
        }
    }
}

/// Routes user-facing notices into the structured log, one event per notice.
pub struct LogNotifier;

impl NotificationService for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => {
                error!(summary = %notice.summary, detail = %notice.detail, "notice")
            }
            Severity::Warn => {
                warn!(summary = %notice.summary, detail = %notice.detail, "notice")
            }
            Severity::Success | Severity::Info => {
                info!(summary = %notice.summary, detail = %notice.detail, "notice")
            }
        }
    }
}
