pub type GatewayResult<T> = core::result::Result<T, GatewayError>;

/// Failure shape of an account-gateway call. `status` is the HTTP-equivalent
/// status when one is known; `Some(0)` means the server was never reached and
/// `None` means the failure could not be classified. `message` carries the
/// server-supplied business message when the response body had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static UNKNOWN: &str = "Erro desconhecido ao acessar seus dados.";
    pub static SESSION_EXPIRED: &str = "Sessão expirada ou acesso não autorizado. Faça login novamente.";
    pub static OFFLINE: &str = "Não foi possível conectar ao servidor. Verifique sua conexão.";
    pub static LOAD_FALLBACK: &str = "Não foi possível carregar seus dados no momento.";
    pub static SAVE_FALLBACK: &str = "Não foi possível salvar seus dados no momento.";
}

impl GatewayError {
    pub fn status(status: u16) -> GatewayError {
        GatewayError {
            status: Some(status),
            message: None,
            trace: None,
        }
    }

    /// The server was never reached (connection refused, timeout, DNS).
    pub fn offline() -> GatewayError {
        GatewayError::status(0)
    }

    pub fn unclassified() -> GatewayError {
        GatewayError {
            status: None,
            message: None,
            trace: None,
        }
    }

    pub fn with_message(self, message: impl ToString) -> GatewayError {
        GatewayError {
            message: Some(message.to_string()),
            ..self
        }
    }

    pub fn trace(self, message: &str) -> GatewayError {
        GatewayError {
            trace: Some(message.to_owned()),
            ..self
        }
    }
}

impl std::error::Error for GatewayError {}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, &self.message) {
            (Some(status), Some(message)) => write!(f, "Error {status}: {message}"),
            (Some(status), None) => write!(f, "Error {status}"),
            (None, Some(message)) => write!(f, "Error: {message}"),
            (None, None) => write!(f, "Error: unclassified gateway failure"),
        }
    }
}

/// User-facing message for a failed account load. Total over any error shape,
/// including an absent error value.
pub fn load_error_message(error: Option<&GatewayError>) -> String {
    normalize(error, message::LOAD_FALLBACK)
}

/// User-facing message for a failed account update. Shares the session and
/// connectivity rules with [`load_error_message`].
pub fn save_error_message(error: Option<&GatewayError>) -> String {
    normalize(error, message::SAVE_FALLBACK)
}

fn normalize(error: Option<&GatewayError>, fallback: &str) -> String {
    let Some(error) = error else {
        return message::UNKNOWN.to_string();
    };

    match error.status {
        Some(401) | Some(403) => message::SESSION_EXPIRED.to_string(),
        Some(0) => message::OFFLINE.to_string(),
        _ => error
            .message
            .clone()
            .unwrap_or_else(|| fallback.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::unauthorized(Some(GatewayError::status(401)), message::SESSION_EXPIRED)]
    #[case::forbidden(Some(GatewayError::status(403)), message::SESSION_EXPIRED)]
    #[case::forbidden_ignores_body(
        Some(GatewayError::status(403).with_message("Acesso negado")),
        message::SESSION_EXPIRED
    )]
    #[case::offline(Some(GatewayError::offline()), message::OFFLINE)]
    #[case::offline_ignores_body(
        Some(GatewayError::offline().with_message("timed out")),
        message::OFFLINE
    )]
    #[case::server_message(
        Some(GatewayError::status(404).with_message("Not found")),
        "Not found"
    )]
    #[case::empty_body(Some(GatewayError::status(500)), message::LOAD_FALLBACK)]
    #[case::unclassified(Some(GatewayError::unclassified()), message::LOAD_FALLBACK)]
    #[case::absent(None, message::UNKNOWN)]
    fn test_load_error_message(#[case] error: Option<GatewayError>, #[case] expected: &str) {
        assert_eq!(load_error_message(error.as_ref()), expected);
    }

    #[rstest]
    #[case::unauthorized(Some(GatewayError::status(401)), message::SESSION_EXPIRED)]
    #[case::empty_body(Some(GatewayError::status(500)), message::SAVE_FALLBACK)]
    #[case::absent(None, message::UNKNOWN)]
    fn test_save_error_message(#[case] error: Option<GatewayError>, #[case] expected: &str) {
        assert_eq!(save_error_message(error.as_ref()), expected);
    }

    #[test]
    fn test_display() {
        let error = GatewayError::status(404).with_message("Not found");

        assert_eq!(error.to_string(), "Error 404: Not found");
        assert_eq!(
            GatewayError::unclassified().to_string(),
            "Error: unclassified gateway failure"
        );
    }
}
