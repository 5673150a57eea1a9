use chrono::NaiveDate;
use validator::Validate;

use crate::domain::models::validation::{is_name, is_phone, only_digits};

/// Read model of the authenticated customer's account. Optional fields that the
/// server did not send are `None`, meaning "unknown" rather than false/empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub cpf: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
    pub authorities: Option<Vec<Authority>>,
    pub account_non_expired: Option<bool>,
    pub account_non_locked: Option<bool>,
    pub credentials_non_expired: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub authority: String,
}

impl Client {
    /// CPF reduced to its digits, ready for display or submission.
    pub fn cpf_digits(&self) -> Option<String> {
        self.cpf.as_deref().map(only_digits)
    }
}

/// Editable projection of [`Client`] backing the account form. Only the fields
/// the backend accepts in a partial update are present; `None` leaves the
/// server-side value untouched.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateClient {
    #[validate(custom(function = "is_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_phone"))]
    pub phone_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<String>,
}

impl UpdateClient {
    pub fn from_account(account: &Client) -> Self {
        UpdateClient {
            name: Some(account.name.clone()),
            phone_number: account.phone_number.as_deref().map(only_digits),
            date_of_birth: account.date_of_birth,
            gender: account.gender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Client {
        Client {
            id: 7,
            name: "Ana Souza".to_string(),
            email: "ana@email.com".to_string(),
            phone_number: Some("(11) 98888-7777".to_string()),
            cpf: Some("123.456.789-09".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            gender: Some("FEMALE".to_string()),
            role: None,
            password: None,
            enabled: Some(true),
            authorities: None,
            account_non_expired: None,
            account_non_locked: None,
            credentials_non_expired: None,
        }
    }

    #[test]
    fn test_cpf_digits() {
        assert_eq!(account().cpf_digits(), Some("12345678909".to_string()));
    }

    #[test]
    fn test_cpf_digits_unknown() {
        let mut account = account();
        account.cpf = None;

        assert_eq!(account.cpf_digits(), None);
    }

    #[test]
    fn test_form_from_account_normalizes_phone() {
        let form = UpdateClient::from_account(&account());

        assert_eq!(form.name, Some("Ana Souza".to_string()));
        assert_eq!(form.phone_number, Some("11988887777".to_string()));
        assert_eq!(form.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(form.gender, Some("FEMALE".to_string()));
    }

    #[test]
    fn test_form_validation() {
        let mut form = UpdateClient::from_account(&account());
        assert!(form.validate().is_ok());

        form.name = Some("ab".to_string());
        assert!(form.validate().is_err());

        form.name = None;
        assert!(form.validate().is_ok());
    }
}
