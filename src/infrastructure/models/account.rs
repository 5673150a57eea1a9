use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::client::{Authority, Client, UpdateClient};

/// Account resource as the REST API serializes it. Every field the server may
/// omit is optional; absence deserializes to `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub authorities: Option<Vec<ApiAuthority>>,
    #[serde(default)]
    pub account_non_expired: Option<bool>,
    #[serde(default)]
    pub account_non_locked: Option<bool>,
    #[serde(default)]
    pub credentials_non_expired: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAuthority {
    pub authority: String,
}

/// Partial update payload. `None` fields are skipped entirely so the server
/// leaves them untouched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Error payload the API returns alongside non-2xx statuses. The body is not
/// guaranteed to carry a message.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ApiAccount> for Client {
    fn from(account: ApiAccount) -> Self {
        Client {
            id: account.id,
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            cpf: account.cpf,
            date_of_birth: account.date_of_birth,
            gender: account.gender,
            role: account.role,
            password: account.password,
            enabled: account.enabled,
            authorities: account
                .authorities
                .map(|authorities| authorities.into_iter().map(Into::into).collect()),
            account_non_expired: account.account_non_expired,
            account_non_locked: account.account_non_locked,
            credentials_non_expired: account.credentials_non_expired,
        }
    }
}

impl From<ApiAuthority> for Authority {
    fn from(authority: ApiAuthority) -> Self {
        Authority {
            authority: authority.authority,
        }
    }
}

impl From<UpdateClient> for ApiAccountUpdate {
    fn from(update: UpdateClient) -> Self {
        ApiAccountUpdate {
            name: update.name,
            phone_number: update.phone_number,
            date_of_birth: update.date_of_birth,
            gender: update.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_partial_payload() {
        let account: ApiAccount = serde_json::from_str(
            r#"{"id": 3, "name": "Ana", "email": "ana@email.com", "phoneNumber": "11988887777"}"#,
        )
        .unwrap();

        let client = Client::from(account);

        assert_eq!(client.id, 3);
        assert_eq!(client.phone_number, Some("11988887777".to_string()));
        assert_eq!(client.cpf, None);
        assert_eq!(client.authorities, None);
    }

    #[test]
    fn test_account_deserializes_authorities() {
        let account: ApiAccount = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Ana",
                "email": "ana@email.com",
                "dateOfBirth": "1990-04-12",
                "authorities": [{"authority": "ROLE_CLIENT"}],
                "accountNonLocked": true
            }"#,
        )
        .unwrap();

        let client = Client::from(account);

        assert_eq!(
            client.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 12)
        );
        assert_eq!(
            client.authorities,
            Some(vec![Authority {
                authority: "ROLE_CLIENT".to_string()
            }])
        );
        assert_eq!(client.account_non_locked, Some(true));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = ApiAccountUpdate::from(UpdateClient {
            name: Some("Ana".to_string()),
            phone_number: None,
            date_of_birth: None,
            gender: None,
        });

        let body = serde_json::to_value(update).unwrap();

        assert_eq!(body, serde_json::json!({"name": "Ana"}));
    }

    #[test]
    fn test_update_uses_camel_case_keys() {
        let update = ApiAccountUpdate::from(UpdateClient {
            name: None,
            phone_number: Some("11988887777".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            gender: None,
        });

        let body = serde_json::to_value(update).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "phoneNumber": "11988887777",
                "dateOfBirth": "1990-04-12"
            })
        );
    }
}
