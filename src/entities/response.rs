// 📨 RestServiceResponse - Root of the response graph
//
// What a call to the banking REST service hands back:
//
//    RestServiceResponse
//      Bank
//        AccountHolder
//          Vec<Account>
//
// Every link below the root may be missing.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank::Bank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestServiceResponse {
    /// When the response was received (defaults to parse time)
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,

    #[serde(default)]
    pub bank: Option<Bank>,
}

impl RestServiceResponse {
    /// Empty response (no bank)
    pub fn new() -> Self {
        RestServiceResponse {
            received_at: Utc::now(),
            bank: None,
        }
    }

    pub fn with_bank(mut self, bank: Bank) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn bank(&self) -> Option<&Bank> {
        self.bank.as_ref()
    }

    /// Parse a response body
    ///
    /// Missing and `null` links both come back as `None`.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Failed to parse REST service response")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize REST service response")
    }
}

impl Default for RestServiceResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_has_no_bank() {
        let response = RestServiceResponse::new();
        assert!(response.bank().is_none());
    }

    #[test]
    fn test_from_json_missing_bank() {
        let response = RestServiceResponse::from_json("{}").unwrap();
        assert!(response.bank().is_none());
    }

    #[test]
    fn test_from_json_null_links() {
        let body = r#"{
            "received_at": "2024-01-15T10:30:00Z",
            "bank": {
                "id": "b-1",
                "canonical_name": "Scotiabank",
                "country": "CA",
                "account_holder": null
            }
        }"#;

        let response = RestServiceResponse::from_json(body).unwrap();
        let bank = response.bank().unwrap();
        assert_eq!(bank.canonical_name, "Scotiabank");
        assert!(bank.account_holder().is_none());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = RestServiceResponse::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_json_preserves_graph() {
        let response = crate::fixture::build_fixture();
        let body = response.to_json().unwrap();
        let parsed = RestServiceResponse::from_json(&body).unwrap();

        assert_eq!(parsed, response);
    }
}
