// 🏦 Bank Entity - Second link of the response graph
//
// A bank in a service response may or may not carry an account holder.

use serde::{Deserialize, Serialize};

use super::account_holder::AccountHolder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Stable identity (UUID)
    pub id: String,

    /// Canonical name (the "official" name we use)
    pub canonical_name: String,

    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,

    #[serde(default)]
    pub account_holder: Option<AccountHolder>,
}

impl Bank {
    /// Create new bank entity with UUID and no account holder
    pub fn new(canonical_name: String, country: String) -> Self {
        Bank {
            id: uuid::Uuid::new_v4().to_string(),
            canonical_name,
            country,
            account_holder: None,
        }
    }

    pub fn with_account_holder(mut self, account_holder: AccountHolder) -> Self {
        self.account_holder = Some(account_holder);
        self
    }

    pub fn account_holder(&self) -> Option<&AccountHolder> {
        self.account_holder.as_ref()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_creation() {
        let bank = Bank::new("Test Bank".to_string(), "US".to_string());

        assert!(!bank.id.is_empty());
        assert_eq!(bank.canonical_name, "Test Bank");
        assert_eq!(bank.country, "US");
        assert!(bank.account_holder().is_none());
    }

    #[test]
    fn test_bank_with_account_holder() {
        let bank = Bank::new("Wise".to_string(), "UK".to_string())
            .with_account_holder(AccountHolder::new("Ada".to_string()));

        assert_eq!(bank.account_holder().map(|h| h.name.as_str()), Some("Ada"));
    }
}
