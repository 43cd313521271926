// 👤 AccountHolder Entity - Third link of the response graph
//
// The accounts list is optional on its own: a holder may come back
// with no list at all, or with a list that is present but empty.

use serde::{Deserialize, Serialize};

use super::account::Account;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHolder {
    pub id: String,
    pub name: String,

    /// `None` when the service omitted the list or sent `null`
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
}

impl AccountHolder {
    /// Create a holder with no accounts list
    pub fn new(name: String) -> Self {
        AccountHolder {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            accounts: None,
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    /// Accounts list, if the holder has one
    pub fn accounts(&self) -> Option<&[Account]> {
        self.accounts.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AccountType;

    #[test]
    fn test_holder_without_accounts() {
        let holder = AccountHolder::new("Ada".to_string());

        assert!(!holder.id.is_empty());
        assert!(holder.accounts().is_none());
    }

    #[test]
    fn test_holder_with_empty_accounts_is_present() {
        let holder = AccountHolder::new("Ada".to_string()).with_accounts(Vec::new());

        assert_eq!(holder.accounts(), Some(&[][..]));
    }

    #[test]
    fn test_holder_accounts_keep_order() {
        let first = Account::new("A".to_string(), "1111", AccountType::Checking, "USD".to_string(), 1.0);
        let second = Account::new("B".to_string(), "2222", AccountType::Savings, "USD".to_string(), 2.0);
        let holder = AccountHolder::new("Ada".to_string())
            .with_accounts(vec![first.clone(), second.clone()]);

        let accounts = holder.accounts().unwrap();
        assert_eq!(accounts, &[first, second]);
    }
}
