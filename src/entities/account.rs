// 💳 Account Entity - Leaf of the response graph
//
// An account is the terminal value the navigator is looking for.
// It has no further links, so nothing below it can be absent.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking account (debit card, daily transactions)
    Checking,

    /// Savings account (interest-bearing)
    Savings,

    /// Credit card (credit line)
    Credit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Credit => "Credit",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account as it appears inside a REST service response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity (UUID)
    pub id: String,

    /// Account name (e.g., "Everyday Checking")
    pub name: String,

    /// Masked account number, e.g. "*1234"
    pub account_number: String,

    pub account_type: AccountType,

    /// Currency (ISO 4217 code: USD, EUR, MXN, etc.)
    pub currency: String,

    pub balance: f64,
}

impl Account {
    /// Create new account with a fresh UUID
    ///
    /// The account number is masked on the way in.
    pub fn new(
        name: String,
        account_number: &str,
        account_type: AccountType,
        currency: String,
        balance: f64,
    ) -> Self {
        Account {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            account_number: Self::mask_account_number(account_number),
            account_type,
            currency,
            balance,
        }
    }

    /// Mask account number (show only last 4 digits)
    ///
    /// Example: "1234567890" → "*1234"
    pub fn mask_account_number(full_number: &str) -> String {
        let chars: Vec<char> = full_number.chars().collect();
        if chars.len() <= 4 {
            return full_number.to_string();
        }
        let last4: String = chars[chars.len() - 4..].iter().collect();
        format!("*{}", last4)
    }
}

// ============================================================================
// TESTS
// ============================================================================
