// 🧭 Safe Navigator
// Resolve the accounts list of a REST service response without touching
// a link whose parent is missing.
//
//    RestServiceResponse → Bank → AccountHolder → Vec<Account>
//
// Two equivalent forms are provided: one built from `Option` combinators,
// one from explicit presence checks at every level. Both fall back to an
// empty slice when any link is absent.

use std::fmt;

use crate::entities::{Account, AccountHolder, Bank, RestServiceResponse};

// ============================================================================
// RESOLUTION
// ============================================================================

/// Accounts of the response, or an empty slice if any link is absent
pub fn resolve_accounts(root: Option<&RestServiceResponse>) -> &[Account] {
    resolve_accounts_or(root, &[])
}

/// Same as [`resolve_accounts`], falling back to `default` instead of `&[]`
///
/// A present-but-empty accounts list is returned as is; only an absent
/// link selects the default.
pub fn resolve_accounts_or<'a>(
    root: Option<&'a RestServiceResponse>,
    default: &'a [Account],
) -> &'a [Account] {
    root.and_then(RestServiceResponse::bank)
        .and_then(Bank::account_holder)
        .and_then(AccountHolder::accounts)
        .unwrap_or(default)
}

/// Accounts of the response using an explicit check at each level
pub fn resolve_accounts_guarded(root: Option<&RestServiceResponse>) -> &[Account] {
    if let Some(response) = root {
        if let Some(bank) = response.bank() {
            if let Some(holder) = bank.account_holder() {
                if let Some(accounts) = holder.accounts() {
                    return accounts;
                }
            }
        }
    }
    &[]
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Where a resolution stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No response at all
    MissingRoot,
    MissingBank,
    MissingAccountHolder,
    /// Holder present, accounts list absent
    MissingAccounts,
    /// Accounts list present (possibly empty)
    Found { count: usize },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::MissingRoot => write!(f, "no response"),
            Resolution::MissingBank => write!(f, "response has no bank"),
            Resolution::MissingAccountHolder => write!(f, "bank has no account holder"),
            Resolution::MissingAccounts => write!(f, "account holder has no accounts list"),
            Resolution::Found { count } => write!(f, "{} account(s) found", count),
        }
    }
}

/// Report the first absent link, or how many accounts were found
pub fn trace_resolution(root: Option<&RestServiceResponse>) -> Resolution {
    let Some(response) = root else {
        return Resolution::MissingRoot;
    };
    let Some(bank) = response.bank() else {
        return Resolution::MissingBank;
    };
    let Some(holder) = bank.account_holder() else {
        return Resolution::MissingAccountHolder;
    };
    match holder.accounts() {
        Some(accounts) => Resolution::Found { count: accounts.len() },
        None => Resolution::MissingAccounts,
    }
}

// ============================================================================
// TESTS
// ============================================================================
