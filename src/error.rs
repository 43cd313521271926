// Navigation errors
//
// Absent links are data, not errors. The only failure is a resolution
// path coming back empty on a graph that is known to hold accounts.

use std::fmt;

use thiserror::Error;

use crate::entities::Account;

/// Which of the two resolution paths produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// `Option` combinators
    Chained,
    /// Explicit presence checks at each level
    Guarded,
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPath::Chained => write!(f, "chained"),
            ResolutionPath::Guarded => write!(f, "guarded"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{path} resolution returned no accounts for a fully populated response")]
    UnexpectedEmpty { path: ResolutionPath },
}

/// Fail if a resolution path returned an empty slice
pub fn ensure_non_empty(
    path: ResolutionPath,
    accounts: &[Account],
) -> Result<&[Account], NavigationError> {
    if accounts.is_empty() {
        return Err(NavigationError::UnexpectedEmpty { path });
    }
    Ok(accounts)
}
