// Fun With Optionals - Core Library
// Null-safe traversal of a REST service response graph

pub mod entities;
pub mod navigator;
pub mod fixture;
pub mod error;

// Re-export commonly used types
pub use entities::{
    Account, AccountType, AccountHolder, Bank, RestServiceResponse,
};
pub use navigator::{
    resolve_accounts, resolve_accounts_or, resolve_accounts_guarded,
    trace_resolution, Resolution,
};
pub use fixture::{build_fixture, build_response, sample_accounts, ChainShape};
pub use error::{ensure_non_empty, NavigationError, ResolutionPath};
