// Entity Models
// The REST service response graph, root to leaf:
//
// RestServiceResponse → Bank → AccountHolder → Vec<Account>
//
// Each entity owns its next link as an Option and exposes it
// through a borrowing accessor.

pub mod response;
pub mod bank;
pub mod account_holder;
pub mod account;

pub use response::RestServiceResponse;
pub use bank::Bank;
pub use account_holder::AccountHolder;
pub use account::{Account, AccountType};
