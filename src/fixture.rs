// 🧪 Fixture - the in-memory "REST response"
//
// No service is called. `build_fixture` assembles a fully populated
// response once at startup; `build_response` builds any partial shape.

use crate::entities::{Account, AccountHolder, AccountType, Bank, RestServiceResponse};

/// Which links of the response graph are present
///
/// `accounts: Some(n)` means the holder carries a list of `n` accounts
/// (`Some(0)` is a present-but-empty list). Inner links are ignored when
/// an outer one is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainShape {
    pub bank: bool,
    pub holder: bool,
    pub accounts: Option<usize>,
}

impl ChainShape {
    pub const fn new(bank: bool, holder: bool, accounts: Option<usize>) -> Self {
        ChainShape {
            bank,
            holder,
            accounts,
        }
    }

    /// Fully populated with a single account
    pub fn complete() -> Self {
        ChainShape::new(true, true, Some(1))
    }

    /// Every link present (the list itself may be empty)
    pub fn is_complete(&self) -> bool {
        self.bank && self.holder && self.accounts.is_some()
    }
}

/// Deterministic accounts: "Account 1", "Account 2", ...
pub fn sample_accounts(count: usize) -> Vec<Account> {
    (1..=count)
        .map(|n| {
            let account_type = match n % 3 {
                1 => AccountType::Checking,
                2 => AccountType::Savings,
                _ => AccountType::Credit,
            };
            Account::new(
                format!("Account {}", n),
                &format!("00000{:05}", n),
                account_type,
                "USD".to_string(),
                100.0 * n as f64,
            )
        })
        .collect()
}

pub fn build_response(shape: ChainShape) -> RestServiceResponse {
    let response = RestServiceResponse::new();
    if !shape.bank {
        return response;
    }

    let bank = Bank::new("Bank of America".to_string(), "US".to_string());
    if !shape.holder {
        return response.with_bank(bank);
    }

    let mut holder = AccountHolder::new("Ada Lovelace".to_string());
    if let Some(count) = shape.accounts {
        holder = holder.with_accounts(sample_accounts(count));
    }

    response.with_bank(bank.with_account_holder(holder))
}

/// The startup fixture: every link present, exactly one account
pub fn build_fixture() -> RestServiceResponse {
    build_response(ChainShape::complete())
}
