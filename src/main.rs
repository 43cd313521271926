use anyhow::Result;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use fun_with_optionals::{
    build_fixture, ensure_non_empty, resolve_accounts, resolve_accounts_guarded,
    trace_resolution, Account, NavigationError, ResolutionPath,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🧭 Fun With Optionals - Safe Navigation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Build the response graph once
    let response = build_fixture();
    let root = Some(&response);
    debug!(resolution = %trace_resolution(root), "Fixture ready");

    // 2. Explicit checks at every level
    let guarded = check(ResolutionPath::Guarded, resolve_accounts_guarded(root))?;

    // 3. Option combinators
    let chained = check(ResolutionPath::Chained, resolve_accounts(root))?;

    println!(
        "✅ Both paths resolved {} account(s) ({} guarded, {} chained)",
        chained.len(),
        guarded.len(),
        chained.len()
    );

    Ok(())
}

fn check(path: ResolutionPath, accounts: &[Account]) -> Result<&[Account], NavigationError> {
    let accounts = ensure_non_empty(path, accounts).map_err(|e| {
        error!(%path, error = %e, "Resolution failed");
        e
    })?;

    info!(%path, accounts = accounts.len(), "Resolved accounts");
    for account in accounts {
        debug!(
            %path,
            name = %account.name,
            number = %account.account_number,
            account_type = account.account_type.as_str(),
            "Account"
        );
    }

    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rejects_empty_result() {
        let err = check(ResolutionPath::Chained, &[]).unwrap_err();
        assert_eq!(err, NavigationError::UnexpectedEmpty { path: ResolutionPath::Chained });
    }

    #[test]
    fn test_check_passes_fixture_accounts() {
        let response = build_fixture();
        let resolved = resolve_accounts_guarded(Some(&response));

        let accounts = check(ResolutionPath::Guarded, resolved).unwrap();
        assert_eq!(accounts.len(), 1);
    }
}
