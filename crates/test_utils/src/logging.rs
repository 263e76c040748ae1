//! Test logging

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Installs a test-friendly tracing subscriber once per process
///
/// The filter comes from `RUST_LOG` and defaults to `debug` for the pricing
/// crates. Output goes through the test writer so it is captured per test.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("price_kernel=debug,domain_charges=debug,infra_db=debug")
        });
        // another harness may already have installed a global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
