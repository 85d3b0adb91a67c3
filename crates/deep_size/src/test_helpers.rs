//! Shared test utilities. Only compiled in test builds.

use std::sync::Once;

use crate::shape::DeepSize;
use crate::table::REFERENCE_WIDTH;

/// Shorthand for the reference width in expected sizes.
pub(crate) const R: u64 = REFERENCE_WIDTH;

/// Size of a text value with `units` UTF-16 code units.
pub(crate) const fn text(units: u64) -> u64 {
    R + 4 + 4 + 2 * units
}

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=deep_size=trace`.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Measure `value`, failing the test on a measurement error.
pub(crate) fn measured<T: DeepSize>(value: &T) -> u64 {
    init_tracing();
    match crate::deep_size(value) {
        Ok(size) => size,
        Err(err) => panic!("measurement failed: {err}"),
    }
}
