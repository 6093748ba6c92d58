//! Chilenoc - driver for the Chileno core.
//!
//! Takes a tree built by the front end and either runs it or renders it as
//! C++. Fatal evaluation errors are reported on stderr and turned into a
//! non-zero exit status.
//!
//! Set `RUST_LOG` (for example `RUST_LOG=chileno_eval=debug`) to see
//! evaluation traces.

mod config;
mod reporting;
mod session;

pub use config::SessionConfig;
pub use reporting::{report_error, ExitStatus};
pub use session::Session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
