//! Session configuration.

use chileno_eval::{stdin_source, stdout_handler, SharedInputSource, SharedPrintHandler};

/// Where a session reads and writes, and whether it installs tracing.
pub struct SessionConfig {
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: SharedInputSource,
    pub(crate) tracing: bool,
}

impl SessionConfig {
    /// Stdout, stdin, and tracing when `RUST_LOG` is set.
    pub fn new() -> Self {
        Self {
            print_handler: stdout_handler(),
            input: stdin_source(),
            tracing: std::env::var_os("RUST_LOG").is_some(),
        }
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    #[must_use]
    pub fn input(mut self, input: SharedInputSource) -> Self {
        self.input = input;
        self
    }

    /// Install the tracing subscriber when the session is created.
    #[must_use]
    pub fn tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
