//! Fatal error reporting and exit status.

use std::io::{self, Write};

use chileno_eval::EvalError;

/// Outcome of running a program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// A fatal error was reported.
    Failure,
}

impl ExitStatus {
    /// Process exit code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Write `err` as a one-line diagnostic: `error[<category>]: <message>`.
pub fn report_error(out: &mut impl Write, err: &EvalError) -> io::Result<()> {
    writeln!(out, "error[{}]: {err}", err.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chileno_eval::errors::undefined_variable;

    #[test]
    fn test_report_format() {
        let mut out = Vec::new();
        report_error(&mut out, &undefined_variable("x")).ok();
        assert_eq!(
            String::from_utf8_lossy(&out),
            "error[binding]: undefined variable: x\n"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert!(!ExitStatus::Failure.is_success());
    }
}
