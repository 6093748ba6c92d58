//! Line sources for the `input` statement.
//!
//! Mirrors the print handler: stdin when running a program, a queue of
//! prepared lines for tests.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Where `input` reads its lines from.
pub enum InputSource {
    /// Blocking reads from the process's standard input.
    Stdin,
    /// Prepared lines, consumed front to back.
    Buffer(Mutex<VecDeque<String>>),
}

impl InputSource {
    /// Buffered source over the given lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputSource::Buffer(Mutex::new(lines.into_iter().map(Into::into).collect()))
    }

    /// Read one line without its terminator. `Ok(None)` at end of stream.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            InputSource::Stdin => {
                let mut line = String::new();
                let read = io::stdin().lock().read_line(&mut line)?;
                if read == 0 {
                    return Ok(None);
                }
                strip_terminator(&mut line);
                Ok(Some(line))
            }
            InputSource::Buffer(queue) => Ok(queue.lock().pop_front()),
        }
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Shared input source that can be passed around.
pub type SharedInputSource = std::sync::Arc<InputSource>;

/// Create a stdin input source.
pub fn stdin_source() -> SharedInputSource {
    std::sync::Arc::new(InputSource::Stdin)
}

/// Create a buffered input source over `lines`.
pub fn buffer_source<I, S>(lines: I) -> SharedInputSource
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::sync::Arc::new(InputSource::lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lines_in_order() {
        let source = InputSource::lines(["1", "two"]);
        assert_eq!(source.read_line().ok(), Some(Some("1".to_string())));
        assert_eq!(source.read_line().ok(), Some(Some("two".to_string())));
        assert_eq!(source.read_line().ok(), Some(None));
    }

    #[test]
    fn test_strip_terminator() {
        let mut unix = "abc\n".to_string();
        let mut dos = "abc\r\n".to_string();
        let mut bare = "abc".to_string();
        strip_terminator(&mut unix);
        strip_terminator(&mut dos);
        strip_terminator(&mut bare);
        assert_eq!(unix, "abc");
        assert_eq!(dos, "abc");
        assert_eq!(bare, "abc");
    }
}
