//! Line-buffered streaming over the engine.
//!
//! [`LineSession`] lets an interactive front end feed text in arbitrary
//! chunks while the engine itself stays stateless: all buffering lives in
//! the caller-owned session value. Each completed line is processed
//! independently with [`process`](crate::process), matching the contract
//! that no engine state persists between calls.

use crate::pipeline::process;

/// Caller-owned accumulator that processes input one completed line at a
/// time.
///
/// # Example
///
/// ```
/// use reflow_engine::LineSession;
///
/// let mut session = LineSession::new();
/// assert_eq!(session.push("go (u"), "");
/// assert_eq!(session.push("p) now\n"), "GO now\n");
/// assert_eq!(session.finish(), "");
/// ```
#[derive(Debug, Default)]
pub struct LineSession {
    pending: String,
}

impl LineSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of input, returning the processed form of every line
    /// completed by it (trailing newlines preserved).
    pub fn push(&mut self, chunk: &str) -> String {
        self.pending.push_str(chunk);

        let mut out = String::new();
        while let Some(newline) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=newline).collect();
            let content = line.strip_suffix('\n').unwrap_or(&line);
            out.push_str(&process(content));
            out.push('\n');
        }
        out
    }

    /// Consume the session, processing whatever unterminated input
    /// remains.
    #[must_use]
    pub fn finish(self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            process(&self.pending)
        }
    }

    /// The buffered input that has not yet formed a complete line.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_buffers_until_newline() {
        let mut session = LineSession::new();
        assert_eq!(session.push("1E (he"), "");
        assert_eq!(session.pending(), "1E (he");
        assert_eq!(session.push("x) files\n"), "30 files\n");
        assert_eq!(session.pending(), "");
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut session = LineSession::new();
        assert_eq!(session.push("go (up)\nHi , world !\n"), "GO\nHi, world!\n");
    }

    #[test]
    fn test_finish_processes_remainder() {
        let mut session = LineSession::new();
        assert_eq!(session.push("a honest man"), "");
        assert_eq!(session.finish(), "an honest man");
    }

    #[test]
    fn test_finish_empty() {
        let session = LineSession::new();
        assert_eq!(session.finish(), "");
    }

    #[test]
    fn test_lines_are_independent() {
        let mut session = LineSession::new();
        // The marker on the second line cannot reach words on the first.
        assert_eq!(session.push("one two\n(up, 5) three\n"), "one two\nthree\n");
    }
}
