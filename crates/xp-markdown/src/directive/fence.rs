//! Code fence state for line scanning.
//!
//! Directive markers inside fenced code are literal code, so the line scanner
//! asks this tracker before classifying a line.

/// Open fence: marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenFence {
    marker: char,
    len: usize,
}

/// Tracks whether the scanner is inside a fenced code block.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// line holding only the same marker, repeated at least as often.
#[derive(Debug, Default)]
pub(crate) struct FenceState {
    open: Option<OpenFence>,
}

impl FenceState {
    pub(crate) fn inside(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line.
    pub(crate) fn advance(&mut self, line: &str) {
        let trimmed = line.trim_start();
        match self.open {
            Some(fence) => {
                if let Some(run) = marker_run(trimmed, fence.marker)
                    && run >= fence.len
                    && trimmed[run..].trim().is_empty()
                {
                    self.open = None;
                }
            }
            None => {
                for marker in ['`', '~'] {
                    if let Some(len) = marker_run(trimmed, marker)
                        && len >= 3
                    {
                        self.open = Some(OpenFence { marker, len });
                        break;
                    }
                }
            }
        }
    }
}

/// Length of the run of `marker` starting `s`, if any.
fn marker_run(s: &str, marker: char) -> Option<usize> {
    let run = s.chars().take_while(|&c| c == marker).count();
    (run > 0).then_some(run * marker.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(lines: &[&str]) -> FenceState {
        let mut state = FenceState::default();
        for line in lines {
            state.advance(line);
        }
        state
    }

    #[test]
    fn test_outside_by_default() {
        assert!(!FenceState::default().inside());
    }

    #[test]
    fn test_open_and_close() {
        assert!(feed(&["```go"]).inside());
        assert!(!feed(&["```go", "func main() {}", "```"]).inside());
        assert!(!feed(&["~~~", ":::solution", "~~~"]).inside());
    }

    #[test]
    fn test_close_needs_same_marker_and_length() {
        assert!(feed(&["````", "```"]).inside());
        assert!(feed(&["```", "~~~"]).inside());
        assert!(!feed(&["```", "`````"]).inside());
    }

    #[test]
    fn test_close_rejects_info_string() {
        assert!(feed(&["```", "```python"]).inside());
    }

    #[test]
    fn test_short_runs_do_not_open() {
        assert!(!feed(&["``inline``"]).inside());
    }
}
