use ropey::Rope;
use std::fmt;

/// Zero-indexed line/column position in the original string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    /// Byte column from the start of the line
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets of the original string to line/column pairs.
///
/// Only `\n` terminates a line. The crate is built without ropey's CR and
/// Unicode line-break features, so `\r` stays part of the line it ends.
#[derive(Debug, Clone)]
pub struct Locator {
    rope: Rope,
}

impl Locator {
    pub fn new(source: &str) -> Self {
        Self {
            rope: Rope::from_str(source),
        }
    }

    /// Offsets past the end clamp to the end of the text
    pub fn locate(&self, offset: usize) -> Location {
        let offset = offset.min(self.rope.len_bytes());
        let line = self.rope.byte_to_line(offset);
        Location {
            line,
            column: offset - self.rope.line_to_byte(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let locator = Locator::new("abcdef");
        assert_eq!(locator.locate(0), Location { line: 0, column: 0 });
        assert_eq!(locator.locate(4), Location { line: 0, column: 4 });
    }

    #[test]
    fn test_multi_line() {
        let locator = Locator::new("ab\ncde\n\nf");
        // Newline itself belongs to the line it ends
        assert_eq!(locator.locate(2), Location { line: 0, column: 2 });
        assert_eq!(locator.locate(3), Location { line: 1, column: 0 });
        assert_eq!(locator.locate(5), Location { line: 1, column: 2 });
        assert_eq!(locator.locate(7), Location { line: 2, column: 0 });
        assert_eq!(locator.locate(8), Location { line: 3, column: 0 });
        assert_eq!(locator.locate(9), Location { line: 3, column: 1 });
    }

    #[test]
    fn test_carriage_return_is_not_a_break() {
        let locator = Locator::new("a\r\nb\rc");
        assert_eq!(locator.locate(1), Location { line: 0, column: 1 });
        assert_eq!(locator.locate(3), Location { line: 1, column: 0 });
        assert_eq!(locator.locate(6), Location { line: 1, column: 3 });
    }

    #[test]
    fn test_clamps_past_end() {
        let locator = Locator::new("ab\ncd");
        assert_eq!(locator.locate(100), Location { line: 1, column: 2 });
        assert_eq!(Locator::new("").locate(3), Location { line: 0, column: 0 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Location { line: 3, column: 7 }.to_string(), "3:7");
    }
}
