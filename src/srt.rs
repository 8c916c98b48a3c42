use crate::time::TimeInterval;

use std::fmt;

/// A single cue: its position in the file, when it is shown and what it says.
///
/// `content` may span several lines joined by `\n`, and never ends in a
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub index: u64,
    pub interval: TimeInterval,
    pub content: String,
}

/// Cues in display order.
pub type SubtitleSequence = Vec<Subtitle>;

impl Subtitle {
    pub fn new(index: u64, interval: TimeInterval, content: impl Into<String>) -> Self {
        Self {
            index,
            interval,
            content: content.into(),
        }
    }

    /// Writes the record as it appears in an SRT file, numbered `index`.
    pub(crate) fn write_record<W: fmt::Write>(&self, buf: &mut W, index: u64) -> fmt::Result {
        write!(buf, "{}\n{}\n{}", index, self.interval, self.content)
    }
}

impl Default for Subtitle {
    fn default() -> Self {
        Self {
            index: 1,
            interval: TimeInterval::default(),
            content: String::new(),
        }
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.write_record(fmt, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;

    #[test]
    fn default_index_is_one() {
        let sub = Subtitle::default();
        assert_eq!(sub.index, 1);
        assert!(sub.content.is_empty());
    }

    #[test]
    fn display_renders_record_without_trailing_newline() {
        let interval = TimeInterval::new(Time::new(0, 0, 1, 0), Time::new(0, 0, 2, 500));
        let sub = Subtitle::new(7, interval, "Hello\nworld");
        assert_eq!(
            sub.to_string(),
            "7\n00:00:01,000 --> 00:00:02,500\nHello\nworld"
        );
    }
}
