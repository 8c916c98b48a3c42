use std::error::Error;
use std::fmt;

/// Malformed or truncated SRT text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

/// Reasons a remap is refused. The sequence is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapError {
    EmptySequence,
    DegenerateTarget,
    DegenerateSource,
    OutOfRange { cue: usize, millis: i128 },
    Overflow { cue: usize },
    TargetOverflow,
}

impl Error for RemapError {}

impl fmt::Display for RemapError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemapError::EmptySequence => write!(fmt, "cannot remap an empty subtitle sequence"),
            RemapError::DegenerateTarget => {
                write!(fmt, "target interval has the same start and end time")
            }
            RemapError::DegenerateSource => write!(
                fmt,
                "first subtitle starts at the same time the last subtitle ends"
            ),
            RemapError::OutOfRange { cue, millis } => write!(
                fmt,
                "subtitle #{} would be moved to {}ms, which is not a valid timestamp",
                cue, millis
            ),
            RemapError::Overflow { cue } => write!(
                fmt,
                "timestamps of subtitle #{} cannot be represented in milliseconds",
                cue
            ),
            RemapError::TargetOverflow => {
                write!(fmt, "target interval cannot be represented in milliseconds")
            }
        }
    }
}
