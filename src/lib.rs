//! Linear retiming of SubRip (`.srt`) subtitles.
//!
//! Text is read into a [`SubtitleSequence`] with [`parse`], stretched onto a
//! new time span with [`remap`] and written back out with [`serialise`].

pub mod error;
pub mod parser;
pub mod remap;
pub mod serialiser;
pub mod srt;
pub mod time;

pub use crate::error::{ParseError, RemapError};
pub use crate::parser::parse;
pub use crate::remap::remap;
pub use crate::serialiser::{serialise, write_srt};
pub use crate::srt::{Subtitle, SubtitleSequence};
pub use crate::time::{Time, TimeInterval};
