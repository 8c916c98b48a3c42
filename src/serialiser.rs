use crate::srt::Subtitle;

use std::fmt;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

struct Document<'a> {
    subs: &'a [Subtitle],
    auto_index: bool,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (pos, sub) in self.subs.iter().enumerate() {
            if pos > 0 {
                fmt.write_str("\n\n")?;
            }
            let index = if self.auto_index { pos as u64 + 1 } else { sub.index };
            sub.write_record(fmt, index)?;
        }
        Ok(())
    }
}

/// Renders subtitles as SRT text.
///
/// Records are separated by a single blank line and the last record is not
/// followed by a newline. With `auto_index` set, records are numbered `1..N`
/// in output order; the stored indices in `subs` are left alone.
pub fn serialise(subs: &[Subtitle], auto_index: bool) -> String {
    Document { subs, auto_index }.to_string()
}

pub fn write_srt<W: Write>(dst: W, subs: &[Subtitle], auto_index: bool) -> Result<()> {
    let mut writer = BufWriter::new(dst);
    write!(writer, "{}", Document { subs, auto_index })
        .context("Failed to write subtitles.")?;
    writer.flush().context("Failed to write subtitles.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::time::{Time, TimeInterval};
    use proptest::prelude::*;

    fn cue(index: u64, start: u64, end: u64, content: &str) -> Subtitle {
        Subtitle::new(
            index,
            TimeInterval::new(Time::from_millis(start), Time::from_millis(end)),
            content,
        )
    }

    #[test]
    fn empty_sequence_is_empty_text() {
        assert_eq!(serialise(&[], true), "");
    }

    #[test]
    fn single_subtitle_has_no_separator() {
        let subs = vec![cue(4, 1000, 2000, "Hi")];
        assert_eq!(serialise(&subs, true), "1\n00:00:01,000 --> 00:00:02,000\nHi");
    }

    #[test]
    fn auto_index_renumbers_output_only() {
        let subs = vec![cue(9, 1000, 2000, "A"), cue(9, 3000, 4000, "B\nC")];

        assert_eq!(
            serialise(&subs, true),
            "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB\nC"
        );
        assert_eq!(subs[0].index, 9);
        assert_eq!(subs[1].index, 9);
    }

    #[test]
    fn stored_indices_are_kept_without_auto_index() {
        let subs = vec![cue(7, 1000, 2000, "A"), cue(3, 3000, 4000, "B")];
        assert_eq!(
            serialise(&subs, false),
            "7\n00:00:01,000 --> 00:00:02,000\nA\n\n3\n00:00:03,000 --> 00:00:04,000\nB"
        );
    }

    #[test]
    fn normalisation_is_stable_after_one_pass() {
        let input = "\r\n12\r\n0:0:1,5 --> 00:00:02,000\r\nA\r\n\r\n\r\n4\n00:00:03,000 --> 00:00:04,000\nB\nC\n\n";
        let once = serialise(&parse(input).unwrap(), true);
        let twice = serialise(&parse(&once).unwrap(), true);

        assert_eq!(
            once,
            "1\n00:00:01,005 --> 00:00:02,000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB\nC"
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn write_srt_matches_serialise() {
        let subs = vec![cue(1, 0, 500, "A"), cue(2, 600, 900, "B")];
        let mut buf = Vec::new();

        write_srt(&mut buf, &subs, true).expect("Failed to write to buffer");

        assert_eq!(String::from_utf8(buf).unwrap(), serialise(&subs, true));
    }

    #[test]
    fn record_layout_matches_display() {
        let sub = cue(42, 1000, 2000, "A\nB");
        assert_eq!(serialise(&[sub.clone()], false), sub.to_string());
    }

    fn any_cue() -> impl Strategy<Value = Subtitle> {
        (
            1u64..10_000,
            0u64..100_000_000,
            0u64..100_000,
            prop::collection::vec("[a-zA-Z0-9 ,.!?'-]*[a-zA-Z0-9.!?]", 1..4),
        )
            .prop_map(|(index, start, len, lines)| {
                cue(index, start, start + len, &lines.join("\n"))
            })
    }

    proptest! {
        #[test]
        fn parse_restores_serialised_subtitles(
            subs in prop::collection::vec(any_cue(), 0..20)
        ) {
            let text = serialise(&subs, false);
            prop_assert_eq!(parse(&text).unwrap(), subs);
        }

        #[test]
        fn auto_index_numbers_from_one_and_keeps_the_rest(
            subs in prop::collection::vec(any_cue(), 0..20)
        ) {
            let reparsed = parse(&serialise(&subs, true)).unwrap();

            prop_assert_eq!(reparsed.len(), subs.len());
            for (pos, (orig, new)) in subs.iter().zip(&reparsed).enumerate() {
                prop_assert_eq!(new.index, pos as u64 + 1);
                prop_assert_eq!(new.interval, orig.interval);
                prop_assert_eq!(&new.content, &orig.content);
            }
        }
    }
}
