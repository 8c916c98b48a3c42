use crate::error::ParseError;
use crate::srt::{Subtitle, SubtitleSequence};
use crate::time::{Time, TimeInterval};

use log::debug;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{digit1, line_ending, multispace0, multispace1, space0, space1};
use nom::combinator::{all_consuming, eof, map_res, opt};
use nom::error::{convert_error, ErrorKind, VerboseError};
use nom::multi::many_till;
use nom::sequence::terminated;
use nom::{error_position, Err, IResult};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Reads a complete SRT document.
///
/// Empty (or whitespace-only) input yields an empty sequence. Every record
/// must be complete: a truncated trailing record is an error rather than a
/// partially filled cue.
pub fn parse(input: &str) -> Result<SubtitleSequence, ParseError> {
    let subs = finish(input, srt_file(input))?;
    debug!("Parsed {} subtitles", subs.len());
    Ok(subs)
}

/// Reads a single `HH:MM:SS,mmm` timestamp with nothing around it.
pub fn parse_time(input: &str) -> Result<Time, ParseError> {
    finish(input, all_consuming(timestamp)(input))
}

/// Reads a single `HH:MM:SS,mmm --> HH:MM:SS,mmm` line.
pub fn parse_interval(input: &str) -> Result<TimeInterval, ParseError> {
    finish(input, all_consuming(interval)(input))
}

fn finish<T>(input: &str, result: ParseResult<T>) -> Result<T, ParseError> {
    match result {
        Ok((_, value)) => Ok(value),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => {
            Err(ParseError(convert_error(input, err)))
        }
        Err(Err::Incomplete(_)) => Err(ParseError(
            "Unexpected end of input while reading SRT data".to_string(),
        )),
    }
}

fn optional_bom(input: &str) -> ParseResult<Option<&str>> {
    opt(tag("\u{FEFF}"))(input)
}

fn srt_file(input: &str) -> ParseResult<SubtitleSequence> {
    let (input, _) = optional_bom(input)?;
    let (mut input, _) = multispace0(input)?;
    let mut subs = Vec::new();
    while !input.is_empty() {
        let (rem_input, sub) = subtitle(input)?;
        subs.push(sub);
        let (rem_input, _) = multispace0(rem_input)?;
        input = rem_input;
    }
    Ok((input, subs))
}

fn subtitle(input: &str) -> ParseResult<Subtitle> {
    let (input, index) = terminated(index, multispace1)(input)?;
    let (input, interval) = terminated(interval, alt((line_ending, eof)))(input)?;
    let (input, content) = content(input)?;

    Ok((
        input,
        Subtitle {
            index,
            interval,
            content,
        },
    ))
}

fn content(input: &str) -> ParseResult<String> {
    let line = terminated(
        take_while1(|c: char| c != '\n' && c != '\r'),
        alt((line_ending, eof)),
    );

    let (input, (lines, _)) = many_till(line, alt((line_ending, eof)))(input)?;

    Ok((input, lines.join("\n")))
}

fn interval(input: &str) -> ParseResult<TimeInterval> {
    let (input, start) = timestamp(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = tag("-->")(input)?;
    let (input, _) = space1(input)?;
    let (input, end) = timestamp(input)?;
    let (input, _) = space0(input)?;

    Ok((input, TimeInterval::new(start, end)))
}

fn timestamp(input: &str) -> ParseResult<Time> {
    let (input, hour) = number(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minute) = number(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, second) = number(input)?;
    let (input, _) = tag(",")(input)?;
    let (rem_input, millisecond) = number(input)?;

    let time = Time::new(hour, minute, second, millisecond);
    if time.checked_millis().is_none() {
        return Err(Err::Error(error_position!(input, ErrorKind::TooLarge)));
    }
    Ok((rem_input, time))
}

fn index(input: &str) -> ParseResult<u64> {
    number(input)
}

fn number(input: &str) -> ParseResult<u64> {
    map_res(digit1, |s: &str| s.parse())(input)
}
