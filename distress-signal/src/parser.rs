use nom::{
    branch::alt,
    character::complete::{char, digit1, line_ending, multispace0},
    combinator::{eof, map, map_res, opt},
    error::ErrorKind,
    multi::{many0, many1, separated_list0},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};
use nom_locate::LocatedSpan;

use crate::error::ParseError;
use crate::packet::Packet;

type Span<'a> = LocatedSpan<&'a str>;

/// Two packets read from consecutive lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketPair {
    pub left: Packet,
    pub right: Packet,
}

impl PacketPair {
    pub fn new(left: Packet, right: Packet) -> Self {
        Self { left, right }
    }
}

/// Parses the puzzle input into packet pairs.
///
/// Pairs may be separated by any number of blank lines. A single trailing
/// packet without a partner is dropped.
#[tracing::instrument(skip_all)]
pub fn parse_pairs(input: &str) -> Result<Vec<PacketPair>, ParseError> {
    let (_, (pairs, unpaired)) =
        packet_pairs(Span::new(input)).map_err(|err| to_parse_error(input, err))?;

    if let Some(packet) = unpaired {
        tracing::warn!(%packet, "dropping unpaired trailing packet");
    }
    tracing::debug!("Parsed {} packet pairs", pairs.len());

    Ok(pairs)
}

/// Parses exactly one packet, ignoring surrounding whitespace.
pub fn parse_packet(input: &str) -> Result<Packet, ParseError> {
    let (_, packet) = delimited(multispace0, packet, tuple((multispace0, eof)))(Span::new(input))
        .map_err(|err| to_parse_error(input, err))?;
    Ok(packet)
}

fn to_parse_error(src: &str, err: nom::Err<nom::error::Error<Span>>) -> ParseError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            ParseError::at(src, e.input.location_offset(), e.code)
        }
        nom::Err::Incomplete(_) => ParseError::at(src, src.len(), ErrorKind::Complete),
    }
}

fn integer(input: Span) -> IResult<Span, Packet> {
    map_res(digit1, |digits: Span| {
        digits.fragment().parse::<u32>().map(Packet::Integer)
    })(input)
}

fn list(input: Span) -> IResult<Span, Packet> {
    map(
        delimited(char('['), separated_list0(char(','), packet), char(']')),
        Packet::List,
    )(input)
}

fn packet(input: Span) -> IResult<Span, Packet> {
    alt((integer, list))(input)
}

fn packet_pair(input: Span) -> IResult<Span, PacketPair> {
    map(separated_pair(packet, line_ending, packet), |(left, right)| {
        PacketPair::new(left, right)
    })(input)
}

fn packet_pairs(input: Span) -> IResult<Span, (Vec<PacketPair>, Option<Packet>)> {
    delimited(
        multispace0,
        tuple((
            separated_list0(many1(line_ending), packet_pair),
            opt(preceded(many0(line_ending), packet)),
        )),
        tuple((multispace0, eof)),
    )(input)
}
