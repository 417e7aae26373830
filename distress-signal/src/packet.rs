use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::ParseError;
use crate::parser;

/// Values of the two divider packets, `[[2]]` and `[[6]]`.
pub const DIVIDERS: [u32; 2] = [2, 6];

/// A packet value: either a bare integer or a list of packets.
///
/// Equality is structural. It is intentionally not the packet ordering:
/// `2` and `[2]` compare [`Outcome::Equal`] but are not `==`, which is why
/// there is no `Ord` impl and sorting goes through [`compare`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Packet {
    Integer(u32),
    List(Vec<Packet>),
}

impl Packet {
    /// Builds the divider packet `[[value]]`.
    pub fn divider(value: u32) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Integer(value)])])
    }

    pub fn dividers() -> [Packet; 2] {
        DIVIDERS.map(Packet::divider)
    }

    /// Views the packet as a sequence. A bare integer becomes a one-element
    /// slice of itself, so no list is allocated for the coercion.
    fn as_sequence(&self) -> &[Packet] {
        match self {
            Packet::Integer(_) => std::slice::from_ref(self),
            Packet::List(items) => items,
        }
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Integer(value) => write!(f, "{value}"),
            Packet::List(items) => write!(f, "[{}]", items.iter().join(",")),
        }
    }
}

impl FromStr for Packet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_packet(s)
    }
}

/// Result of comparing two packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The left packet sorts first.
    Before,
    /// The left packet sorts later.
    After,
    /// No verdict at this depth; keep comparing.
    Equal,
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Outcome::Before,
            Ordering::Equal => Outcome::Equal,
            Ordering::Greater => Outcome::After,
        }
    }
}

impl From<Outcome> for Ordering {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Before => Ordering::Less,
            Outcome::Equal => Ordering::Equal,
            Outcome::After => Ordering::Greater,
        }
    }
}

/// Compares two packets.
///
/// Integers compare numerically. Anything else is walked as a pair of
/// sequences, with a bare integer coerced to `[n]`. The first position that
/// decides wins; a side that runs out first sorts first. If neither side
/// decides, the packets are [`Outcome::Equal`].
pub fn compare(left: &Packet, right: &Packet) -> Outcome {
    match (left, right) {
        (Packet::Integer(l), Packet::Integer(r)) => l.cmp(r).into(),
        (Packet::Integer(_), Packet::List(_)) | (Packet::List(_), Packet::Integer(_)) => {
            tracing::trace!(%left, %right, "mixed types, coercing integer to list");
            compare_sequences(left.as_sequence(), right.as_sequence())
        }
        (Packet::List(l), Packet::List(r)) => compare_sequences(l, r),
    }
}

fn compare_sequences(left: &[Packet], right: &[Packet]) -> Outcome {
    for index in 0..left.len().max(right.len()) {
        match (left.get(index), right.get(index)) {
            (None, Some(_)) => {
                tracing::trace!(index, "left side ran out of items");
                return Outcome::Before;
            }
            (Some(_), None) => {
                tracing::trace!(index, "right side ran out of items");
                return Outcome::After;
            }
            (Some(l), Some(r)) => match compare(l, r) {
                Outcome::Equal => continue,
                verdict => return verdict,
            },
            (None, None) => break,
        }
    }

    Outcome::Equal
}
