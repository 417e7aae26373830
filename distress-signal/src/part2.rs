use crate::error::SignalError;
use crate::packet::{compare, Packet};
use crate::parser::parse_pairs;

/// Multiplies the 1-based positions of the divider packets once every packet,
/// dividers included, is sorted.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let pairs = parse_pairs(input)?;

    let mut packets = pairs
        .into_iter()
        .flat_map(|pair| [pair.left, pair.right])
        .collect::<Vec<_>>();
    packets.extend(Packet::dividers());
    tracing::debug!("Sorting {} packets", packets.len());

    sort_packets(&mut packets);
    for packet in &packets {
        tracing::debug!("{packet}");
    }

    let key = decoder_key(&packets)?;
    Ok(key.to_string())
}

/// Stable ascending sort using [`compare`]; ties keep their input order.
pub fn sort_packets(packets: &mut [Packet]) {
    packets.sort_by(|a, b| compare(a, b).into());
}

/// Product of the 1-based positions of both dividers in `sorted`.
///
/// Dividers are located by structural equality, so a loaded packet equal to
/// a divider is found in its place.
pub fn decoder_key(sorted: &[Packet]) -> Result<usize, SignalError> {
    Packet::dividers().into_iter().try_fold(1, |key, divider| {
        let position = sorted
            .iter()
            .position(|packet| *packet == divider)
            .ok_or(SignalError::MissingDivider(divider))?;
        Ok(key * (position + 1))
    })
}
