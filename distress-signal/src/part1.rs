use itertools::Itertools;

use crate::packet::{compare, Outcome};
use crate::parser::{parse_pairs, PacketPair};

impl PacketPair {
    /// Whether the left packet sorts strictly before the right one.
    pub fn in_order(&self) -> bool {
        compare(&self.left, &self.right) == Outcome::Before
    }
}

/// Sums the 1-based indices of the pairs that are already in the right order.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let pairs = parse_pairs(input)?;

    let ordered = pairs.iter().positions(PacketPair::in_order).collect::<Vec<_>>();
    tracing::debug!("Pairs in order (0-based): {:?}", ordered);

    let total = ordered.iter().map(|index| index + 1).sum::<usize>();
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = include_str!("../input1.txt");

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("13", process(EXAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case::pair_1(0, true)]
    #[case::pair_2(1, true)]
    #[case::pair_3(2, false)]
    #[case::pair_4(3, true)]
    #[case::pair_5(4, false)]
    #[case::pair_6(5, true)]
    #[case::pair_7(6, false)]
    #[case::pair_8(7, false)]
    fn test_in_order(#[case] index: usize, #[case] expected: bool) -> miette::Result<()> {
        let pairs = parse_pairs(EXAMPLE)?;
        assert_eq!(expected, pairs[index].in_order());
        Ok(())
    }

    #[test]
    fn test_equal_pair_is_not_in_order() -> miette::Result<()> {
        assert_eq!("0", process("[1,[2]]\n[1,2]")?);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> miette::Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }
}
