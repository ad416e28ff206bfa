//! Consensus threshold evaluation
//!
//! All fractions are integers at [`FRACTION_SCALE`]; never floating
//! point, so threshold comparisons are bit-reproducible.

use beacon_core::FRACTION_SCALE;

/// True iff `vote_count / member_count` meets the threshold fraction.
///
/// The scaled division truncates toward zero, so rounding can only
/// under-report consensus, never over-report it.
pub fn has_consensus(vote_count: u64, member_count: u64, threshold: u64) -> bool {
    if member_count == 0 {
        return false;
    }
    let scaled = vote_count as u128 * FRACTION_SCALE as u128 / member_count as u128;
    scaled >= threshold as u128
}

/// Smallest vote count that clears the threshold for a given set size
pub fn required_votes(member_count: u64, threshold: u64) -> u64 {
    (threshold as u128 * member_count as u128).div_ceil(FRACTION_SCALE as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_THIRDS: u64 = 666_666;

    #[test]
    fn test_two_thirds_of_four() {
        // 2 of 4 = 50% - not enough
        assert!(!has_consensus(2, 4, TWO_THIRDS));
        // 3 of 4 = 75% - enough
        assert!(has_consensus(3, 4, TWO_THIRDS));
        assert_eq!(required_votes(4, TWO_THIRDS), 3);
    }

    #[test]
    fn test_truncation_is_conservative() {
        // 2 of 3 truncates to exactly 666_666 parts per million
        assert!(has_consensus(2, 3, 666_666));
        assert!(!has_consensus(2, 3, 666_667));
        assert_eq!(required_votes(3, 666_667), 3);
    }

    #[test]
    fn test_monotonic_in_vote_count() {
        let members = 7;
        let threshold = 510_000;
        let first = (0..=members)
            .find(|&votes| has_consensus(votes, members, threshold))
            .unwrap();
        for votes in first..=members {
            assert!(has_consensus(votes, members, threshold));
        }
        assert_eq!(first, required_votes(members, threshold));
    }

    #[test]
    fn test_empty_set_never_reaches_consensus() {
        assert!(!has_consensus(0, 0, 1));
        assert!(!has_consensus(5, 0, 1));
    }

    #[test]
    fn test_full_participation() {
        assert!(has_consensus(4, 4, FRACTION_SCALE));
        assert!(!has_consensus(3, 4, FRACTION_SCALE));
    }
}
