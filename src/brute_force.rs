//! Exhaustive top-down recursion: every item is tried with both parties.
//!
//! Takes exponential time in the number of items and stack depth linear in
//! it, so it is only suited to short inputs.

use crate::item_value::ItemValue;
use crate::recursion::{self, NoCache, State};
use crate::split_result::SplitResult;

/// Splits `items` between two parties holding the same number of items, with
/// the smallest possible difference in value.
///
/// Returns `UnequalSplitOnly` when no such split exists, which is the case for
/// every odd number of items.
pub fn solve<T: ItemValue>(items: &[T]) -> SplitResult<T> {
    debug!("splitting {} items by brute force", items.len());

    let cap = recursion::count_cap(items.len());

    recursion::compute(items, cap, State::initial(), &mut NoCache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Spoils;

    #[test]
    fn solve_empty_is_empty_split() {
        assert_eq!(solve::<i32>(&[]), SplitResult::empty());
    }

    #[test]
    fn solve_single_item_is_unequal() {
        assert_matches!(solve(&[5]), SplitResult::UnequalSplitOnly);
    }

    #[test]
    fn solve_odd_count_is_unequal() {
        assert_matches!(solve(&[1, 2, 3]), SplitResult::UnequalSplitOnly);
    }

    #[test]
    fn solve_pair_prefers_first_party_for_first_item() {
        assert_eq!(solve(&[3, 8]), SplitResult::EqualSplit(Spoils::of(3), Spoils::of(8)));
    }

    #[test]
    fn solve_finds_perfect_split() {
        let result = solve(&[1, 2, 3, 4]);

        assert_eq!(result.spread(), Some(0i128));

        let (first, second) = result.parties().expect("even count must split equally");
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn solve_ties_go_to_first_party() {
        // {1, 4} vs {2, 3} and {2, 3} vs {1, 4} both spread 0; the first item
        // goes to the first party when it can
        let result = solve(&[1, 2, 3, 4]);

        let (first, _) = result.parties().expect("even count must split equally");
        assert!(first.items().contains(&1));
    }

    #[test]
    fn solve_balances_outlier() {
        let result = solve(&[10, 1, 1, 1, 1, 1]);

        // 10 must share a party with two ones: 12 vs 3
        assert_eq!(result.spread(), Some(9i128));
    }

    #[test]
    fn solve_handles_negative_values() {
        let result = solve(&[-5, 5, -3, 3]);

        assert_eq!(result.spread(), Some(0i128));
    }
}
