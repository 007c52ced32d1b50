//! Top-down recursion which remembers every subproblem it has solved.
//!
//! A subproblem is identified by the next item index together with each
//! party's value and item count so far. The cache lives only as long as one
//! call to [`solve`](fn.solve.html).

use std::collections::HashMap;

use crate::item_value::ItemValue;
use crate::recursion::{self, State};
use crate::split_result::SplitResult;

type Cache<T> = HashMap<State<T>, SplitResult<T>>;

/// Splits `items` between two parties holding the same number of items, with
/// the smallest possible difference in value.
///
/// Chooses the same split as [`brute_force::solve`](../brute_force/fn.solve.html).
pub fn solve<T: ItemValue>(items: &[T]) -> SplitResult<T> {
    debug!("splitting {} items with memoization", items.len());

    let cap = recursion::count_cap(items.len());
    let mut cache = Cache::new();

    let result = recursion::compute(items, cap, State::initial(), &mut cache);

    debug!("memoized {} subproblems", cache.len());

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force;

    #[test]
    fn solve_empty_is_empty_split() {
        assert_eq!(solve::<u32>(&[]), SplitResult::empty());
    }

    #[test]
    fn solve_single_item_is_unequal() {
        assert_matches!(solve(&[5]), SplitResult::UnequalSplitOnly);
    }

    #[test]
    fn solve_odd_count_is_unequal() {
        assert_matches!(solve(&[4, 4, 4, 4, 4]), SplitResult::UnequalSplitOnly);
    }

    #[test]
    fn solve_finds_perfect_split() {
        assert_eq!(solve(&[1, 2, 3, 4]).spread(), Some(0i128));
    }

    #[test]
    fn solve_matches_brute_force_exactly() {
        let inputs: &[&[i32]] = &[
            &[7, 3],
            &[1, 2, 3, 4],
            &[9, 9, 1, 1, 5, 6],
            &[2, 2, 2, 2, 2, 2, 2, 2],
            &[-4, 11, 0, 3, 8, -2],
        ];

        for &items in inputs {
            assert_eq!(solve(items), brute_force::solve(items), "items: {:?}", items);
        }
    }

    #[test]
    fn solve_repeated_values_share_subproblems() {
        let items = vec![1u64; 24];
        let mut cache = Cache::new();

        let result = recursion::compute(&items, recursion::count_cap(24), State::initial(), &mut cache);

        assert_eq!(result.spread(), Some(0));

        // one state per (first count, second count): every pair up to 12 each,
        // plus the 12 + 12 states where one party reaches 13 and is cut off
        assert_eq!(cache.len(), 13 * 13 + 12 + 12);
    }

    #[test]
    fn solve_is_repeatable() {
        let items = [8, 3, 5, 1, 9, 2];

        assert_eq!(solve(&items), solve(&items));
    }
}
