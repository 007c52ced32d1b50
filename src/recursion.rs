use std::collections::HashMap;

use crate::item_value::{ItemValue, Total};
use crate::party::Party;
use crate::split_result::SplitResult;

/// Where the top-down recursion stands: the next item to assign and what each
/// party has taken so far. Doubles as the memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct State<T: ItemValue> {
    pub(crate) index: usize,
    pub(crate) first_value: T::Sum,
    pub(crate) second_value: T::Sum,
    pub(crate) first_count: usize,
    pub(crate) second_count: usize,
}

impl<T: ItemValue> State<T> {
    pub(crate) fn initial() -> Self {
        Self {
            index: 0,
            first_value: <T::Sum as Total>::zero(),
            second_value: <T::Sum as Total>::zero(),
            first_count: 0,
            second_count: 0,
        }
    }

    /// Whether either party already holds `cap` items or more.
    fn is_over(&self, cap: usize) -> bool {
        self.first_count >= cap || self.second_count >= cap
    }
}

/// The most items one party may take before an equal split becomes
/// unreachable.
pub(crate) fn count_cap(item_count: usize) -> usize {
    item_count / 2 + 1
}

/// Storage for already solved subproblems.
pub(crate) trait SubproblemCache<T: ItemValue> {
    fn get(&self, state: &State<T>) -> Option<SplitResult<T>>;

    fn insert(&mut self, state: State<T>, result: &SplitResult<T>);
}

/// Remembers nothing, so every subproblem is solved afresh.
pub(crate) struct NoCache;

impl<T: ItemValue> SubproblemCache<T> for NoCache {
    fn get(&self, _: &State<T>) -> Option<SplitResult<T>> {
        None
    }

    fn insert(&mut self, _: State<T>, _: &SplitResult<T>) {}
}

impl<T: ItemValue> SubproblemCache<T> for HashMap<State<T>, SplitResult<T>> {
    fn get(&self, state: &State<T>) -> Option<SplitResult<T>> {
        HashMap::get(self, state).cloned()
    }

    fn insert(&mut self, state: State<T>, result: &SplitResult<T>) {
        HashMap::insert(self, state, result.clone());
    }
}

/// Solves the split of `items[state.index..]` given what `state` has already
/// assigned, returning only the remaining items' assignment.
pub(crate) fn compute<T, C>(items: &[T], cap: usize, state: State<T>, cache: &mut C) -> SplitResult<T>
where
    T: ItemValue,
    C: SubproblemCache<T>,
{
    if let Some(hit) = cache.get(&state) {
        trace!("subproblem hit: {:?}", state);
        return hit;
    }

    let result = if state.is_over(cap) {
        SplitResult::UnequalSplitOnly
    } else if state.index >= items.len() {
        SplitResult::empty()
    } else {
        let item = &items[state.index];
        let mut best: Option<(T::Sum, SplitResult<T>)> = None;

        for &party in Party::BOTH.iter() {
            let remainder = compute(items, cap, party.advance(&state, item), cache);

            if let SplitResult::EqualSplit(first, second) = remainder {
                let score = party.score(&state, &first, &second, item);

                // strictly less, so the earlier branch wins ties
                if best.as_ref().map_or(true, |(best_score, _)| score < *best_score) {
                    trace!("item {} to {:?} scores {:?}", state.index, party, score);

                    let (first, second) = party.extend(first, second, item);
                    best = Some((score, SplitResult::EqualSplit(first, second)));
                }
            }
        }

        best.map_or(SplitResult::UnequalSplitOnly, |(_, split)| split)
    };

    cache.insert(state, &result);

    result
}
