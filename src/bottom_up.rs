//! Bottom-up tabulation of every feasible split, one item at a time.
//!
//! After the first `k` items have been assigned, the table holds each distinct
//! pair of spoils in which neither party has gone over its share. Spoils are
//! compared by their items, not just their value and count, so two pairs worth
//! the same are still both kept; the final answer needs the exact items.

use std::collections::HashSet;

use crate::item_value::{ItemValue, Total};
use crate::party::Party;
use crate::recursion::count_cap;
use crate::spoils::Spoils;
use crate::split_result::SplitResult;

type Pair<T> = (Spoils<T>, Spoils<T>);

/// The distinct feasible pairs for one prefix of the items, in the order they
/// were first reached.
struct Row<T: ItemValue> {
    pairs: Vec<Pair<T>>,
    seen: HashSet<Pair<T>>,
    cap: usize,
}

impl<T: ItemValue> Row<T> {
    fn new(cap: usize) -> Self {
        Self {
            pairs: Vec::new(),
            seen: HashSet::new(),
            cap,
        }
    }

    fn push(&mut self, pair: Pair<T>) {
        if pair.0.len() >= self.cap || pair.1.len() >= self.cap {
            return;
        }

        if self.seen.insert(pair.clone()) {
            self.pairs.push(pair);
        }
    }

    /// Every feasible pair reachable by handing `item` to either party.
    fn next(&self, item: &T) -> Self {
        let mut row = Row::new(self.cap);

        for (first, second) in &self.pairs {
            for &party in Party::BOTH.iter() {
                row.push(party.extend(first.clone(), second.clone(), item));
            }
        }

        row
    }
}

/// Splits `items` between two parties holding the same number of items, with
/// the smallest possible difference in value.
///
/// Where several splits share the smallest spread, the one reached first is
/// kept, so the choice can differ from the recursive solvers' while the spread
/// never does.
pub fn solve<T: ItemValue>(items: &[T]) -> SplitResult<T> {
    debug!("splitting {} items bottom up", items.len());

    let (head, tail) = match items.split_first() {
        Some(split) => split,
        None => return SplitResult::empty(),
    };

    let mut row = Row::new(count_cap(items.len()));
    for &party in Party::BOTH.iter() {
        row.push(party.extend(Spoils::new(), Spoils::new(), head));
    }

    for (index, item) in tail.iter().enumerate() {
        row = row.next(item);

        trace!("{} feasible splits after {} items", row.pairs.len(), index + 2);
    }

    let mut best: Option<(T::Sum, Pair<T>)> = None;
    for (first, second) in row.pairs {
        let spread = first.value().spread(second.value());

        if best.as_ref().map_or(true, |(best_spread, _)| spread < *best_spread) {
            best = Some((spread, (first, second)));
        }
    }

    match best {
        Some((_, (first, second))) => SplitResult::EqualSplit(first, second),
        None => {
            debug!("no split of {} items gives equal counts", items.len());
            SplitResult::UnequalSplitOnly
        }
    }
}
