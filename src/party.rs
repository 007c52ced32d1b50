use crate::item_value::{ItemValue, Total};
use crate::recursion::State;
use crate::spoils::Spoils;

/// One of the two parties an item may be assigned to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) enum Party {
    First,
    Second,
}

impl Party {
    /// Both parties, in the order their branches are tried.
    pub(crate) const BOTH: [Party; 2] = [Party::First, Party::Second];

    /// The recursion state after `item` is handed to this party.
    pub(crate) fn advance<T: ItemValue>(self, state: &State<T>, item: &T) -> State<T> {
        let (first_value, first_count, second_value, second_count) = match self {
            Party::First => (
                state.first_value.plus(&item.widen()),
                state.first_count + 1,
                state.second_value.clone(),
                state.second_count,
            ),
            Party::Second => (
                state.first_value.clone(),
                state.first_count,
                state.second_value.plus(&item.widen()),
                state.second_count + 1,
            ),
        };

        State {
            index: state.index + 1,
            first_value,
            second_value,
            first_count,
            second_count,
        }
    }

    /// Hands `item` to this party's spoils.
    pub(crate) fn extend<T: ItemValue>(
        self,
        first: Spoils<T>,
        second: Spoils<T>,
        item: &T,
    ) -> (Spoils<T>, Spoils<T>) {
        match self {
            Party::First => (first.with(item.clone()), second),
            Party::Second => (first, second.with(item.clone())),
        }
    }

    /// The spread between both parties' totals when `item` goes to this party,
    /// on top of what `state` already assigned and what the remaining items
    /// contributed through `first` and `second`.
    pub(crate) fn score<T: ItemValue>(
        self,
        state: &State<T>,
        first: &Spoils<T>,
        second: &Spoils<T>,
        item: &T,
    ) -> T::Sum {
        let mut first_total = state.first_value.plus(first.value());
        let mut second_total = state.second_value.plus(second.value());

        match self {
            Party::First => first_total = first_total.plus(&item.widen()),
            Party::Second => second_total = second_total.plus(&item.widen()),
        }

        first_total.spread(&second_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_to_next_index() {
        let state = State::<i32>::initial();

        let first = Party::First.advance(&state, &4);
        assert_eq!(first.index, 1);
        assert_eq!((first.first_value, first.first_count), (4, 1));
        assert_eq!((first.second_value, first.second_count), (0, 0));

        let second = Party::Second.advance(&first, &6);
        assert_eq!(second.index, 2);
        assert_eq!((second.first_value, second.first_count), (4, 1));
        assert_eq!((second.second_value, second.second_count), (6, 1));
    }

    #[test]
    fn extend_only_touches_own_spoils() {
        let (first, second) = Party::Second.extend(Spoils::of(1), Spoils::of(2), &3);

        assert_eq!(first.items(), &[1]);
        assert_eq!(second.items(), &[2, 3]);
    }

    #[test]
    fn score_counts_running_and_remaining_values() {
        let state: State<i32> = State {
            index: 1,
            first_value: 10,
            second_value: 0,
            first_count: 1,
            second_count: 0,
        };

        // first: 10 + 1 = 11, second: 0 + 2 + 5 = 7
        assert_eq!(Party::Second.score(&state, &Spoils::of(1), &Spoils::of(2), &5), 4);
        // first: 10 + 1 + 5 = 16, second: 0 + 2 = 2
        assert_eq!(Party::First.score(&state, &Spoils::of(1), &Spoils::of(2), &5), 14);
    }
}
