use crate::item_value::{ItemValue, Total};
use crate::spoils::Spoils;

/// The outcome of dividing items between two parties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SplitResult<T: ItemValue> {
    /// No assignment gives both parties the same number of items.
    UnequalSplitOnly,

    /// Both parties hold the same number of items.
    EqualSplit(Spoils<T>, Spoils<T>),
}

impl<T: ItemValue> SplitResult<T> {
    /// An equal split where neither party holds anything.
    pub fn empty() -> Self {
        SplitResult::EqualSplit(Spoils::new(), Spoils::new())
    }

    /// The absolute difference between the two parties' values, if the split
    /// is equal.
    pub fn spread(&self) -> Option<T::Sum> {
        self.parties().map(|(first, second)| first.value().spread(second.value()))
    }

    pub fn is_equal_split(&self) -> bool {
        matches!(*self, SplitResult::EqualSplit(..))
    }

    pub fn parties(&self) -> Option<(&Spoils<T>, &Spoils<T>)> {
        match *self {
            SplitResult::UnequalSplitOnly => None,
            SplitResult::EqualSplit(ref first, ref second) => Some((first, second)),
        }
    }

    /// Both parties' spoils in order, or nothing for `UnequalSplitOnly`.
    pub fn to_vec(&self) -> Vec<&Spoils<T>> {
        self.parties().map_or_else(Vec::new, |(first, second)| vec![first, second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_zero_spread() {
        assert_eq!(SplitResult::<i32>::empty().spread(), Some(0));
    }

    #[test]
    fn unequal_has_no_spread_or_parties() {
        let result = SplitResult::<i32>::UnequalSplitOnly;

        assert!(!result.is_equal_split());
        assert_matches!(result.parties(), None);
        assert_eq!(result.spread(), None);
        assert!(result.to_vec().is_empty());
    }

    #[test]
    fn spread_ignores_party_order() {
        let result = SplitResult::EqualSplit(Spoils::of(2), Spoils::of(9));

        assert_eq!(result.spread(), Some(7i128));
    }

    #[test]
    fn to_vec_keeps_party_order() {
        let result = SplitResult::EqualSplit(Spoils::of(2), Spoils::of(9));

        assert_eq!(result.to_vec(), vec![&Spoils::of(2), &Spoils::of(9)]);
    }
}
