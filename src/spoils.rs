use crate::item_value::{ItemValue, Total};

/// The items taken by one party, along with their combined value.
///
/// The value is always the sum of the items; the only way to grow `Spoils` is
/// [`with`](#method.with), which produces new spoils rather than mutating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spoils<T: ItemValue> {
    items: Vec<T>,
    value: T::Sum,
}

impl<T: ItemValue> Spoils<T> {
    /// Creates empty spoils.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            value: <T::Sum as Total>::zero(),
        }
    }

    /// Creates spoils holding just `item`.
    pub fn of(item: T) -> Self {
        Self::new().with(item)
    }

    /// Returns new spoils which are `self` with `item` appended.
    pub fn with(&self, item: T) -> Self {
        let value = self.value.plus(&item.widen());

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);

        Self { items, value }
    }
}

impl<T: ItemValue> Spoils<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn value(&self) -> &T::Sum {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_parts(self) -> (Vec<T>, T::Sum) {
        (self.items, self.value)
    }
}

impl<T: ItemValue> Default for Spoils<T> {
    fn default() -> Self {
        Self::new()
    }
}
