use std::fmt::Debug;
use std::hash::Hash;

/// For types which hold a running total of item values, and the spread
/// between two such totals.
pub trait Total: Clone + Ord + Hash + Debug {
    /// The total of nothing, i.e. the value of empty spoils.
    fn zero() -> Self;

    /// Returns a new total which is `self` plus `other`.
    fn plus(&self, other: &Self) -> Self;

    /// Returns `self` minus a total no greater than `self`.
    fn minus(&self, smaller: &Self) -> Self;

    /// Returns the absolute difference between `self` and `other`.
    fn spread(&self, other: &Self) -> Self {
        if self >= other {
            self.minus(other)
        } else {
            other.minus(self)
        }
    }
}

/// For types which can be used as the value of an item being split.
///
/// Values are added up in `Sum`, which is wide enough that no slice of items
/// short of `2^63` long can overflow it, whatever mix of extremes it holds.
pub trait ItemValue: Clone + Ord + Hash + Debug {
    type Sum: Total;

    /// Converts `self` into the type totals are kept in.
    fn widen(&self) -> Self::Sum;
}

impl Total for i128 {
    fn zero() -> Self {
        0
    }

    fn plus(&self, other: &Self) -> Self {
        *self + *other
    }

    fn minus(&self, smaller: &Self) -> Self {
        *self - *smaller
    }
}

macro_rules! item_value_impl {
    ($type:ty, $sum:ty) => {
        impl ItemValue for $type {
            type Sum = $sum;

            fn widen(&self) -> Self::Sum {
                <$sum>::from(*self)
            }
        }
    }
}

item_value_impl!(u8, i128);
item_value_impl!(i8, i128);

item_value_impl!(u16, i128);
item_value_impl!(i16, i128);

item_value_impl!(u32, i128);
item_value_impl!(i32, i128);

item_value_impl!(u64, i128);
item_value_impl!(i64, i128);

impl ItemValue for usize {
    type Sum = i128;

    fn widen(&self) -> Self::Sum {
        *self as i128
    }
}

impl ItemValue for isize {
    type Sum = i128;

    fn widen(&self) -> Self::Sum {
        *self as i128
    }
}

#[cfg(test)]
mod tests {
    use crate::{ItemValue, Total};

    #[test]
    fn spread_is_symmetric() {
        assert_eq!(3i128.spread(&10), 7);
        assert_eq!(10i128.spread(&3), 7);
    }

    #[test]
    fn widen_keeps_sign() {
        assert_eq!((-4i8).widen(), -4);
        assert_eq!(200u8.widen(), 200);
        assert_eq!(u64::max_value().widen(), 18_446_744_073_709_551_615);
    }

    #[test]
    fn spread_between_extremes_fits() {
        let spread = i64::max_value().widen().spread(&i64::min_value().widen());

        assert_eq!(spread, i128::from(u64::max_value()));
    }

    #[test]
    fn sums_past_item_range() {
        let total = 100i8.widen().plus(&100i8.widen());

        assert_eq!(total, 200);
    }
}

#[cfg(feature = "bigint")]
mod bigint_impl {
    use num_bigint::{BigInt, BigUint};
    use num_traits::Zero;
    use crate::{ItemValue, Total};

    macro_rules! total_big_impl {
        ($type:ty) => {
            impl Total for $type {
                fn zero() -> Self {
                    Zero::zero()
                }

                fn plus(&self, other: &Self) -> Self {
                    self + other
                }

                fn minus(&self, smaller: &Self) -> Self {
                    self - smaller
                }
            }

            impl ItemValue for $type {
                type Sum = $type;

                fn widen(&self) -> Self::Sum {
                    self.clone()
                }
            }
        }
    }

    total_big_impl!(BigInt);
    total_big_impl!(BigUint);

}
