//! Divides a sequence of items between two parties so that both receive the
//! same number of items and the difference between their values is as small
//! as possible.
//!
//! Three solvers share one contract:
//!
//! * [`brute_force`](brute_force/index.html) tries every assignment,
//! * [`memoized`](memoized/index.html) does the same recursion but remembers
//!   subproblems for the duration of one call,
//! * [`bottom_up`](bottom_up/index.html) tabulates feasible splits one item at
//!   a time.
//!
//! When the number of items is odd no equal split exists and every solver
//! returns `SplitResult::UnequalSplitOnly`. A caller who would rather tolerate
//! one extra item on one side can solve once per item with that item left
//! out, then keep the split with the smallest spread.
//!
//! ```
//! use fair_split::{Solve, SplitResult, Strategy};
//!
//! let result = Strategy::BottomUp.solve(&[1, 2, 3, 4]);
//!
//! assert_eq!(result.spread(), Some(0i128));
//! assert!(Strategy::Memoized.solve(&[1, 2, 3]) == SplitResult::UnequalSplitOnly);
//! ```

#[macro_use] extern crate matches;
#[macro_use] extern crate log;

mod item_value;
pub use crate::item_value::{ItemValue, Total};

mod spoils;
pub use crate::spoils::Spoils;

mod split_result;
pub use crate::split_result::SplitResult;

mod party;
mod recursion;

pub mod brute_force;
pub mod memoized;
pub mod bottom_up;

mod strategy;
pub use crate::strategy::{BottomUp, BruteForce, Memoized, ParseStrategyError, Solve, Strategy};
