use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::item_value::ItemValue;
use crate::split_result::SplitResult;
use crate::{bottom_up, brute_force, memoized};

/// For types which can split items between two parties.
pub trait Solve {
    /// Splits `items` so both parties hold the same number of items with the
    /// smallest possible difference in value.
    fn solve<T: ItemValue>(&self, items: &[T]) -> SplitResult<T>;
}

/// Solves by trying every assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BruteForce;

/// Solves by recursion with a per-call cache of subproblems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Memoized;

/// Solves by tabulating feasible splits item by item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BottomUp;

impl Solve for BruteForce {
    fn solve<T: ItemValue>(&self, items: &[T]) -> SplitResult<T> {
        brute_force::solve(items)
    }
}

impl Solve for Memoized {
    fn solve<T: ItemValue>(&self, items: &[T]) -> SplitResult<T> {
        memoized::solve(items)
    }
}

impl Solve for BottomUp {
    fn solve<T: ItemValue>(&self, items: &[T]) -> SplitResult<T> {
        bottom_up::solve(items)
    }
}

/// A solver chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BruteForce,
    Memoized,
    BottomUp,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BruteForce, Strategy::Memoized, Strategy::BottomUp];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Memoized => "memoized",
            Strategy::BottomUp => "bottom-up",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Memoized
    }
}

impl Solve for Strategy {
    fn solve<T: ItemValue>(&self, items: &[T]) -> SplitResult<T> {
        match *self {
            Strategy::BruteForce => BruteForce.solve(items),
            Strategy::Memoized => Memoized.solve(items),
            Strategy::BottomUp => BottomUp.solve(items),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .cloned()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_owned()))
    }
}

/// The error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown strategy `{}`, expected one of ", self.0)?;

        for (index, strategy) in Strategy::ALL.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{}`", strategy)?;
        }

        Ok(())
    }
}

impl Error for ParseStrategyError {}
