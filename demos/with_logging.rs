extern crate env_logger;

#[macro_use]
extern crate log;

extern crate fair_split;

use fair_split::{Solve, SplitResult, Strategy};
use std::env;

/// Splits an odd number of items by leaving each one out in turn and keeping
/// the leftover split with the smallest spread.
fn split_leaving_one_out(strategy: Strategy, items: &[i64]) -> Option<(i64, SplitResult<i64>)> {
    (0..items.len())
        .filter_map(|left_out| {
            let rest: Vec<_> = items.iter()
                .enumerate()
                .filter(|&(index, _)| index != left_out)
                .map(|(_, item)| *item)
                .collect();

            let result = strategy.solve(&rest);
            info!("leaving out {}: {:?}", items[left_out], result.spread());

            if result.is_equal_split() {
                Some((items[left_out], result))
            } else {
                None
            }
        })
        .min_by_key(|(_, result)| result.spread())
}

pub fn main() {
    env_logger::init();

    let strategy = match env::args().nth(1).map(|name| name.parse::<Strategy>()) {
        Some(Ok(strategy)) => strategy,
        Some(Err(error)) => {
            error!("{}", error);
            return;
        }
        None => Strategy::default(),
    };

    info!("using the {} strategy", strategy);

    let even = [12, 5, 8, 1, 9, 4, 3, 11];
    let result = strategy.solve(&even);

    info!("{:?} splits as {:?} with spread {:?}", even, result, result.spread());

    let odd = [2, 30, 4, 6, 1, 50, 3];
    match strategy.solve(&odd) {
        SplitResult::UnequalSplitOnly => {
            warn!("{:?} has no equal split, leaving one item out instead", odd);

            if let Some((left_out, result)) = split_leaving_one_out(strategy, &odd) {
                info!("best split leaves out {}: {:?} with spread {:?}",
                      left_out, result, result.spread());
            }
        }
        result => info!("{:?} splits as {:?}", odd, result),
    }
}
