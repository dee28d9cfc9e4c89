//! Observable counter command

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use console::style;

use golden_age_runtime::CounterModel;

/// Click the observable counter
#[derive(Parser, Debug)]
pub struct Counter {
    /// Number of clicks
    #[arg(long, default_value_t = 3)]
    pub clicks: u32,

    /// Print the observed values as JSON
    #[arg(long)]
    pub json: bool,
}

impl Counter {
    /// Values seen by an observer while clicking, starting with the replay.
    fn observed(&self) -> Vec<i64> {
        let mut counter = CounterModel::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = counter
            .count_mut()
            .observe(move |count| sink.borrow_mut().push(*count));

        for _ in 0..self.clicks {
            counter.increment();
        }
        counter.count_mut().unsubscribe(subscription);

        seen.take()
    }

    pub fn execute(self) -> Result<()> {
        let observed = self.observed();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&observed)?);
            return Ok(());
        }

        for count in observed {
            println!("{} {}", style("count").cyan().bold(), count);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_sees_replay_and_each_click() {
        let counter = Counter {
            clicks: 2,
            json: false,
        };
        assert_eq!(counter.observed(), vec![0, 1, 2]);
    }
}
