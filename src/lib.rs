//! # Strategy Pattern: interchangeable sorting algorithms
//!
//! A [`Runner`] holds one replaceable [`SortStrategy`] and forwards sort requests to it.
//!
//! - [`BubbleSort`] and [`QuickSort`] are the built-in strategies
//! - [`CountingRunner`] wraps a runner and counts completed sorts
//! - [`StaticRunner`] binds a strategy at compile time
//! - [`StrategyKind`] picks a strategy from text (CLI flag, TOML config)
//!
//! ```
//! use sort_strategy::{BubbleSort, QuickSort, Runner};
//!
//! let mut runner = Runner::with_strategy(Box::new(BubbleSort));
//! let mut data = vec![5, 1, 4, 2, 8];
//! runner.sort(&mut data);
//! assert_eq!(data, vec![1, 2, 4, 5, 8]);
//!
//! runner.set_strategy(Box::new(QuickSort));
//! let mut data = vec![3, 3, -1];
//! runner.sort(&mut data);
//! assert_eq!(data, vec![-1, 3, 3]);
//! ```
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin sort_demo -- --strategy all --values "5,1,4,2,8"
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod runner;
pub mod strategy;

pub use config::SortConfig;
pub use error::{Result, SortError};
pub use runner::{CountingRunner, Runner, StaticRunner};
pub use strategy::{BubbleSort, QuickSort, SortStrategy, StrategyKind};
