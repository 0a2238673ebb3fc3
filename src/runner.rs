//! Context objects that delegate sorting to a bound strategy.

use crate::error::{Result, SortError};
use crate::strategy::SortStrategy;
use std::fmt;
use tracing::{trace, warn};

// ============================================================================
// Runner: strategy chosen at runtime
// ============================================================================

/// Holds at most one strategy and forwards every sort request to it.
#[derive(Default)]
pub struct Runner {
    strategy: Option<Box<dyn SortStrategy>>,
}

impl Runner {
    /// Creates a runner with no strategy bound.
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: Box<dyn SortStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replaces the bound strategy. The previous one, if any, is dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        trace!(strategy = strategy.name(), "binding strategy");
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|s| s.name())
    }

    /// Sorts `data` with the bound strategy.
    ///
    /// # Panics
    ///
    /// Panics if no strategy is bound. Use [`Runner::try_sort`] to get an error instead.
    pub fn sort(&self, data: &mut [i32]) {
        match self.strategy.as_deref() {
            Some(strategy) => strategy.sort(data),
            None => panic!("Runner::sort called with no strategy bound"),
        }
    }

    pub fn try_sort(&self, data: &mut [i32]) -> Result<()> {
        let strategy = self.strategy.as_deref().ok_or_else(|| {
            warn!("sort requested on a runner with no strategy");
            SortError::StrategyUnset
        })?;
        strategy.sort(data);
        Ok(())
    }
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}

// ============================================================================
// CountingRunner: Runner plus a call counter
// ============================================================================

/// Wraps a [`Runner`] and counts the sorts that completed.
#[derive(Debug, Default)]
pub struct CountingRunner {
    inner: Runner,
    count: u64,
}

impl CountingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Box<dyn SortStrategy>) -> Self {
        Self {
            inner: Runner::with_strategy(strategy),
            count: 0,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.inner.set_strategy(strategy);
    }

    /// # Panics
    ///
    /// Panics if no strategy is bound; the counter is left unchanged.
    pub fn sort(&mut self, data: &mut [i32]) {
        self.inner.sort(data);
        self.count += 1;
    }

    pub fn try_sort(&mut self, data: &mut [i32]) -> Result<()> {
        self.inner.try_sort(data)?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn runner(&self) -> &Runner {
        &self.inner
    }

    pub fn into_inner(self) -> Runner {
        self.inner
    }
}

impl From<Runner> for CountingRunner {
    fn from(inner: Runner) -> Self {
        Self { inner, count: 0 }
    }
}

// ============================================================================
// StaticRunner: strategy fixed at compile time
// ============================================================================

/// Always-bound runner using static dispatch; no heap allocation, no unset state.
#[derive(Debug, Clone, Default)]
pub struct StaticRunner<S> {
    strategy: S,
}

impl<S: SortStrategy> StaticRunner<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn sort(&self, data: &mut [i32]) {
        self.strategy.sort(data);
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}
