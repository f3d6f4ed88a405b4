//! Fail-fast step pipelines.
//!
//! A workflow composes independent fallible steps into one operation.
//! Steps run in the order they were added, on the calling thread; the
//! first failure aborts the pipeline and becomes its result, unmodified.
//! A pipeline with no steps succeeds trivially.
//!
//! Steps are explicit structs holding their own inputs. Anything shared
//! between steps lives in a context value owned by the caller and passed
//! to every step, so there is no hidden capture between them.

use tracing::debug;

use crate::error::Result;

/// A single deferred operation within a pipeline.
///
/// Implementations hold the operation's parameters; `run` is invoked
/// exactly once when the owning pipeline executes.
pub trait Step<C> {
    /// Short identifier used in step-boundary logging.
    fn name(&self) -> &'static str;

    /// Execute the step against the pipeline context.
    fn run(&self, ctx: &mut C) -> Result<()>;
}

/// An ordered sequence of steps executed as one fallible unit.
///
/// The executor owns no external resources and performs no reordering,
/// deduplication, or retry. Running consumes the pipeline: steps are
/// invoked once and discarded.
pub struct Pipeline<C> {
    steps: Vec<Box<dyn Step<C>>>,
}

impl<C> Pipeline<C> {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to run after all previously added steps.
    pub fn then(mut self, step: impl Step<C> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Number of steps queued.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error unmodified. Steps after
    /// the failing one are not invoked.
    pub fn run(self, ctx: &mut C) -> Result<()> {
        for step in self.steps {
            debug!(step = step.name(), "running pipeline step");
            step.run(ctx)?;
        }
        Ok(())
    }
}

impl<C> Default for Pipeline<C> {
    fn default() -> Self {
        Self::new()
    }
}
