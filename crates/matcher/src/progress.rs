//! Progress reporting for batch runs.
//!
//! The batch matcher calls [`ProgressObserver::on_progress`] once after each
//! source item with `(completed, total)`. Observers only watch: nothing they
//! do feeds back into matching.

/// Observer invoked after each source item of a batch.
pub trait ProgressObserver {
    fn on_progress(&mut self, completed: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Completed fraction in `[0.0, 1.0]`. An empty batch counts as complete.
pub fn fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        completed as f64 / total as f64
    }
}
