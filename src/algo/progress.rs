//! Progress reporting for whole-mesh passes.
//!
//! Passes such as [`triangulate_with_progress`](super::triangulate_with_progress)
//! call back into a [`Progress`] once per processed element.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use polyconn::algo::Progress;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&calls);
//! let progress = Progress::new(move |current, total, message| {
//!     assert!(current <= total, "{}", message);
//!     seen.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! progress.report(1, 4, "faces");
//! assert_eq!(calls.load(Ordering::Relaxed), 1);
//! ```

type Callback = Box<dyn Fn(usize, usize, &str) + Send + Sync>;

/// A progress callback that receives updates during whole-mesh passes.
///
/// The callback receives:
/// - `current`: Number of steps done
/// - `total`: Total number of steps
/// - `message`: What is being processed
pub struct Progress {
    callback: Option<Callback>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Create a reporter that discards all updates.
    pub fn none() -> Self {
        Self { callback: None }
    }

    /// Whether updates go anywhere.
    pub fn is_enabled(&self) -> bool {
        self.callback.is_some()
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        if let Some(callback) = &self.callback {
            callback(current, total, message);
        }
    }

    /// Report progress of a sub-pass that occupies step `step` of `steps`.
    ///
    /// The sub-pass fraction `sub_current / sub_total` is scaled into the
    /// slice `[step, step + 1)`, in thousandths of a step.
    pub fn report_sub(
        &self,
        sub_current: usize,
        sub_total: usize,
        step: usize,
        steps: usize,
        message: &str,
    ) {
        if sub_total == 0 || steps == 0 {
            return;
        }
        let within = sub_current.min(sub_total) * 1000 / sub_total;
        self.report(step * 1000 + within, steps * 1000, message);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
