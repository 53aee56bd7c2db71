//! Memoized lazy boolean conditions.
//!
//! This module provides [`MemoizedBool`], a boolean-producing computation
//! that runs at most once successfully. The result is computed on first
//! demand and cached for all subsequent reads, which are lock-free.
//!
//! Unlike a poisoning lazy cell, a computation that panics leaves the cell
//! unevaluated: the panic propagates to the caller and the next call to
//! [`MemoizedBool::evaluate`] runs the computation again. A flaky
//! computation may therefore run more than once in total, but never more
//! than once *successfully*.
//!
//! # Examples
//!
//! ```rust
//! use condflow::memo::MemoizedBool;
//!
//! let memo = MemoizedBool::new(|| {
//!     println!("Checking...");
//!     true
//! });
//! // Nothing printed yet - evaluation is deferred
//!
//! assert!(memo.evaluate()); // "Checking..." printed here
//! assert!(memo.evaluate()); // cached, nothing printed
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// A lazily evaluated, memoized boolean condition.
///
/// Evaluation follows a double-checked discipline: the `done` flag is read
/// without locking on the fast path; the mutex is taken only by threads
/// racing on the first evaluation, and the flag is re-checked inside the
/// critical section so the computation runs at most once successfully.
///
/// # Thread Safety
///
/// `MemoizedBool` is `Send + Sync`. Any number of threads may call
/// [`evaluate`](Self::evaluate) concurrently; exactly one successful run of
/// the computation is ever visible as the cached value, and every thread
/// observes that same value.
///
/// # Examples
///
/// ```rust
/// use condflow::memo::MemoizedBool;
/// use std::sync::Arc;
/// use std::thread;
///
/// let memo = Arc::new(MemoizedBool::new(|| 2 + 2 == 4));
///
/// let handles: Vec<_> = (0..8)
///     .map(|_| {
///         let memo = Arc::clone(&memo);
///         thread::spawn(move || memo.evaluate())
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap());
/// }
/// ```
pub struct MemoizedBool {
    done: AtomicBool,
    cached: AtomicBool,
    section: Mutex<()>,
    condition: Box<dyn Fn() -> bool + Send + Sync>,
}

impl MemoizedBool {
    /// Creates a memoized condition from a deferred boolean computation.
    ///
    /// The computation does not run until the first call to
    /// [`evaluate`](Self::evaluate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::memo::MemoizedBool;
    ///
    /// let memo = MemoizedBool::new(|| "config".contains("fig"));
    /// assert!(!memo.is_evaluated());
    /// assert!(memo.evaluate());
    /// ```
    pub fn new<F>(condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            done: AtomicBool::new(false),
            cached: AtomicBool::new(false),
            section: Mutex::new(()),
            condition: Box::new(condition),
        }
    }

    /// Creates a memoized condition that is already evaluated.
    ///
    /// Useful when an eager boolean must flow through an API that expects a
    /// deferred condition: the fast path serves the value immediately and no
    /// computation ever runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::memo::MemoizedBool;
    ///
    /// let memo = MemoizedBool::from_value(true);
    /// assert!(memo.is_evaluated());
    /// assert!(memo.evaluate());
    /// ```
    pub fn from_value(value: bool) -> Self {
        Self {
            done: AtomicBool::new(true),
            cached: AtomicBool::new(value),
            section: Mutex::new(()),
            condition: Box::new(move || value),
        }
    }

    /// Evaluates the condition, running the computation at most once.
    ///
    /// Returns the cached result if a previous call already completed.
    /// Otherwise runs the computation, caches the result, and returns it.
    /// Concurrent first-time callers serialize on an internal mutex; the
    /// flag is re-checked after acquiring it, so losers of the race read the
    /// winner's result instead of recomputing.
    ///
    /// # Panics
    ///
    /// Propagates any panic raised by the computation itself. The result is
    /// not cached in that case: the completion flag stays unset and the next
    /// call runs the computation again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::memo::MemoizedBool;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// static CALLS: AtomicUsize = AtomicUsize::new(0);
    ///
    /// let memo = MemoizedBool::new(|| {
    ///     CALLS.fetch_add(1, Ordering::SeqCst);
    ///     true
    /// });
    ///
    /// assert!(memo.evaluate());
    /// assert!(memo.evaluate());
    /// assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    /// ```
    pub fn evaluate(&self) -> bool {
        if self.done.load(Ordering::Acquire) {
            return self.cached.load(Ordering::Relaxed);
        }

        let _section = self.section.lock();

        // Re-check under the lock: another thread may have completed the
        // evaluation while this one was waiting.
        if self.done.load(Ordering::Acquire) {
            return self.cached.load(Ordering::Relaxed);
        }

        // A panic here unwinds through the guard, releasing the mutex with
        // the flag still unset, so the next caller retries from scratch.
        // parking_lot mutexes do not poison.
        let result = (self.condition)();

        self.cached.store(result, Ordering::Relaxed);
        // Release publishes the cached value to fast-path Acquire readers.
        self.done.store(true, Ordering::Release);

        result
    }

    /// Returns whether the condition has been evaluated.
    ///
    /// Does not trigger evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::memo::MemoizedBool;
    ///
    /// let memo = MemoizedBool::new(|| false);
    /// assert!(!memo.is_evaluated());
    ///
    /// let _ = memo.evaluate();
    /// assert!(memo.is_evaluated());
    /// ```
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

impl fmt::Debug for MemoizedBool {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.done.load(Ordering::Acquire) {
            formatter
                .debug_tuple("MemoizedBool")
                .field(&self.cached.load(Ordering::Relaxed))
                .finish()
        } else {
            formatter
                .debug_tuple("MemoizedBool")
                .field(&"<unevaluated>")
                .finish()
        }
    }
}

static_assertions::assert_impl_all!(MemoizedBool: Send, Sync);
