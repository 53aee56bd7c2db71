//! Fluent conditional pipelines.
//!
//! This module provides [`Conditional`], an immutable chainable wrapper
//! around a [`MemoizedBool`]. Conditions are composed with `and`/`or`/`not`
//! without being evaluated; only a terminal operation (`value`, `then_run`,
//! `then_get`, `choose`, ...) forces the underlying computation, at most
//! once per condition thanks to memoization.
//!
//! # Examples
//!
//! ```rust
//! use condflow::Conditional;
//!
//! let discount = Conditional::when_lazy(|| loyalty_points() > 100)
//!     .and(true)
//!     .then_get(|| 15u32)
//!     .unwrap_or(0);
//!
//! assert_eq!(discount, 15);
//! # fn loyalty_points() -> u32 { 250 }
//! ```

use std::sync::Arc;

use crate::memo::MemoizedBool;
use crate::value::CondValue;

/// An immutable, lazily evaluated conditional expression.
///
/// Every composition method builds a **new** `Conditional` whose condition
/// closes over the parent's memoized condition; the receiver is never
/// mutated, so a base pipeline can be composed from any number of times and
/// each derived pipeline evaluates independently.
///
/// Cloning is cheap: clones share the same memoized condition, so a clone
/// of an evaluated pipeline reads the cached value.
///
/// # Short-circuit semantics
///
/// `and*` never evaluates its right operand when the left side is `false`;
/// `or*` never evaluates it when the left side is `true`.
///
/// # Examples
///
/// ```rust
/// use condflow::Conditional;
///
/// let base = Conditional::when_lazy(|| true);
///
/// assert!(base.or(false).value());
/// assert!(!base.and(false).value());
/// ```
#[derive(Clone, Debug)]
pub struct Conditional {
    condition: Arc<MemoizedBool>,
}

impl Conditional {
    fn from_memo(memo: MemoizedBool) -> Self {
        Self {
            condition: Arc::new(memo),
        }
    }

    /// Creates a pipeline from an eager boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// assert!(Conditional::when(true).value());
    /// ```
    pub fn when(condition: bool) -> Self {
        Self::from_memo(MemoizedBool::from_value(condition))
    }

    /// Creates a pipeline from a deferred boolean computation.
    ///
    /// The computation does not run until a terminal operation forces it,
    /// and runs at most once successfully per pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let pipeline = Conditional::when_lazy(|| {
    ///     println!("expensive check");
    ///     true
    /// });
    /// // Nothing printed yet
    ///
    /// assert!(pipeline.value()); // "expensive check" printed here
    /// ```
    pub fn when_lazy<F>(condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self::from_memo(MemoizedBool::new(condition))
    }

    /// Creates a pipeline from the presence of an optional value.
    ///
    /// `Some` maps to `true`, `None` to `false`. Presence is read eagerly;
    /// the option itself is not captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// assert!(Conditional::when_present(&Some(42)).value());
    /// assert!(!Conditional::when_present(&None::<i32>).value());
    /// ```
    pub fn when_present<T>(option: &Option<T>) -> Self {
        Self::when(option.is_some())
    }

    /// Logical conjunction with an eager boolean.
    ///
    /// Lazy like every composition: the receiver is not evaluated here, only
    /// when a terminal operation forces the derived pipeline.
    pub fn and(&self, other: bool) -> Self {
        let parent = Arc::clone(&self.condition);
        Self::from_memo(MemoizedBool::new(move || parent.evaluate() && other))
    }

    /// Logical conjunction with a deferred boolean computation.
    ///
    /// `other` is never invoked when the receiver evaluates to `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let result = Conditional::when_lazy(|| false)
    ///     .and_lazy(|| unreachable!("short-circuited"))
    ///     .value();
    /// assert!(!result);
    /// ```
    pub fn and_lazy<F>(&self, other: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let parent = Arc::clone(&self.condition);
        Self::from_memo(MemoizedBool::new(move || parent.evaluate() && other()))
    }

    /// Logical conjunction with another pipeline.
    ///
    /// Neither pipeline is evaluated here; both stay memoized, so a shared
    /// operand evaluates at most once across every expression using it.
    pub fn and_cond(&self, other: &Self) -> Self {
        let left = Arc::clone(&self.condition);
        let right = Arc::clone(&other.condition);
        Self::from_memo(MemoizedBool::new(move || {
            left.evaluate() && right.evaluate()
        }))
    }

    /// Logical disjunction with an eager boolean.
    pub fn or(&self, other: bool) -> Self {
        let parent = Arc::clone(&self.condition);
        Self::from_memo(MemoizedBool::new(move || parent.evaluate() || other))
    }

    /// Logical disjunction with a deferred boolean computation.
    ///
    /// `other` is never invoked when the receiver evaluates to `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let result = Conditional::when_lazy(|| true)
    ///     .or_lazy(|| unreachable!("short-circuited"))
    ///     .value();
    /// assert!(result);
    /// ```
    pub fn or_lazy<F>(&self, other: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let parent = Arc::clone(&self.condition);
        Self::from_memo(MemoizedBool::new(move || parent.evaluate() || other()))
    }

    /// Logical disjunction with another pipeline.
    pub fn or_cond(&self, other: &Self) -> Self {
        let left = Arc::clone(&self.condition);
        let right = Arc::clone(&other.condition);
        Self::from_memo(MemoizedBool::new(move || {
            left.evaluate() || right.evaluate()
        }))
    }

    /// Logical negation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// assert!(Conditional::when(false).not().value());
    /// ```
    #[must_use]
    pub fn not(&self) -> Self {
        let parent = Arc::clone(&self.condition);
        Self::from_memo(MemoizedBool::new(move || !parent.evaluate()))
    }

    /// Identity, for pipeline readability.
    ///
    /// Returns a pipeline sharing the receiver's memoized condition.
    #[must_use]
    pub fn is_true(&self) -> Self {
        self.clone()
    }

    /// Equivalent to [`not`](Self::not).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// assert!(Conditional::when_lazy(|| false).is_false().value());
    /// ```
    #[must_use]
    pub fn is_false(&self) -> Self {
        self.not()
    }

    /// Runs `action` iff the condition evaluates to `true`.
    ///
    /// Forces evaluation. Returns the receiver for continued chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let mut log = Vec::new();
    /// Conditional::when(true)
    ///     .then_run(|| log.push("granted"))
    ///     .else_run(|| unreachable!("condition is true"));
    /// assert_eq!(log, ["granted"]);
    /// ```
    pub fn then_run(&self, action: impl FnOnce()) -> &Self {
        if self.value() {
            action();
        }
        self
    }

    /// Runs `action` iff the condition evaluates to `false`.
    ///
    /// Forces evaluation. Returns the receiver for continued chaining.
    pub fn else_run(&self, action: impl FnOnce()) -> &Self {
        if !self.value() {
            action();
        }
        self
    }

    /// Produces a value iff the condition evaluates to `true`.
    ///
    /// If the condition is `false` the supplier is never invoked and an
    /// absent [`CondValue`] is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let greeting = Conditional::when_lazy(|| true)
    ///     .then_get(|| "hello".to_owned())
    ///     .map(|s| s.to_uppercase())
    ///     .unwrap_or_else(|| "nobody home".to_owned());
    /// assert_eq!(greeting, "HELLO");
    /// ```
    pub fn then_get<T>(&self, supplier: impl FnOnce() -> T) -> CondValue<T> {
        if self.value() {
            CondValue::present(supplier())
        } else {
            CondValue::absent()
        }
    }

    /// Produces a value iff the condition evaluates to `false`.
    ///
    /// The mirror of [`then_get`](Self::then_get): the supplier runs only on
    /// the `false` branch.
    pub fn else_get<T>(&self, supplier: impl FnOnce() -> T) -> CondValue<T> {
        if self.value() {
            CondValue::absent()
        } else {
            CondValue::present(supplier())
        }
    }

    /// Produces a value from exactly one of the two suppliers.
    ///
    /// `if_true` runs when the condition evaluates to `true`, `if_false`
    /// otherwise; the unselected supplier is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let port = Conditional::when_lazy(|| std::env::var("PORT").is_err())
    ///     .choose(|| 8080, || 9090)
    ///     .unwrap_or(9090);
    /// assert!(port == 8080 || port == 9090);
    /// ```
    pub fn choose<T>(
        &self,
        if_true: impl FnOnce() -> T,
        if_false: impl FnOnce() -> T,
    ) -> CondValue<T> {
        if self.value() {
            CondValue::present(if_true())
        } else {
            CondValue::present(if_false())
        }
    }

    /// Forces evaluation and returns the condition's value.
    ///
    /// Memoized: repeated calls (and calls through derived pipelines) run
    /// the underlying computation at most once successfully.
    ///
    /// # Panics
    ///
    /// Propagates any panic raised by the underlying computation; see
    /// [`MemoizedBool::evaluate`].
    pub fn value(&self) -> bool {
        self.condition.evaluate()
    }

    /// Alias for [`then_get`](Self::then_get).
    pub fn if_true_supply<T>(&self, supplier: impl FnOnce() -> T) -> CondValue<T> {
        self.then_get(supplier)
    }

    /// Alias for [`else_get`](Self::else_get).
    pub fn if_false_supply<T>(&self, supplier: impl FnOnce() -> T) -> CondValue<T> {
        self.else_get(supplier)
    }

    /// Alias for [`choose`](Self::choose).
    pub fn choose_and_supply<T>(
        &self,
        if_true: impl FnOnce() -> T,
        if_false: impl FnOnce() -> T,
    ) -> CondValue<T> {
        self.choose(if_true, if_false)
    }

    /// Alias for [`value`](Self::value).
    pub fn boolean_value(&self) -> bool {
        self.value()
    }
}

impl From<bool> for Conditional {
    /// Equivalent to [`Conditional::when`].
    fn from(condition: bool) -> Self {
        Self::when(condition)
    }
}

static_assertions::assert_impl_all!(Conditional: Send, Sync, Clone);
