//! Optional values produced by conditional branches.
//!
//! [`CondValue`] carries the result of a value-producing branch operation
//! ([`then_get`](crate::Conditional::then_get),
//! [`choose`](crate::Conditional::choose), ...) through further
//! transformations.
//!
//! The container keeps a presence flag *and* a value slot, and every read
//! requires both: a container whose flag says "present" but whose slot is
//! empty behaves exactly like an absent one. The two can only disagree when
//! constructed through [`CondValue::from_parts`]; the pipeline constructors
//! always keep them in step. The collapse rule is deliberate and part of the
//! contract, not an oversight.

/// An optional value with an explicit presence flag.
///
/// Read operations (`map`, `unwrap_or`, `unwrap_or_else`, `ok_or_else`)
/// treat the value as present only when the flag is set **and** the slot
/// holds a value.
///
/// # Examples
///
/// ```rust
/// use condflow::Conditional;
///
/// let label = Conditional::when(true)
///     .then_get(|| 3)
///     .map(|n| format!("{n} items"))
///     .unwrap_or_else(|| "empty".to_owned());
/// assert_eq!(label, "3 items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondValue<T> {
    value: Option<T>,
    present: bool,
}

impl<T> CondValue<T> {
    /// Creates a present container holding `value`.
    pub const fn present(value: T) -> Self {
        Self {
            value: Some(value),
            present: true,
        }
    }

    /// Creates an absent container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::CondValue;
    ///
    /// let absent: CondValue<i32> = CondValue::absent();
    /// assert!(absent.is_absent());
    /// ```
    pub const fn absent() -> Self {
        Self {
            value: None,
            present: false,
        }
    }

    /// Creates a container from a raw slot/flag pair.
    ///
    /// The pair may disagree; reads collapse `(None, true)` to absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::CondValue;
    ///
    /// let hollow: CondValue<i32> = CondValue::from_parts(None, true);
    /// assert!(hollow.is_absent());
    /// assert_eq!(hollow.unwrap_or(7), 7);
    /// ```
    pub const fn from_parts(value: Option<T>, present: bool) -> Self {
        Self { value, present }
    }

    /// Returns whether the container reads as present.
    ///
    /// Requires both the flag and a non-empty slot.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.present && self.value.is_some()
    }

    /// Returns whether the container reads as absent.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Transforms the contained value, if it reads as present.
    ///
    /// Otherwise returns an absent container of the new type without
    /// invoking `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::CondValue;
    ///
    /// let doubled = CondValue::present(21).map(|n| n * 2);
    /// assert_eq!(doubled.into_option(), Some(42));
    ///
    /// let absent = CondValue::<i32>::absent().map(|n| n * 2);
    /// assert!(absent.is_absent());
    /// ```
    pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> CondValue<R> {
        match self.into_option() {
            Some(value) => CondValue::present(transform(value)),
            None => CondValue::absent(),
        }
    }

    /// Returns the contained value, or `fallback` if the container reads as
    /// absent.
    ///
    /// `fallback` is eagerly evaluated; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for a lazy alternative.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }

    /// Returns the contained value, or computes a fallback if the container
    /// reads as absent.
    ///
    /// The fallback closure runs only on the absent path.
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.into_option().unwrap_or_else(fallback)
    }

    /// Returns the contained value, or the supplied error if the container
    /// reads as absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when the container reads as absent; the error
    /// supplier runs only in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::Conditional;
    ///
    /// let found = Conditional::when_present(&Some("row"))
    ///     .then_get(|| "row")
    ///     .ok_or_else(|| "no such row");
    /// assert_eq!(found, Ok("row"));
    ///
    /// let missing = Conditional::when(false)
    ///     .then_get(|| "row")
    ///     .ok_or_else(|| "no such row");
    /// assert_eq!(missing, Err("no such row"));
    /// ```
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
        self.into_option().ok_or_else(error)
    }

    /// Converts into an [`Option`], collapsing by the presence rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condflow::CondValue;
    ///
    /// assert_eq!(CondValue::present(1).into_option(), Some(1));
    /// assert_eq!(CondValue::<i32>::absent().into_option(), None);
    /// assert_eq!(CondValue::from_parts(Some(1), false).into_option(), None);
    /// ```
    pub fn into_option(self) -> Option<T> {
        if self.present { self.value } else { None }
    }
}

impl<T> Default for CondValue<T> {
    /// Returns an absent container.
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<CondValue<T>> for Option<T> {
    fn from(value: CondValue<T>) -> Self {
        value.into_option()
    }
}
