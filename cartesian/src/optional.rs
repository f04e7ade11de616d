//! Monadic composition over optional values.
//!
//! [`Optional`] abstracts a container holding zero or one value and gives it
//! three combinators:
//!
//! - [`transform`](Optional::transform) maps the value, keeping absence.
//! - [`bind`](Optional::bind) chains a computation that may itself produce
//!   nothing, without nesting optionals (monadic bind, `and_then`).
//! - [`otherwise`](Optional::otherwise) runs a fallback only when the value
//!   is absent (`or_else`). The fallback may return a replacement optional or
//!   `()` for side effects such as logging.
//!
//! Each has a `_ref` form that leaves the optional in place and passes the
//! value by reference.
//!
//! ```
//! use cartesian::Optional;
//!
//! let parsed = Some("42")
//!     .bind(|s| s.parse::<i32>().ok())
//!     .transform(|n| n * 2)
//!     .otherwise(|| eprintln!("nothing to double"));
//! assert_eq!(parsed, Some(84));
//! ```

/// A container holding at most one value.
pub trait Optional: Sized {
    type Value;

    /// The same kind of container holding a `U` instead.
    type Rebind<U>: Optional<Value = U>;

    fn from_option(value: Option<Self::Value>) -> Self;

    fn into_option(self) -> Option<Self::Value>;

    fn as_option(&self) -> Option<&Self::Value>;

    fn empty() -> Self {
        Self::from_option(None)
    }

    fn has_value(&self) -> bool {
        self.as_option().is_some()
    }

    /// Applies `f` to the value, if any.
    fn transform<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> U,
    {
        <Self::Rebind<U> as Optional>::from_option(self.into_option().map(f))
    }

    fn transform_ref<U, F>(&self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(&Self::Value) -> U,
    {
        <Self::Rebind<U> as Optional>::from_option(self.as_option().map(f))
    }

    /// Returns `f(value)` as is, or an empty `O` without calling `f`.
    fn bind<O, F>(self, f: F) -> O
    where
        O: Optional,
        F: FnOnce(Self::Value) -> O,
    {
        match self.into_option() {
            Some(value) => f(value),
            None => O::empty(),
        }
    }

    fn bind_ref<O, F>(&self, f: F) -> O
    where
        O: Optional,
        F: FnOnce(&Self::Value) -> O,
    {
        match self.as_option() {
            Some(value) => f(value),
            None => O::empty(),
        }
    }

    /// Returns `self` if it holds a value. Otherwise calls `f` once and
    /// returns what it produced, or an empty optional if it produced `()`.
    fn otherwise<R, F>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
        R: Fallback<Self>,
    {
        if self.has_value() {
            self
        } else {
            f().into_fallback()
        }
    }

    fn otherwise_ref<R, F>(&self, f: F) -> Self
    where
        Self: Clone,
        F: FnOnce() -> R,
        R: Fallback<Self>,
    {
        if self.has_value() {
            self.clone()
        } else {
            f().into_fallback()
        }
    }
}

/// What an [`Optional::otherwise`] callback may return.
pub trait Fallback<O> {
    fn into_fallback(self) -> O;
}

impl<O: Optional> Fallback<O> for () {
    fn into_fallback(self) -> O {
        O::empty()
    }
}

impl<T> Fallback<Option<T>> for Option<T> {
    fn into_fallback(self) -> Option<T> {
        self
    }
}

impl<T> Optional for Option<T> {
    type Value = T;
    type Rebind<U> = Option<U>;

    fn from_option(value: Option<T>) -> Self {
        value
    }

    fn into_option(self) -> Option<T> {
        self
    }

    fn as_option(&self) -> Option<&T> {
        self.as_ref()
    }
}
