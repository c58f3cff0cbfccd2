//! The identity combinator.

/// Returns the value unchanged.
///
/// The neutral function of the applicative identity law,
/// `ap(pure(identity), v) == v`.
///
/// ```
/// use kleisli::compose::{curry, identity};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(curry(identity::<&str>).call(("same",)), "same");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_unit() {
        assert_eq!(identity(()), ());
    }
}
