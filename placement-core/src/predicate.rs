use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe boolean test over values of `T`.
///
/// Predicates are layered with [`Predicate::and`] the same way the ranking
/// filters are built: an axis restriction and-ed with a caller supplied filter.
pub struct Predicate<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized + 'static> Predicate<T> {
    pub fn new(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Accepts every value.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Rejects every value.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    pub fn and(self, other: Predicate<T>) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    pub fn or(self, other: Predicate<T>) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }
}

impl<T: ?Sized + 'static> Default for Predicate<T> {
    fn default() -> Self {
        Self::always()
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::Predicate;

    #[test]
    fn composition() {
        let even = Predicate::new(|value: &i32| value % 2 == 0);
        let positive = Predicate::new(|value: &i32| *value > 0);

        let both = even.clone().and(positive.clone());
        assert!(both.test(&4));
        assert!(!both.test(&-4));
        assert!(!both.test(&3));

        let either = even.clone().or(positive);
        assert!(either.test(&-4));
        assert!(either.test(&3));
        assert!(!either.test(&-3));

        let odd = even.negate();
        assert!(odd.test(&3));
        assert!(!odd.test(&2));
    }

    #[test]
    fn constants() {
        assert!(Predicate::<str>::always().test("anything"));
        assert!(!Predicate::<str>::never().test("anything"));
        assert!(Predicate::<u8>::default().test(&0));
    }
}
