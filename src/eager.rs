use std::ops::Deref;

/// A singleton slot whose value is built during static initialization.
///
/// The value is part of the `static`'s initial image, so it exists before
/// `main` runs and before any thread can call [`get`](Eager::get). That makes
/// the accessor trivially thread-safe: it only ever reads. The trade-off is
/// the eager one — construction cost is paid even if the value is never used,
/// and the initializer must be a `const` expression.
///
/// ```
/// use lazy_singleton::Eager;
///
/// static ANSWER: Eager<u32> = Eager::new(42);
///
/// std::thread::spawn(|| {
///     assert_eq!(*ANSWER.get(), 42);
/// }).join().unwrap();
///
/// // every caller observes the same address
/// assert!(std::ptr::eq(ANSWER.get(), ANSWER.get()));
/// ```
pub struct Eager<T> {
    value: T,
}

impl<T> Eager<T> {
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Eager<T> {
        Eager { value }
    }

    /// Returns a reference to the value. Never blocks, never constructs.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// ```
    /// use lazy_singleton::Eager;
    ///
    /// let cell = Eager::new("hello".to_string());
    /// assert_eq!(Eager::into_inner(cell), "hello");
    /// ```
    #[inline]
    pub fn into_inner(this: Self) -> T {
        this.value
    }
}

impl<T> Deref for Eager<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: Default> Default for Eager<T> {
    #[inline]
    fn default() -> Eager<T> {
        Eager::new(T::default())
    }
}

impl<T> From<T> for Eager<T> {
    #[inline]
    fn from(value: T) -> Eager<T> {
        Eager::new(value)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Eager<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Eager").field(&self.value).finish()
    }
}
