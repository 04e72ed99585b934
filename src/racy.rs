use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

/// The classic broken lazy singleton: check, construct, store, with nothing
/// arbitrating between competing first callers.
///
/// Two threads that both observe an empty slot will both run the initializer
/// and hand their callers two distinct values, violating the single-identity
/// guarantee every other cell in this crate upholds. This cell exists to
/// demonstrate that failure mode; do not fix it and do not use it.
///
/// The slot is an [`AtomicPtr`] so the check-then-act race stays observable
/// without being undefined behavior: publication uses release/acquire, but
/// there is no compare-and-swap, so late stores simply overwrite earlier
/// ones. Values constructed by losing threads are leaked.
///
/// Single-threaded use is fine:
///
/// ```
/// use lazy_singleton::RacyLazy;
///
/// static CELL: RacyLazy<u32> = RacyLazy::new(|| 92);
///
/// assert!(!CELL.is_initialized());
/// let first = CELL.get();
/// assert_eq!(*first, 92);
/// assert!(std::ptr::eq(first, CELL.get()));
/// ```
pub struct RacyLazy<T> {
    init: fn() -> T,
    ptr: AtomicPtr<T>,
    _marker: PhantomData<T>,
}

impl<T> RacyLazy<T> {
    #[inline]
    #[must_use]
    pub const fn new(init: fn() -> T) -> RacyLazy<T> {
        RacyLazy {
            init,
            ptr: AtomicPtr::new(ptr::null_mut()),
            _marker: PhantomData,
        }
    }

    /// Returns the value, constructing it if this caller observes an empty
    /// slot. Under concurrent first access, more than one caller may observe
    /// the slot empty and each constructs its own value.
    #[inline]
    pub fn get(&self) -> &T {
        let p = self.ptr.load(Ordering::Acquire);
        if !p.is_null() {
            return unsafe { &*p };
        }
        self.construct()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.ptr.load(Ordering::Acquire).is_null()
    }

    #[cold]
    fn construct(&self) -> &T {
        let p = Box::into_raw(Box::new((self.init)()));
        // No compare-and-swap: last store wins, and this is the bug. A caller
        // that lost the race still returns its own construction.
        self.ptr.store(p, Ordering::Release);
        unsafe { &*p }
    }
}

// The struct owns whatever value currently sits in the slot.
unsafe impl<T: Send + Sync> Sync for RacyLazy<T> {}
unsafe impl<T: Send> Send for RacyLazy<T> {}

impl<T> Deref for RacyLazy<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> Drop for RacyLazy<T> {
    fn drop(&mut self) {
        let p = *self.ptr.get_mut();
        if !p.is_null() {
            // Frees the winning store only; losers were leaked at store time.
            drop(unsafe { Box::from_raw(p) });
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for RacyLazy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_tuple("RacyLazy");
        let p = self.ptr.load(Ordering::Acquire);
        if p.is_null() {
            d.field(&format_args!("<uninit>"));
        } else {
            d.field(unsafe { &*p });
        }
        d.finish()
    }
}
