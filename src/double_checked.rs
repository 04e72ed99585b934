use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Mutex;

/// A lazy singleton slot using double-checked locking.
///
/// The fast path is a single atomic load with no lock. Only callers that
/// observe an empty slot take the mutex, and they check again under it,
/// because another caller may have finished construction between the first
/// check and lock acquisition. The winner publishes with a `Release` store;
/// the lock-free `Acquire` load on the fast path pairs with it, so a thread
/// that sees a non-null pointer also sees every write the constructor made.
/// Without that pairing a reader could observe a partially constructed value,
/// which is the classic hazard this shape of code exists to rule out.
///
/// ```
/// use lazy_singleton::DoubleCheckedLazy;
///
/// static CELL: DoubleCheckedLazy<Vec<u32>> = DoubleCheckedLazy::new(|| vec![1, 2, 3]);
///
/// assert!(!CELL.is_initialized());
/// std::thread::spawn(|| {
///     assert_eq!(CELL.get().len(), 3);
/// }).join().unwrap();
///
/// assert!(CELL.is_initialized());
/// assert!(std::ptr::eq(CELL.get(), CELL.get()));
/// ```
pub struct DoubleCheckedLazy<T> {
    init: fn() -> T,
    ptr: AtomicPtr<T>,
    lock: Mutex<()>,
    _marker: PhantomData<T>,
}

impl<T> DoubleCheckedLazy<T> {
    #[inline]
    #[must_use]
    pub const fn new(init: fn() -> T) -> DoubleCheckedLazy<T> {
        DoubleCheckedLazy {
            init,
            ptr: AtomicPtr::new(ptr::null_mut()),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Returns the value, constructing it on first access. Lock-free once
    /// the value exists.
    #[inline]
    pub fn get(&self) -> &T {
        let p = self.ptr.load(Ordering::Acquire);
        if !p.is_null() {
            return unsafe { &*p };
        }
        self.initialize()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.ptr.load(Ordering::Acquire).is_null()
    }

    #[cold]
    fn initialize(&self) -> &T {
        let _guard = self.lock.lock().unwrap();
        // Second check: construction may have completed while this caller
        // was waiting for the lock.
        let p = self.ptr.load(Ordering::Acquire);
        if !p.is_null() {
            return unsafe { &*p };
        }
        let p = Box::into_raw(Box::new((self.init)()));
        self.ptr.store(p, Ordering::Release);
        unsafe { &*p }
    }
}

unsafe impl<T: Send + Sync> Sync for DoubleCheckedLazy<T> {}
unsafe impl<T: Send> Send for DoubleCheckedLazy<T> {}

impl<T> Drop for DoubleCheckedLazy<T> {
    fn drop(&mut self) {
        let p = *self.ptr.get_mut();
        if !p.is_null() {
            drop(unsafe { Box::from_raw(p) });
        }
    }
}

impl<T> Deref for DoubleCheckedLazy<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DoubleCheckedLazy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_tuple("DoubleCheckedLazy");
        let p = self.ptr.load(Ordering::Acquire);
        if p.is_null() {
            d.field(&format_args!("<uninit>"));
        } else {
            d.field(unsafe { &*p });
        }
        d.finish()
    }
}
