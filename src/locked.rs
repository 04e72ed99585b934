use std::cell::UnsafeCell;
use std::ops::Deref;
use std::sync::Mutex;

/// A lazy singleton slot guarded by a mutex for the whole accessor body.
///
/// Check, construct and store all happen with the lock held, so exactly one
/// caller ever runs the initializer and the mutex's acquire/release ordering
/// publishes the value to everyone else. The cost is the blunt one this
/// variant is known for: every call, including every call after the value
/// exists, pays a lock acquisition.
///
/// ```
/// use lazy_singleton::LockedLazy;
///
/// static CELL: LockedLazy<String> = LockedLazy::new(|| "Hello, World!".to_string());
///
/// std::thread::spawn(|| {
///     assert_eq!(CELL.get(), "Hello, World!");
/// }).join().unwrap();
///
/// assert!(std::ptr::eq(CELL.get(), CELL.get()));
/// ```
pub struct LockedLazy<T> {
    init: fn() -> T,
    lock: Mutex<()>,
    slot: UnsafeCell<Option<T>>,
}

impl<T> LockedLazy<T> {
    #[inline]
    #[must_use]
    pub const fn new(init: fn() -> T) -> LockedLazy<T> {
        LockedLazy {
            init,
            lock: Mutex::new(()),
            slot: UnsafeCell::new(None),
        }
    }

    /// Returns the value, constructing it on the first call. Blocks while
    /// another caller holds the lock.
    pub fn get(&self) -> &T {
        let _guard = self.lock.lock().unwrap();
        // Slot writes happen only here, with the lock held, and only while
        // the slot is still empty. The returned reference stays valid after
        // the guard drops because the slot is never written again.
        unsafe {
            if (*self.slot.get()).is_none() {
                *self.slot.get() = Some((self.init)());
            }
            (*self.slot.get()).as_ref().unwrap()
        }
    }

    pub fn is_initialized(&self) -> bool {
        let _guard = self.lock.lock().unwrap();
        unsafe { (*self.slot.get()).is_some() }
    }
}

unsafe impl<T: Send + Sync> Sync for LockedLazy<T> {}
unsafe impl<T: Send> Send for LockedLazy<T> {}

impl<T> Deref for LockedLazy<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LockedLazy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let _guard = self.lock.lock().unwrap();
        let mut d = f.debug_tuple("LockedLazy");
        match unsafe { (*self.slot.get()).as_ref() } {
            Some(v) => d.field(v),
            None => d.field(&format_args!("<uninit>")),
        };
        d.finish()
    }
}
