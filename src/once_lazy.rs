use std::cell::UnsafeCell;
use std::ops::Deref;
use std::panic::{RefUnwindSafe, UnwindSafe};
use std::sync::Once;

/// A lazy singleton slot built on [`std::sync::Once`], the platform's
/// one-time initialization primitive.
///
/// This is the Rust counterpart of the deferred-holder idiom: instead of a
/// nested holder class whose load triggers construction, the slot leans on a
/// primitive that guarantees the guarded block runs exactly once, with
/// happens-before ordering from the constructing thread to every caller that
/// passes `call_once`. No hand-written double check, no per-call lock after
/// completion — and none of the memory-ordering mistakes hand-rolled
/// versions invite.
///
/// ```
/// use lazy_singleton::OnceLazy;
///
/// static CELL: OnceLazy<String> = OnceLazy::new(|| "Hello, World!".to_string());
///
/// assert!(!CELL.is_initialized());
///
/// std::thread::spawn(|| {
///     assert_eq!(CELL.get(), "Hello, World!");
/// }).join().unwrap();
///
/// assert!(CELL.is_initialized());
/// assert!(std::ptr::eq(CELL.get(), CELL.get()));
/// ```
pub struct OnceLazy<T> {
    init: fn() -> T,
    once: Once,
    slot: UnsafeCell<Option<T>>,
}

impl<T> OnceLazy<T> {
    #[inline]
    #[must_use]
    pub const fn new(init: fn() -> T) -> OnceLazy<T> {
        OnceLazy {
            init,
            once: Once::new(),
            slot: UnsafeCell::new(None),
        }
    }

    /// Returns the value, constructing it on the first call across all
    /// threads. Callers that lose the construction race block until the
    /// winner finishes, then read lock-free forever after.
    #[inline]
    pub fn get(&self) -> &T {
        self.once.call_once(|| {
            // Exclusive: `call_once` admits exactly one closure ever, and
            // nothing reads the slot before `is_completed`.
            unsafe {
                *self.slot.get() = Some((self.init)());
            }
        });

        debug_assert!(self.is_initialized());
        unsafe { (*self.slot.get()).as_ref().unwrap() }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.once.is_completed()
    }

    fn peek(&self) -> Option<&T> {
        if self.is_initialized() {
            unsafe { (*self.slot.get()).as_ref() }
        } else {
            None
        }
    }
}

unsafe impl<T: Send + Sync> Sync for OnceLazy<T> {}
unsafe impl<T: Send> Send for OnceLazy<T> {}

impl<T: RefUnwindSafe + UnwindSafe> RefUnwindSafe for OnceLazy<T> {}
impl<T: UnwindSafe> UnwindSafe for OnceLazy<T> {}

impl<T> Deref for OnceLazy<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for OnceLazy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_tuple("OnceLazy");
        match self.peek() {
            Some(v) => d.field(v),
            None => d.field(&format_args!("<uninit>")),
        };
        d.finish()
    }
}
