//! Six strategies for building a process-wide singleton accessor that is safe
//! (or, in one deliberate case, unsafe) under concurrent first access.
//!
//! Every cell in this crate solves the same problem: a value that must be
//! constructed at most once, whose address every caller then observes for the
//! lifetime of the process. They differ only in *when* construction happens
//! and *how* competing first callers are arbitrated:
//!
//! * [`Eager<T>`] — built during static initialization, before any thread can
//!   reach the accessor.
//! * [`RacyLazy<T>`] — check-then-construct with no arbitration at all. This
//!   is the classic broken lazy singleton, kept broken on purpose so the
//!   failure mode can be demonstrated.
//! * [`LockedLazy<T>`] — the whole accessor body runs under a mutex.
//! * [`DoubleCheckedLazy<T>`] — lock-free read on the hot path, mutex plus a
//!   second check on the construction path.
//! * [`OnceLazy<T>`] — construction delegated to [`std::sync::Once`], the
//!   platform's one-time initialization primitive.
//! * [`Solo`] — a closed enumeration with exactly one member, fixed at
//!   compile time.
//!
//! The cells are generic; the singleton property comes from placing one in a
//! `static`. All constructors are `const fn`, and initializers are plain
//! `fn() -> T` so no allocation or capture is needed to declare one:
//!
//! ```
//! use lazy_singleton::OnceLazy;
//!
//! static CONFIG: OnceLazy<Vec<u32>> = OnceLazy::new(|| vec![1, 2, 3]);
//!
//! std::thread::spawn(|| {
//!     assert_eq!(CONFIG.get()[0], 1);
//! }).join().unwrap();
//! assert!(std::ptr::eq(CONFIG.get(), CONFIG.get()));
//! ```

mod double_checked;
mod eager;
mod locked;
mod once_lazy;
mod racy;
mod solo;

pub use double_checked::DoubleCheckedLazy;
pub use eager::Eager;
pub use locked::LockedLazy;
pub use once_lazy::OnceLazy;
pub use racy::RacyLazy;
pub use solo::Solo;

#[cfg(test)]
mod tests;
