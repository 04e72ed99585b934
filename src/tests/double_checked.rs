use crate::DoubleCheckedLazy;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use std::cell::Cell;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

assert_impl_all!(DoubleCheckedLazy<String>: Send, Sync);
assert_not_impl_any!(DoubleCheckedLazy<Cell<u32>>: Sync);

#[test]
fn single_identity_under_stampede() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static CELL: DoubleCheckedLazy<u64> = DoubleCheckedLazy::new(|| {
        CALLS.fetch_add(1, SeqCst);
        thread::sleep(Duration::from_millis(50));
        92
    });

    let addrs = super::stampede_addresses(128, || {
        let v = CELL.get();
        assert_eq!(*v, 92);
        v as *const u64 as usize
    });

    assert_eq!(addrs.len(), 1);
    assert_eq!(CALLS.load(SeqCst), 1);
}

#[test]
fn no_partially_constructed_value_observed() {
    struct Payload {
        lo: u64,
        hi: u64,
        checksum: u64,
    }

    static SLOW: DoubleCheckedLazy<Payload> = DoubleCheckedLazy::new(|| {
        let lo = 7;
        thread::sleep(Duration::from_millis(20));
        let hi = 35;
        Payload {
            lo,
            hi,
            checksum: lo + hi,
        }
    });

    let barrier = Barrier::new(2);
    crossbeam::thread::scope(|s| {
        for _ in 0..2 {
            s.spawn(|_| {
                barrier.wait();
                let p = SLOW.get();
                // Either thread may have won; both must see every field the
                // constructor wrote, not just the pointer.
                assert_eq!(p.lo, 7);
                assert_eq!(p.hi, 35);
                assert_eq!(p.lo + p.hi, p.checksum);
            });
        }
    })
    .unwrap();
}

#[test]
fn lazy_until_first_access() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static CELL: DoubleCheckedLazy<u32> = DoubleCheckedLazy::new(|| {
        CALLS.fetch_add(1, SeqCst);
        7
    });

    assert_eq!(CALLS.load(SeqCst), 0);
    assert!(!CELL.is_initialized());

    for _ in 0..10 {
        assert_eq!(*CELL, 7);
    }
    assert_eq!(CALLS.load(SeqCst), 1);
    assert!(CELL.is_initialized());
}

#[test]
fn idempotent_on_one_thread() {
    static CELL: DoubleCheckedLazy<String> = DoubleCheckedLazy::new(|| "once".to_string());

    let first = CELL.get();
    for _ in 0..100 {
        assert!(std::ptr::eq(first, CELL.get()));
    }
}

#[test]
fn debug_shows_uninit_then_value() {
    let cell: DoubleCheckedLazy<u32> = DoubleCheckedLazy::new(|| 5);
    assert_eq!(format!("{cell:?}"), "DoubleCheckedLazy(<uninit>)");
    cell.get();
    assert_eq!(format!("{cell:?}"), "DoubleCheckedLazy(5)");
}

#[test]
fn drop_frees_value() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    struct Tracked;
    impl Drop for Tracked {
        fn drop(&mut self) {
            DROPS.fetch_add(1, SeqCst);
        }
    }

    let cell: DoubleCheckedLazy<Tracked> = DoubleCheckedLazy::new(|| Tracked);
    cell.get();
    drop(cell);
    assert_eq!(DROPS.load(SeqCst), 1);
}
