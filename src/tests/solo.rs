use crate::Solo;
use static_assertions::assert_impl_all;

assert_impl_all!(Solo: Send, Sync, Copy);

#[test]
fn single_identity_under_stampede() {
    let addrs = super::stampede_addresses(128, || Solo::get() as *const Solo as usize);
    assert_eq!(addrs.len(), 1);
}

#[test]
fn value_exists_before_first_access() {
    std::thread::spawn(|| {
        assert_eq!(*Solo::get(), Solo::Instance);
    })
    .join()
    .unwrap();
}

#[test]
fn idempotent_identity() {
    let first = Solo::get();
    for _ in 0..100 {
        assert!(std::ptr::eq(first, Solo::get()));
    }
}

#[test]
fn only_member() {
    // Exhaustive match: the enumeration is closed over exactly one value.
    match *Solo::get() {
        Solo::Instance => {}
    }
}
