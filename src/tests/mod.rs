use std::collections::HashSet;
use std::sync::{Barrier, Mutex};

mod double_checked;
mod solo;

/// Releases `n` threads against `f` at the same instant and collects the
/// distinct addresses they were handed.
pub(crate) fn stampede_addresses(n: usize, f: impl Fn() -> usize + Sync) -> HashSet<usize> {
    let barrier = Barrier::new(n);
    let seen = Mutex::new(HashSet::new());
    crossbeam::thread::scope(|s| {
        for _ in 0..n {
            s.spawn(|_| {
                barrier.wait();
                let addr = f();
                seen.lock().unwrap().insert(addr);
            });
        }
    })
    .unwrap();
    seen.into_inner().unwrap()
}
