/// A closed enumeration with exactly one member.
///
/// The type system does the arbitration here: `Solo::Instance` is the only
/// value this type can ever take, it is baked into the binary at compile
/// time, and [`get`](Solo::get) hands out the address of one `static`
/// holding it. There is nothing to construct and therefore nothing to race
/// on — the strongest guarantee with the least code, at the cost of the
/// value being fixed at definition time.
///
/// ```
/// use lazy_singleton::Solo;
///
/// let a = Solo::get();
/// let b = std::thread::spawn(Solo::get).join().unwrap();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(*a, Solo::Instance);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solo {
    Instance,
}

static INSTANCE: Solo = Solo::Instance;

impl Solo {
    /// Returns the one instance. Every call site observes the same address.
    #[inline]
    pub fn get() -> &'static Solo {
        &INSTANCE
    }
}
