use proptest::prelude::*;

/// The upper bound of keys generated by [`arbitrary_key()`].
///
/// A small key domain encourages multiple operations to act on the same key.
pub(crate) const KEY_MAX: u16 = 50;

pub(crate) fn arbitrary_key() -> impl Strategy<Value = u16> {
    0..KEY_MAX
}

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(u16, usize),
    Get(u16),
    Contains(u16),
    Remove(u16),
    Delete(u16),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arbitrary_key(), any::<usize>()).prop_map(|(k, v)| Op::Insert(k, v)),
        arbitrary_key().prop_map(Op::Get),
        arbitrary_key().prop_map(Op::Contains),
        arbitrary_key().prop_map(Op::Remove),
        arbitrary_key().prop_map(Op::Delete),
    ]
}

/// Route `log` output through the test harness, ignoring repeated calls.
pub(crate) fn init_logging() {
    let _ = simplelog::TestLogger::init(log::LevelFilter::Debug, simplelog::Config::default());
}
