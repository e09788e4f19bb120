//! Digit counts for `u64`.

super::impl_count!(u64);
