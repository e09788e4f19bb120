//! Digit counts for `u16`.

super::impl_count!(u16);
