//! Digit counts for `u8`.

super::impl_count!(u8);
