//! Digit counts for `u128`.

super::impl_count!(u128);
