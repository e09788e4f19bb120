//! Digit counts for `u32`.

super::impl_count!(u32);
