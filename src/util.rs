macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = ::core::assert!($($tt)*);
    }
}
pub(crate) use const_assert;

/// The number of decimal digits in `x`, computed by repeated
/// division.
///
/// This is the slow reference the tables are generated from.
pub(crate) const fn digits_by_division(mut x: u128) -> u8 {
    let mut n = 1;
    while x >= 10 {
        x /= 10;
        n += 1;
    }
    n
}
