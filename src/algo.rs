use core::{fmt, str::FromStr};

use super::count::{count128, count16, count32, count64, count8};

mod private {
    pub trait Sealed: Copy {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
    impl Sealed for usize {}
}
use private::Sealed;

/// An unsigned integer whose decimal digits can be counted.
///
/// Every method returns the same result; they differ only in
/// how they get there. See [`Algorithm`].
pub trait DigitCount: Sealed {
    /// The number of digits in the type's maximum value.
    const MAX_DIGITS: u8;

    /// See [`Algorithm::LinearScan`].
    fn digits_linear(self) -> u8;

    /// See [`Algorithm::BinarySearch`].
    fn digits_binary(self) -> u8;

    /// See [`Algorithm::BinarySearchConst`].
    fn digits_binary_const(self) -> u8;

    /// See [`Algorithm::ApproxFine`].
    fn digits_approx_fine(self) -> u8;

    /// See [`Algorithm::ApproxCoarse`].
    fn digits_approx_coarse(self) -> u8;

    /// Returns the number of decimal digits in `self`.
    ///
    /// Zero has one digit.
    #[inline]
    fn digits(self) -> u8 {
        self.digits_approx_fine()
    }
}

macro_rules! impl_digit_count {
    ($($word:ty => $module:ident),* $(,)?) => {
        $(impl DigitCount for $word {
            const MAX_DIGITS: u8 = $module::MAX_DIGITS;

            #[inline]
            fn digits_linear(self) -> u8 {
                $module::linear_scan(self)
            }

            #[inline]
            fn digits_binary(self) -> u8 {
                $module::binary_search(self)
            }

            #[inline]
            fn digits_binary_const(self) -> u8 {
                $module::binary_search_const(self)
            }

            #[inline]
            fn digits_approx_fine(self) -> u8 {
                $module::approx_fine(self)
            }

            #[inline]
            fn digits_approx_coarse(self) -> u8 {
                $module::approx_coarse(self)
            }
        })*
    };
}
impl_digit_count!(
    u8 => count8,
    u16 => count16,
    u32 => count32,
    u64 => count64,
    u128 => count128,
);

#[cfg(target_pointer_width = "16")]
use count16 as count_usize;
#[cfg(target_pointer_width = "32")]
use count32 as count_usize;
#[cfg(target_pointer_width = "64")]
use count64 as count_usize;

impl DigitCount for usize {
    const MAX_DIGITS: u8 = count_usize::MAX_DIGITS;

    #[inline]
    fn digits_linear(self) -> u8 {
        count_usize::linear_scan(self as _)
    }

    #[inline]
    fn digits_binary(self) -> u8 {
        count_usize::binary_search(self as _)
    }

    #[inline]
    fn digits_binary_const(self) -> u8 {
        count_usize::binary_search_const(self as _)
    }

    #[inline]
    fn digits_approx_fine(self) -> u8 {
        count_usize::approx_fine(self as _)
    }

    #[inline]
    fn digits_approx_coarse(self) -> u8 {
        count_usize::approx_coarse(self as _)
    }
}

/// A digit counting algorithm.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Compare against ascending powers of ten.
    LinearScan,
    /// Binary search over a power-of-ten table built at runtime.
    BinarySearch,
    /// Binary search over a bisection tree built at compile
    /// time.
    BinarySearchConst,
    /// Approximate `log10` from `log2`, then correct it with one
    /// entry per bit position.
    #[default]
    ApproxFine,
    /// Approximate `log10` from `log2`, then correct it with one
    /// entry per eight bit positions.
    ApproxCoarse,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::LinearScan,
        Self::BinarySearch,
        Self::BinarySearchConst,
        Self::ApproxFine,
        Self::ApproxCoarse,
    ];

    /// Returns the algorithm's name, as accepted by
    /// [`from_str`][Self::from_str].
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearScan => "linear",
            Self::BinarySearch => "binary",
            Self::BinarySearchConst => "binary-const",
            Self::ApproxFine => "approx-fine",
            Self::ApproxCoarse => "approx-coarse",
        }
    }

    /// Returns the algorithm as a function pointer.
    pub fn func<T: DigitCount>(self) -> fn(T) -> u8 {
        match self {
            Self::LinearScan => T::digits_linear,
            Self::BinarySearch => T::digits_binary,
            Self::BinarySearchConst => T::digits_binary_const,
            Self::ApproxFine => T::digits_approx_fine,
            Self::ApproxCoarse => T::digits_approx_coarse,
        }
    }

    /// Returns the number of decimal digits in `x`.
    #[inline]
    pub fn count<T: DigitCount>(self, x: T) -> u8 {
        self.func()(x)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAlgorithmError::empty());
        }
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or(ParseAlgorithmError::unknown())
    }
}

/// An error returned when parsing an [`Algorithm`] from
/// a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseAlgorithmError {
    kind: ErrorKind,
}

impl ParseAlgorithmError {
    const fn empty() -> Self {
        Self {
            kind: ErrorKind::Empty,
        }
    }

    const fn unknown() -> Self {
        Self {
            kind: ErrorKind::Unknown,
        }
    }
}

#[cfg(any(feature = "std", test))]
impl std::error::Error for ParseAlgorithmError {}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse algorithm from empty string"),
            Self::Unknown => write!(
                f,
                "unknown algorithm (expected one of linear, binary, binary-const, approx-fine, approx-coarse)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{ensure, Context, Result};
    use rand::random;

    use super::*;

    #[test]
    fn test_parse() -> Result<()> {
        for a in Algorithm::ALL {
            let got = a
                .to_string()
                .parse::<Algorithm>()
                .with_context(|| format!("unable to parse `{a}`"))?;
            ensure!(got == a, "`{a}` parsed as `{got}`");

            let upper = a.name().to_ascii_uppercase();
            let got = upper
                .parse::<Algorithm>()
                .with_context(|| format!("unable to parse `{upper}`"))?;
            ensure!(got == a, "`{upper}` parsed as `{got}`");
        }
        Ok(())
    }

    #[test]
    fn test_parse_error() {
        let err = "".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError::empty());
        assert_eq!(err.to_string(), "cannot parse algorithm from empty string");

        for s in ["lin", "binary_const", " approx-fine", "approx"] {
            let err = s.parse::<Algorithm>().unwrap_err();
            assert_eq!(err, ParseAlgorithmError::unknown(), "{s}");
            assert!(err.to_string().starts_with("unknown algorithm"), "{s}");
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Algorithm::default(), Algorithm::ApproxFine);
        assert_eq!(12_345u32.digits(), 5);
    }

    fn check<T>(x: T)
    where
        T: DigitCount + itoa::Integer + fmt::Display,
    {
        let want = itoa::Buffer::new().format(x).len() as u8;
        for a in Algorithm::ALL {
            assert_eq!(a.count(x), want, "{a}({x})");
            assert_eq!(a.func::<T>()(x), want, "{a}({x})");
        }
    }

    #[test]
    fn test_all_widths() {
        for x in [0, 1, 9, 10, 99, 100, 255] {
            check(x as u8);
            check(x as u16);
            check(x as u32);
            check(x as u64);
            check(x as u128);
            check(x as usize);
        }
        check(u8::MAX);
        check(u16::MAX);
        check(u32::MAX);
        check(u64::MAX);
        check(u128::MAX);
        check(usize::MAX);
        for _ in 0..10_000 {
            check(random::<u64>() >> (random::<u32>() % 64));
            check(random::<usize>() >> (random::<u32>() % usize::BITS));
        }
    }

    // Every thread races to build the runtime tables.
    #[test]
    fn test_concurrent_first_use() {
        std::thread::scope(|s| {
            for t in 0..8u128 {
                s.spawn(move || {
                    // `x` has `want` digits and outgrows `u64` at the end.
                    let last = u64::MAX_DIGITS + 1;
                    let mut x = t + 1;
                    for want in 1..=last {
                        assert_eq!(x.digits_binary(), want, "{x}");
                        if let Ok(x) = u64::try_from(x) {
                            assert_eq!(x.digits_binary(), want, "{x}");
                        }
                        if want < last {
                            x = x * 10 + (9 - t);
                        }
                    }
                });
            }
        });
    }

    #[test]
    fn test_max_digits() {
        assert_eq!(u8::MAX_DIGITS, 3);
        assert_eq!(u16::MAX_DIGITS, 5);
        assert_eq!(u32::MAX_DIGITS, 10);
        assert_eq!(u64::MAX_DIGITS, 20);
        assert_eq!(u128::MAX_DIGITS, 39);
        assert_eq!(usize::MAX_DIGITS, usize::MAX.digits());
    }

    #[test]
    fn test_u32_scenarios() {
        let tests: [(u32, u8); 6] = [
            (0, 1),
            (9, 1),
            (10, 2),
            (99, 2),
            (100, 3),
            (4_294_967_295, 10),
        ];
        for (x, want) in tests {
            for a in Algorithm::ALL {
                assert_eq!(a.count(x), want, "{a}({x})");
            }
        }
    }
}
