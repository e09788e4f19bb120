//! Count leading zeros and the binary logarithms derived from it.

/// `round(2^16 * log10(2))`.
pub(crate) const LOG10_2_Q16: u32 = 19728;

/// Returns `floor(log10(2^log2))`.
///
/// The Q16 constant is slightly smaller than `log10(2)`, so the
/// result is exact only while the error stays below the
/// fractional part of `log2 * log10(2)`. That holds for every
/// `log2 < 128`, which each width module checks at compile time.
pub(crate) const fn fixed_log10(log2: u32) -> u32 {
    (log2 * LOG10_2_Q16) >> 16
}

macro_rules! impl_log2 {
    ($word:ty) => {
        /// Returns the number of leading zero bits in `x`.
        ///
        /// Uses the hardware instruction unless the `soft-clz`
        /// feature is enabled.
        #[inline]
        pub const fn leading_zeros(x: $word) -> u32 {
            if cfg!(feature = "soft-clz") {
                soft_leading_zeros(x)
            } else {
                x.leading_zeros()
            }
        }

        /// Returns the number of leading zero bits in `x` by
        /// halving the search window each step.
        pub const fn soft_leading_zeros(mut x: $word) -> u32 {
            if x == 0 {
                return <$word>::BITS;
            }
            let mut n = 0;
            let mut w = <$word>::BITS / 2;
            while w > 0 {
                if x >> (<$word>::BITS - w) == 0 {
                    n += w;
                    x <<= w;
                }
                w /= 2;
            }
            n
        }

        /// Returns `floor(log2(x | 1))`.
        ///
        /// The `| 1` makes zero share the bucket of one instead of
        /// reaching the undefined `log2(0)`. It never changes the
        /// result for a non-zero `x`.
        #[inline]
        pub const fn log2_floor(x: $word) -> u32 {
            <$word>::BITS - 1 - leading_zeros(x | 1)
        }

        #[cfg(test)]
        mod clz_tests {
            use rand::random;

            use super::*;

            #[test]
            fn test_soft_leading_zeros() {
                if <$word>::BITS <= 16 {
                    for x in 0..=<$word>::MAX {
                        assert_eq!(soft_leading_zeros(x), x.leading_zeros(), "{x}");
                    }
                }
                for k in 0..<$word>::BITS {
                    let p = (1 as $word) << k;
                    for x in [p, p - 1, p | (p >> 1), <$word>::MAX >> k] {
                        assert_eq!(soft_leading_zeros(x), x.leading_zeros(), "{x}");
                    }
                }
                for _ in 0..10_000 {
                    let x = random::<$word>() >> (random::<u32>() % <$word>::BITS);
                    assert_eq!(soft_leading_zeros(x), x.leading_zeros(), "{x}");
                }
            }

            #[test]
            fn test_log2_floor() {
                assert_eq!(log2_floor(0), 0);
                assert_eq!(log2_floor(1), 0);
                assert_eq!(log2_floor(<$word>::MAX), <$word>::BITS - 1);
                for k in 1..<$word>::BITS {
                    let p = (1 as $word) << k;
                    assert_eq!(log2_floor(p - 1), k - 1, "{}", p - 1);
                    assert_eq!(log2_floor(p), k, "{p}");
                }
            }
        }
    };
}
pub(crate) use impl_log2;
