//! Digit counts, one module per word width.

pub mod count128;
pub mod count16;
pub mod count32;
pub mod count64;
pub mod count8;

macro_rules! impl_count {
    ($word:ty) => {
        $crate::clz::impl_log2!($word);

        use $crate::{clz::fixed_log10, correction::LogCorrection, util::digits_by_division};

        /// The word whose digits this module counts.
        pub type Word = $word;

        #[doc = concat!("The number of digits in [`", stringify!($word), "::MAX`].")]
        pub const MAX_DIGITS: u8 = NUM_POW10 as u8;

        /// The number of powers of ten that fit in the word, which
        /// is also the number of digits in its maximum.
        const NUM_POW10: usize = {
            let mut n = 0;
            while (10 as $word).checked_pow(n).is_some() {
                n += 1
            }
            n as usize
        };

        /// Builds the decimal power table.
        ///
        /// `table[i] == 10^i` for `i` in `[1, MAX_DIGITS)` and
        /// `table[0] == 0`. The zero lets every search treat `0`
        /// like any other one digit value.
        #[allow(
            clippy::indexing_slicing,
            reason = "`i` is always less than `table.len()`"
        )]
        pub const fn powers_of_ten() -> [$word; NUM_POW10] {
            let mut table = [0; NUM_POW10];
            let mut power: $word = 1;
            let mut i = 0;
            while i < table.len() {
                table[i] = power;
                // The last power would overflow.
                if i + 1 < table.len() {
                    power *= 10;
                }
                i += 1;
            }
            table[0] = 0;
            table
        }

        /// The decimal power table. See [`powers_of_ten`].
        pub const POW10: [$word; NUM_POW10] = powers_of_ten();

        /// Returns the number of decimal digits in `x` by comparing
        /// it against ascending powers of ten.
        ///
        /// The cost grows with the number of digits in `x`.
        pub const fn linear_scan(x: $word) -> u8 {
            let mut power: $word = 10;
            let mut i = 1;
            while i < NUM_POW10 {
                if x < power {
                    return i as u8;
                }
                if i + 1 < NUM_POW10 {
                    power *= 10;
                }
                i += 1;
            }
            MAX_DIGITS
        }

        /// Returns the smallest `i` such that `x < table[i]`, or
        /// `table.len()` if there isn't one.
        #[allow(
            clippy::indexing_slicing,
            reason = "`mid` is always in `(low, high)`, so it is in range"
        )]
        const fn bisect(x: $word, table: &[$word; NUM_POW10]) -> u8 {
            let mut low = 0;
            let mut high = NUM_POW10;
            while low + 1 < high {
                let mid = (low + high) / 2;
                if x < table[mid] {
                    high = mid;
                } else {
                    low = mid;
                }
            }
            high as u8
        }

        /// The decimal power table, built on first use.
        #[cfg(feature = "std")]
        fn runtime_powers() -> &'static [$word; NUM_POW10] {
            static TABLE: ::std::sync::OnceLock<[$word; NUM_POW10]> =
                ::std::sync::OnceLock::new();
            TABLE.get_or_init(powers_of_ten)
        }

        /// The decimal power table, materialized as a static.
        #[cfg(not(feature = "std"))]
        fn runtime_powers() -> &'static [$word; NUM_POW10] {
            static TABLE: [$word; NUM_POW10] = powers_of_ten();
            &TABLE
        }

        /// Returns the number of decimal digits in `x` by binary
        /// search over the decimal power table.
        ///
        /// The table is built the first time this is called.
        pub fn binary_search(x: $word) -> u8 {
            bisect(x, runtime_powers())
        }

        /// Depth of the bisection tree, `ceil(log2(NUM_POW10))`.
        const TREE_DEPTH: u32 = NUM_POW10.next_power_of_two().trailing_zeros();
        const TREE_LEAVES: usize = 1 << TREE_DEPTH;
        $crate::util::const_assert!(TREE_LEAVES / 2 < NUM_POW10 && NUM_POW10 <= TREE_LEAVES);

        /// Flattens [`bisect`] into an implicit tree.
        ///
        /// Node `i` has children `2i` (below the threshold) and
        /// `2i+1` (at or above it); the root is node 1. Branches
        /// that finish early are padded with a zero threshold,
        /// which always goes right, so that every leaf sits at
        /// `TREE_DEPTH`. Leaf `i` is stored at `i - TREE_LEAVES`.
        #[allow(
            clippy::indexing_slicing,
            reason = "This is a const initializer, so panicking is okay."
        )]
        const fn bisection_tree() -> ([$word; TREE_LEAVES], [u8; TREE_LEAVES]) {
            let mut thresholds = [0; TREE_LEAVES];
            let mut digits = [0; TREE_LEAVES];

            // `[low, high)` of each node.
            let mut low = [0; 2 * TREE_LEAVES];
            let mut high = [0; 2 * TREE_LEAVES];
            high[1] = NUM_POW10;

            let mut i = 1;
            while i < TREE_LEAVES {
                let (lo, hi) = (low[i], high[i]);
                let (left, right) = (2 * i, 2 * i + 1);
                if lo + 1 < hi {
                    let mid = (lo + hi) / 2;
                    thresholds[i] = POW10[mid];
                    (low[left], high[left]) = (lo, mid);
                    (low[right], high[right]) = (mid, hi);
                } else {
                    thresholds[i] = 0;
                    (low[left], high[left]) = (lo, hi);
                    (low[right], high[right]) = (lo, hi);
                }
                i += 1;
            }
            while i < 2 * TREE_LEAVES {
                assert!(low[i] + 1 == high[i], "unresolved leaf");
                digits[i - TREE_LEAVES] = high[i] as u8;
                i += 1;
            }
            (thresholds, digits)
        }

        const TREE_THRESHOLDS: [$word; TREE_LEAVES] = bisection_tree().0;
        const TREE_DIGITS: [u8; TREE_LEAVES] = bisection_tree().1;

        /// Returns the number of decimal digits in `x` by walking
        /// a bisection tree computed at compile time.
        ///
        /// Same comparisons as [`binary_search`], with the loop
        /// bounds known at compile time.
        #[allow(
            clippy::indexing_slicing,
            reason = "`i` is in `[1, 2*TREE_LEAVES)` by construction"
        )]
        pub const fn binary_search_const(x: $word) -> u8 {
            let mut i = 1;
            let mut level = 0;
            while level < TREE_DEPTH {
                i = 2 * i + (x >= TREE_THRESHOLDS[i]) as usize;
                level += 1;
            }
            TREE_DIGITS[i - TREE_LEAVES]
        }

        /// Returns the correction entry for the bucket whose
        /// smallest magnitude is `smallest`.
        #[allow(
            clippy::indexing_slicing,
            reason = "This is a const initializer, so panicking is okay."
        )]
        const fn correction(smallest: $word) -> LogCorrection<$word> {
            let digit_count = linear_scan(smallest);
            let upper = if (digit_count as usize) < NUM_POW10 {
                POW10[digit_count as usize] - 1
            } else {
                <$word>::MAX
            };
            LogCorrection::new(digit_count, upper)
        }

        /// Correction entries indexed by `floor(log2(x))`.
        #[allow(
            clippy::indexing_slicing,
            reason = "This is a const initializer, so panicking is okay."
        )]
        pub const FINE_CORRECTIONS: [LogCorrection<$word>; <$word>::BITS as usize] = {
            let mut table = [LogCorrection::new(0, 0); <$word>::BITS as usize];
            let mut k = 0;
            while k < table.len() {
                table[k] = correction((1 as $word) << k);
                k += 1;
            }
            table
        };

        /// Correction entries indexed by `floor(log2(x)) / 8`.
        #[allow(
            clippy::indexing_slicing,
            reason = "This is a const initializer, so panicking is okay."
        )]
        pub const COARSE_CORRECTIONS: [LogCorrection<$word>; <$word>::BITS as usize / 8] = {
            let mut table = [LogCorrection::new(0, 0); <$word>::BITS as usize / 8];
            let mut k = 0;
            while k < table.len() {
                table[k] = correction((1 as $word) << (8 * k));
                k += 1;
            }
            table
        };

        // The fixed-point estimate is the digit count of every
        // power of two, so each fine bucket is off by at most one.
        // Within a byte bucket, the estimate never falls behind
        // the entry and runs at most `NUM_POW10 - 1` decades ahead
        // of it.
        #[allow(
            clippy::indexing_slicing,
            reason = "This is a const initializer, so panicking is okay."
        )]
        const _: () = {
            let mut k = 0;
            while k < <$word>::BITS {
                let estimate = fixed_log10(k) + 1;
                assert!(estimate == digits_by_division(1 << k) as u32);
                assert!(estimate == FINE_CORRECTIONS[k as usize].digit_count as u32);
                let base = COARSE_CORRECTIONS[(k >> 3) as usize].digit_count as u32;
                assert!(estimate >= base);
                assert!(((estimate - base) as usize) < NUM_POW10);
                k += 1;
            }
        };

        /// Returns the number of decimal digits in `x` using the
        /// per-bit correction table.
        #[allow(
            clippy::indexing_slicing,
            reason = "`log2_floor` is always less than `BITS`"
        )]
        #[inline]
        pub const fn approx_fine(x: $word) -> u8 {
            let log2 = log2_floor(x);
            let entry = FINE_CORRECTIONS[log2 as usize];
            debug_assert!(entry.digit_count as u32 == fixed_log10(log2) + 1);
            entry.digit_count + (x > entry.upper_bound_inclusive) as u8
        }

        /// Returns `(upper + 1) * 10^decades - 1`, or the word's
        /// maximum if that overflows.
        #[allow(
            clippy::indexing_slicing,
            reason = "`decades < NUM_POW10` is checked at compile time"
        )]
        #[inline]
        const fn rescale(upper: $word, decades: u8) -> $word {
            if decades == 0 {
                return upper;
            }
            // `upper` is saturated only in the last decade, which
            // is never behind the estimate, so `upper + 1` does not
            // overflow.
            match (upper + 1).checked_mul(POW10[decades as usize]) {
                Some(p) => p - 1,
                None => <$word>::MAX,
            }
        }

        /// Returns the number of decimal digits in `x` using the
        /// per-byte correction table.
        ///
        /// A byte bucket can span up to four digit counts, so its
        /// entry alone does not settle `x`. The fixed-point
        /// estimate says how many decades `x` is past the start of
        /// the bucket; the entry's bound is moved up by that many
        /// decades before the final comparison.
        #[allow(
            clippy::indexing_slicing,
            reason = "`log2_floor(x) / 8` is always less than `BITS / 8`"
        )]
        #[inline]
        pub const fn approx_coarse(x: $word) -> u8 {
            let log2 = log2_floor(x);
            let estimate = (fixed_log10(log2) + 1) as u8;
            let entry = COARSE_CORRECTIONS[(log2 >> 3) as usize];
            let upper = rescale(entry.upper_bound_inclusive, estimate - entry.digit_count);
            estimate + (x > upper) as u8
        }

    };
}
pub(crate) use impl_count;
