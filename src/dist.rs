use rand::{distributions::Distribution, Rng};

use super::count::{count128, count16, count32, count64, count8};

/// Samples integers whose digit length is uniform over
/// `[1, MAX_DIGITS]`.
///
/// Uniformly random words are almost always as long as the
/// maximum, which hides how an algorithm's cost depends on
/// magnitude. `DigitLength` first picks a digit length, then a
/// value with that many digits.
///
/// ```
/// use ndigits::{DigitCount, DigitLength};
/// use rand::{rngs::mock::StepRng, Rng};
///
/// let mut rng = StepRng::new(0, 0x9e37_79b9_7f4a_7c15);
/// let x: u32 = rng.sample(DigitLength);
/// assert!(x.digits() <= u32::MAX_DIGITS);
/// ```
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub struct DigitLength;

macro_rules! impl_digit_length {
    ($($word:ty => $module:ident),* $(,)?) => {
        $(impl Distribution<$word> for DigitLength {
            #[allow(
                clippy::indexing_slicing,
                reason = "`d` is in `[1, MAX_DIGITS]` and `POW10` has `MAX_DIGITS` entries"
            )]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $word {
                let d = usize::from(rng.gen_range(1..=$module::MAX_DIGITS));
                let lo = if d == 1 { 0 } else { $module::POW10[d - 1] };
                let hi = if d < $module::POW10.len() {
                    $module::POW10[d] - 1
                } else {
                    <$word>::MAX
                };
                rng.gen_range(lo..=hi)
            }
        })*
    };
}
impl_digit_length!(
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

impl Distribution<usize> for DigitLength {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let x = <Self as Distribution<count_usize::Word>>::sample(self, rng);
        x as usize
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;
    use crate::DigitCount;

    fn check<T>()
    where
        T: DigitCount,
        DigitLength: Distribution<T>,
    {
        let mut seen = [false; 40];
        for _ in 0..20_000 {
            let x: T = thread_rng().sample(DigitLength);
            let d = usize::from(x.digits_linear());
            assert!((1..=usize::from(T::MAX_DIGITS)).contains(&d));
            seen[d] = true;
        }
        for d in 1..=usize::from(T::MAX_DIGITS) {
            assert!(seen[d], "no value with {d} digits");
        }
    }

    #[test]
    fn test_digit_length() {
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<u128>();
        check::<usize>();
    }
}
