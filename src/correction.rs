/// One bucket of a log correction table.
///
/// A bucket covers a range of `floor(log2(x))` values.
/// `digit_count` is the number of digits in the smallest
/// magnitude of the bucket and `upper_bound_inclusive` is the
/// largest integer with that many digits, saturated to the
/// word's maximum. An `x` above `upper_bound_inclusive` needs at
/// least one more digit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LogCorrection<T> {
    /// Digits in the smallest magnitude of the bucket.
    pub digit_count: u8,
    /// Largest integer that has `digit_count` digits.
    pub upper_bound_inclusive: T,
}

impl<T> LogCorrection<T> {
    /// Creates a `LogCorrection`.
    pub const fn new(digit_count: u8, upper_bound_inclusive: T) -> Self {
        Self {
            digit_count,
            upper_bound_inclusive,
        }
    }
}
