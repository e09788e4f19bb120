//! `ndigits` counts the decimal digits of fixed-width unsigned
//! integers.
//!
//! Every width has its own module ([`count8`] through
//! [`count128`]) with five interchangeable algorithms:
//!
//! - `linear_scan`: probes ascending powers of ten.
//! - `binary_search`: bisects a power-of-ten table that is built
//! at runtime, once.
//! - `binary_search_const`: the same bisection, flattened into
//! a tree that is evaluated at compile time.
//! - `approx_fine`: approximates `log10` from `log2` and corrects
//! the estimate with one comparison against a per-bit table.
//! - `approx_coarse`: like `approx_fine`, but with a table that
//! has one entry per byte of bit positions.
//!
//! All of them are `O(1)`-ish, allocation free, and return `1` for
//! zero.
//!
//! ```
//! use ndigits::{count32, Algorithm, DigitCount};
//!
//! assert_eq!(count32::approx_fine(4_294_967_295), 10);
//! assert_eq!(0u64.digits(), 1);
//!
//! let f = "binary".parse::<Algorithm>().unwrap().func::<u16>();
//! assert_eq!(f(12_345), 5);
//! ```
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. The runtime table used by
//! `binary_search` is published through `OnceLock`. Enabled by
//! default.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `soft-clz`: Count leading zeros with a portable software
//! scan instead of the hardware instruction.
//!
//! - `slow-tests`: Run exhaustive 32-bit tests.
//!
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod algo;
mod clz;
mod count;
mod correction;
#[cfg(feature = "rand")]
mod dist;
mod util;

pub use algo::*;
#[doc(inline)]
pub use count::{count128, count16, count32, count64, count8};
pub use correction::LogCorrection;
#[cfg(feature = "rand")]
pub use dist::DigitLength;

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{Algorithm, DigitCount};
}
