//! A dense binary-to-text encoding over a 91 symbol alphabet.
//!
//! Input bytes are treated as one continuous little-endian bitstream
//! which is cut into 13-bit words. Every word is written as two base-91
//! digits, low digit first. Since `91 * 91 = 8281 > 8192`, a pair of
//! symbols always has room for a full word, making the output roughly
//! 23% larger than the input compared to 33% for Base64.
//!
//! The alphabet only contains printable ASCII and leaves out `'`, `\`
//! and all whitespace. Decoding skips anything that is not a symbol, so
//! line breaks or indentation added by a transport don't need to be
//! stripped beforehand.
//!
//! ```
//! let text = base91x_codec::encode(b"Hello, World!");
//! assert_eq!(text, "1qOv^1$!aC*99N<t");
//!
//! let data = base91x_codec::decode("1qOv^1$!\r\naC*99N<t");
//! assert_eq!(data, b"Hello, World!");
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub use alphabet::BASE;

mod bits;

mod decode;
pub use decode::*;

mod encode;
pub use encode::*;

/// The number of bits packed into a pair of symbols.
pub const WORD_BITS: u32 = 13;

/// Mask for extracting a word from the low bits of an accumulator.
pub const WORD_MASK: u32 = (1 << WORD_BITS) - 1;

/// The number of leftover bits from which the encoder spends a second
/// symbol on the final partial word.
///
/// The decoder credits a lone trailing symbol with the same number of
/// bits.
pub const TAIL_BITS: u32 = 7;
