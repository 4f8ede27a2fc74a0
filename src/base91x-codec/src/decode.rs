use crate::{
    alphabet::{self, BASE},
    bits::Accumulator,
    TAIL_BITS, WORD_BITS, WORD_MASK,
};

/// Computes an upper bound for the number of bytes decoded from `len`
/// input symbols.
///
/// Bytes which are not symbols only lower the actual count.
pub const fn decoded_len_max(len: usize) -> usize {
    let bits = (len / 2) * WORD_BITS as usize + (len % 2) * TAIL_BITS as usize;
    bits / u8::BITS as usize
}

/// Decodes `input` into a new byte vector.
///
/// See [`decode_into`] for details.
pub fn decode<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    let mut out = Vec::new();
    decode_into(input, &mut out);
    out
}

/// Decodes `input` and appends the resulting bytes to `out`.
///
/// Bytes that are not part of the alphabet are skipped without
/// affecting the surrounding symbols. Because every non-ASCII character
/// is encoded as bytes outside the ASCII range in UTF-8, any `&str`
/// can be passed in directly.
///
/// Symbol pairs which would produce a word beyond 13 bits are dropped
/// as a whole. A single leftover symbol at the end is taken to carry
/// 7 bits.
///
/// This is useful if you want to reuse existing buffer allocations.
pub fn decode_into<T: AsRef<[u8]>>(input: T, out: &mut Vec<u8>) {
    let input = input.as_ref();
    out.reserve(decoded_len_max(input.len()));

    let mut acc = Accumulator::new();
    let mut low: Option<u8> = None;

    for digit in input.iter().filter_map(|&b| alphabet::digit(b)) {
        let Some(lo) = low.take() else {
            low = Some(digit);
            continue;
        };

        let word = digit as u32 * BASE as u32 + lo as u32;
        if word & WORD_MASK != word {
            continue;
        }

        acc.push(word, WORD_BITS);
        while acc.len() >= u8::BITS {
            out.push(acc.take(u8::BITS) as u8);
        }
    }

    if let Some(lo) = low {
        acc.push(lo as u32, TAIL_BITS);
    }

    if acc.len() >= u8::BITS {
        out.push(acc.peek(u8::BITS) as u8);
    }
}
