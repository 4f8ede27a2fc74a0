use crate::{
    alphabet::{self, BASE},
    bits::Accumulator,
    TAIL_BITS, WORD_BITS,
};

/// Computes the exact number of symbols produced for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    let bits = len * u8::BITS as usize;
    let words = bits / WORD_BITS as usize;

    let tail = match bits % WORD_BITS as usize {
        0 => 0,
        n if n < TAIL_BITS as usize => 1,
        _ => 2,
    };

    words * 2 + tail
}

/// Encodes `input` into a new [`String`].
///
/// See [`encode_into`] for details.
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    let mut out = String::new();
    encode_into(input, &mut out);
    out
}

/// Encodes `input` and appends the symbols to `out`.
///
/// Every full 13-bit word of input becomes two symbols, low digit
/// first. A final partial word takes one symbol when it holds less
/// than 7 bits and two otherwise.
///
/// This is useful if you want to reuse existing buffer allocations.
pub fn encode_into<T: AsRef<[u8]>>(input: T, out: &mut String) {
    let input = input.as_ref();
    out.reserve(encoded_len(input.len()));

    let mut acc = Accumulator::new();
    for &b in input {
        acc.push(b as u32, u8::BITS);

        while acc.len() >= WORD_BITS {
            let word = acc.take(WORD_BITS);
            push_word(out, word, true);
        }
    }

    if !acc.is_empty() {
        let word = acc.peek(WORD_BITS);
        push_word(out, word, acc.len() >= TAIL_BITS);
    }
}

#[inline]
fn push_word(out: &mut String, word: u32, high: bool) {
    let base = BASE as u32;

    out.push(alphabet::symbol((word % base) as u8));
    if high {
        out.push(alphabet::symbol((word / base) as u8));
    }
}
