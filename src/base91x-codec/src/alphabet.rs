//! The symbol alphabet and its reverse lookup table.

/// The base of the numeral system, equal to the number of symbols.
pub const BASE: usize = 91;

/// All symbols in digit order.
///
/// Index `i` holds the symbol for the digit `i`.
pub const ALPHABET: &[u8; BASE] =
    b"!~}|{zyxwvutsrqponmlkjihgfedcba`_^]#[ZYXWVUTSRQPONMLKJIHGFEDCBA@?>=<;:9876543210/.-,+*)($&%";

// Marks bytes in `REVERSE` that don't belong to the alphabet.
const INVALID: u8 = u8::MAX;

// Maps every ASCII byte to its digit, or `INVALID`.
static REVERSE: [u8; 128] = reverse_table(ALPHABET);

const fn reverse_table(alphabet: &[u8; BASE]) -> [u8; 128] {
    let mut table = [INVALID; 128];

    let mut digit = 0;
    while digit < BASE {
        let symbol = alphabet[digit] as usize;
        assert!(symbol < 128, "alphabet must be ASCII");
        assert!(table[symbol] == INVALID, "alphabet must not repeat symbols");

        table[symbol] = digit as u8;
        digit += 1;
    }

    table
}

/// Gets the symbol that represents `digit`.
///
/// # Panics
///
/// Panics when `digit` is not smaller than [`BASE`].
#[inline]
pub fn symbol(digit: u8) -> char {
    char::from(ALPHABET[digit as usize])
}

/// Looks up the digit represented by the byte `symbol`.
///
/// Returns [`None`] for everything outside the alphabet, which includes
/// all bytes beyond the ASCII range.
#[inline]
pub fn digit(symbol: u8) -> Option<u8> {
    REVERSE
        .get(symbol as usize)
        .copied()
        .filter(|&d| d != INVALID)
}
