use std::collections::HashSet;

use base91x_codec::alphabet::{self, ALPHABET, BASE};

#[test]
fn alphabet_is_unique() {
    let unique: HashSet<u8> = ALPHABET.iter().copied().collect();

    assert_eq!(ALPHABET.len(), BASE);
    assert_eq!(unique.len(), BASE);
}

#[test]
fn alphabet_is_printable() {
    for &b in ALPHABET {
        assert!(b.is_ascii_graphic(), "{b:#04x} is not printable");
    }

    for b in [b'\'', b'\\', b'"', b' ', b'\t', b'\r', b'\n'] {
        assert!(!ALPHABET.contains(&b), "{:?} must not be a symbol", b as char);
    }
}

#[test]
fn reverse_table_inverts_alphabet() {
    for (d, &b) in ALPHABET.iter().enumerate() {
        assert_eq!(alphabet::digit(b), Some(d as u8));
        assert_eq!(alphabet::symbol(d as u8), b as char);
    }
}

#[test]
fn reverse_table_rejects_foreign_bytes() {
    let foreign = (0..=u8::MAX).filter(|b| !ALPHABET.contains(b));

    assert_eq!(foreign.clone().count(), 256 - BASE);
    for b in foreign {
        assert_eq!(alphabet::digit(b), None, "{b:#04x} is not a symbol");
    }
}

#[test]
fn digit_order() {
    assert_eq!(alphabet::digit(b'!'), Some(0));
    assert_eq!(alphabet::digit(b'~'), Some(1));
    assert_eq!(alphabet::digit(b'#'), Some(35));
    assert_eq!(alphabet::digit(b'$'), Some(88));
    assert_eq!(alphabet::digit(b'%'), Some(90));
}
