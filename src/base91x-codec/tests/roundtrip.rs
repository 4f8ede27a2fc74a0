use base91x_codec::{decode, encode, encode_into, encoded_len};
use rand::{rngs::StdRng, RngCore, SeedableRng};

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0; len];
    rng.fill_bytes(&mut data);
    data
}

#[test]
fn roundtrip_small() {
    let mut rng = StdRng::seed_from_u64(91);

    for len in 0..=32 {
        let data = random_bytes(&mut rng, len);
        let text = encode(&data);

        assert_eq!(decode(&text), data, "{text}");
    }
}

#[test]
fn roundtrip_large() {
    let mut rng = StdRng::seed_from_u64(65536);
    let data = random_bytes(&mut rng, 65536);

    assert_eq!(decode(encode(&data)), data);
}

#[test]
fn roundtrip_uniform_bytes() {
    for b in [0x00, 0x55, 0xAA, 0xFF] {
        let data = vec![b; 1000];
        assert_eq!(decode(encode(&data)), data);
    }
}

#[test]
fn encoded_len_is_exact() {
    let mut rng = StdRng::seed_from_u64(13);

    for len in 0..=128 {
        let data = random_bytes(&mut rng, len);
        assert_eq!(encode(&data).len(), encoded_len(len), "length {len}");
    }
}

#[test]
fn flush_symbol_count() {
    // 8 leftover bits need a second symbol.
    assert_eq!(encoded_len(1), 2);
    // 16 bits: one word and 3 leftover bits in a single symbol.
    assert_eq!(encoded_len(2), 3);
    // 40 bits: three words and 1 leftover bit.
    assert_eq!(encoded_len(5), 7);
    // 104 bits split into words evenly.
    assert_eq!(encoded_len(13), 16);
}

#[test]
fn encode_into_appends() {
    let mut out = String::from("> ");
    encode_into(b"Hello, World!", &mut out);

    assert_eq!(out, "> 1qOv^1$!aC*99N<t");
}
