use crate::{Codec, DecodeError, decode, encode};

#[test]
fn test_encode_empty() {
    for codec in Codec::ALL {
        assert_eq!(encode(b"", codec), "");
    }
}

#[test]
fn test_decode_empty_is_invalid_length() {
    for codec in Codec::ALL {
        assert!(matches!(
            decode("", codec),
            Err(DecodeError::InvalidLength { actual: 0, .. })
        ));
    }
}

#[test]
fn test_concrete_vectors() {
    assert_eq!(encode(&[0x4D], Codec::Base16), "4D");
    assert_eq!(encode(b"Hi", Codec::Base64), "SGk=");
    assert_eq!(encode(b"f", Codec::Base32), "MY======");
    assert_eq!(decode("SGk=", Codec::Base64).unwrap(), b"Hi");
    assert_eq!(decode("MY======", Codec::Base32).unwrap(), b"f");
    assert_eq!(decode("4D", Codec::Base16).unwrap(), [0x4Du8]);
}

#[test]
fn test_encode_decode_binary() {
    let data = &[0u8, 1, 2, 3, 255, 254, 253];
    for codec in Codec::ALL {
        let encoded = encode(data, codec);
        assert_eq!(decode(&encoded, codec).unwrap(), data);
    }
}

#[test]
fn test_all_zero_and_all_ones() {
    for len in [1, 2, 3, 4, 5, 6, 7, 15, 16, 64] {
        for fill in [0x00u8, 0xFF] {
            let data = vec![fill; len];
            for codec in Codec::ALL {
                let encoded = encode(&data, codec);
                assert_eq!(decode(&encoded, codec).unwrap(), data, "{} len {}", codec, len);
            }
        }
    }
}

#[test]
fn test_length_formulas() {
    for len in 0..64 {
        let data = vec![0x5Au8; len];
        assert_eq!(encode(&data, Codec::Base16).len(), 2 * len);
        assert_eq!(encode(&data, Codec::Base32).len(), 8 * len.div_ceil(5));
        assert_eq!(encode(&data, Codec::Base64).len(), 4 * len.div_ceil(3));
    }
}

#[test]
fn test_padding_is_contiguous_suffix() {
    for len in 0..32 {
        let data: Vec<u8> = (0..len as u8).collect();
        for codec in [Codec::Base32, Codec::Base64] {
            let encoded = encode(&data, codec);
            let body = encoded.trim_end_matches('=');
            assert!(!body.contains('='), "{} {}", codec, encoded);
            let alphabet = codec.alphabet();
            assert!(body.bytes().all(|b| alphabet.value(b).is_some()));
        }
    }
}

#[test]
fn test_base16_never_pads() {
    let encoded = encode(b"\x00\x01\x02", Codec::Base16);
    assert!(!encoded.contains('='));
}

#[test]
fn test_utf8_passes_through_as_bytes() {
    let text = "你好, привет, مرحبا";
    for codec in Codec::ALL {
        let encoded = encode(text.as_bytes(), codec);
        assert!(encoded.is_ascii());
        let decoded = decode(&encoded, codec).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}

#[test]
fn test_decode_rejects_bang() {
    assert!(matches!(decode("4!", Codec::Base16), Err(DecodeError::InvalidCharacter { .. })));
    assert!(matches!(
        decode("MY!=====", Codec::Base32),
        Err(DecodeError::InvalidCharacter { .. })
    ));
    assert!(matches!(decode("SGk!", Codec::Base64), Err(DecodeError::InvalidCharacter { .. })));
}

#[test]
fn test_decode_rejects_non_ascii() {
    // "é" is two bytes, so the length check passes and the character check fails
    match decode("é", Codec::Base16) {
        Err(DecodeError::InvalidCharacter { char, position, .. }) => {
            assert_eq!(char, 'é');
            assert_eq!(position, 0);
        }
        other => panic!("expected InvalidCharacter, got {:?}", other),
    }
}

#[test]
fn test_tables_shared_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data: Vec<u8> = (0..200u8).map(|i| i.wrapping_mul(seed + 3)).collect();
                for codec in Codec::ALL {
                    let encoded = encode(&data, codec);
                    assert_eq!(decode(&encoded, codec).unwrap(), data);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
