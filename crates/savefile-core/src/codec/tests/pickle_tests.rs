use crate::codec::pickle::{decode, decode_bytes, encode, encode_bytes};
use crate::kernel::error::Result;

#[test]
fn test_bytes_round_trip() -> Result<()> {
    let blob: Vec<u8> = (0u8..=255).collect();
    let pickled = encode_bytes(&blob)?;

    // Pickle protocol 2+ streams open with the PROTO opcode
    assert_eq!(pickled[0], 0x80);
    assert_eq!(decode_bytes(&pickled)?, blob);

    Ok(())
}

#[test]
fn test_empty_bytes_round_trip() -> Result<()> {
    assert_eq!(decode_bytes(&encode_bytes(&[])?)?, Vec::<u8>::new());
    Ok(())
}

#[test]
fn test_generic_values() -> Result<()> {
    let value = vec![("a".to_string(), 1i64), ("b".to_string(), 2i64)];
    let decoded: Vec<(String, i64)> = decode(&encode(&value)?)?;
    assert_eq!(decoded, value);
    Ok(())
}

#[test]
fn test_decode_garbage_fails() {
    assert!(decode_bytes(b"not a pickle").is_err());
}
