use ndarray::{ArrayD, IxDyn};

use crate::codec::array::{decode_npy, encode_npy};
use crate::kernel::error::Result;

#[test]
fn test_npy_round_trip_2d() -> Result<()> {
    let array = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.5]).expect("shape matches");

    let bytes = encode_npy(&array)?;
    assert!(bytes.starts_with(b"\x93NUMPY"));
    assert_eq!(decode_npy(&bytes)?, array);

    Ok(())
}

#[test]
fn test_npy_round_trip_1d() -> Result<()> {
    let array = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).expect("shape matches");
    let decoded = decode_npy(&encode_npy(&array)?)?;
    assert_eq!(decoded.shape(), &[3]);
    assert_eq!(decoded, array);
    Ok(())
}

#[test]
fn test_decode_rejects_non_npy() {
    assert!(decode_npy(b"plain text").is_err());
}
