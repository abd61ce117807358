use crate::TgaError;

#[inline]
pub(crate) fn try_pull_byte_array<const N: usize>(
  bytes: &[u8],
) -> Result<([u8; N], &[u8]), TgaError> {
  match bytes.split_first_chunk::<N>() {
    Some((head, tail)) => Ok((*head, tail)),
    None => Err(TgaError::InsufficientData),
  }
}

#[test]
fn test_try_pull_byte_array_respects_length() {
  let bytes = [1_u8, 2, 3];
  assert_eq!(try_pull_byte_array::<2>(&bytes), Ok(([1, 2], &bytes[2..])));
  assert_eq!(try_pull_byte_array::<3>(&bytes), Ok(([1, 2, 3], &bytes[3..])));
  assert_eq!(try_pull_byte_array::<4>(&bytes), Err(TgaError::InsufficientData));
  assert_eq!(try_pull_byte_array::<0>(&[]), Ok(([], &[][..])));
}
