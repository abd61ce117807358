/// An error from the `tgdump` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TgaError {
  /// Fewer than the 18 bytes of a TGA header were given.
  InsufficientData,
}
impl core::fmt::Display for TgaError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      TgaError::InsufficientData => write!(f, "insufficient data for a TGA header"),
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for TgaError {}
