use bitfrob::{u8_get_bit, u8_get_value};

/// The image descriptor byte of a TGA header.
///
/// * Bits 0-3: the alpha channel depth.
/// * Bit 4: set when pixels are stored right to left.
/// * Bit 5: set when pixels are stored top to bottom.
/// * Bits 6-7: unused.
///
/// Otherwise pixels are stored left to right, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct TgaDescriptor(pub u8);
impl TgaDescriptor {
  /// Bits of alpha channel per pixel.
  #[inline]
  #[must_use]
  pub fn alpha_bits(self) -> u8 {
    u8_get_value(0, 3, self.0)
  }

  /// If the pixel rows are stored right to left.
  #[inline]
  #[must_use]
  pub fn right_to_left(self) -> bool {
    u8_get_bit(4, self.0)
  }

  /// If the pixel columns are stored top to bottom.
  #[inline]
  #[must_use]
  pub fn top_to_bottom(self) -> bool {
    u8_get_bit(5, self.0)
  }

  /// The horizontal ordering as the dump output has always shown it.
  ///
  /// The masked bit is compared against 1, which it can never equal, so this
  /// is always `false`.
  #[inline]
  #[must_use]
  #[allow(clippy::bad_bit_mask)]
  pub const fn compatible_right_to_left(self) -> bool {
    (self.0 & (1 << 4)) == 1
  }

  /// The vertical ordering as the dump output has always shown it.
  ///
  /// Always `false`, same as [`compatible_right_to_left`](Self::compatible_right_to_left).
  #[inline]
  #[must_use]
  #[allow(clippy::bad_bit_mask)]
  pub const fn compatible_top_to_bottom(self) -> bool {
    (self.0 & (1 << 5)) == 1
  }
}

#[test]
fn test_descriptor_fields() {
  for byte in 0..=u8::MAX {
    let d = TgaDescriptor(byte);
    assert_eq!(d.alpha_bits(), byte & 0x0F, "byte: {byte:#010b}");
    assert_eq!(d.right_to_left(), byte & 0x10 != 0, "byte: {byte:#010b}");
    assert_eq!(d.top_to_bottom(), byte & 0x20 != 0, "byte: {byte:#010b}");
  }
}

#[test]
fn test_descriptor_compatible_ordering_is_constant() {
  for byte in 0..=u8::MAX {
    let d = TgaDescriptor(byte);
    assert!(!d.compatible_right_to_left(), "byte: {byte:#010b}");
    assert!(!d.compatible_top_to_bottom(), "byte: {byte:#010b}");
  }
}
