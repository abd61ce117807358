/// The image type byte of a TGA header.
///
/// Codes 0 through 6 have a known meaning (see the associated constants).
/// Any other byte is still a valid value of this type, it just doesn't have a
/// name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct TgaImageType(pub u8);
#[allow(missing_docs)]
impl TgaImageType {
  pub const NO_IMAGE_DATA: Self = Self(0);
  pub const UNCOMPRESSED_COLOR_MAPPED: Self = Self(1);
  pub const UNCOMPRESSED_TRUE_COLOR: Self = Self(2);
  pub const UNCOMPRESSED_GRAYSCALE: Self = Self(3);
  pub const RLE_COLOR_MAPPED: Self = Self(4);
  pub const RLE_TRUE_COLOR: Self = Self(5);
  pub const RLE_GRAYSCALE: Self = Self(6);
}
impl TgaImageType {
  /// The human readable name of this image type.
  ///
  /// Unknown codes all get the name `"UNKNOWN !!"`.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::NO_IMAGE_DATA => "No image data",
      Self::UNCOMPRESSED_COLOR_MAPPED => "Uncompressed color-mapped",
      Self::UNCOMPRESSED_TRUE_COLOR => "Uncompressed true-color",
      Self::UNCOMPRESSED_GRAYSCALE => "Uncompressed black-and-white (grayscale)",
      Self::RLE_COLOR_MAPPED => "Run-length encoded color-mapped",
      Self::RLE_TRUE_COLOR => "Run-length encoded true-color",
      Self::RLE_GRAYSCALE => "Run-length encoded black-and-white (grayscale)",
      _ => "UNKNOWN !!",
    }
  }
}
impl core::fmt::Debug for TgaImageType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      TgaImageType::NO_IMAGE_DATA => write!(f, "NoImageData"),
      TgaImageType::UNCOMPRESSED_COLOR_MAPPED => write!(f, "UncompressedColorMapped"),
      TgaImageType::UNCOMPRESSED_TRUE_COLOR => write!(f, "UncompressedTrueColor"),
      TgaImageType::UNCOMPRESSED_GRAYSCALE => write!(f, "UncompressedGrayscale"),
      TgaImageType::RLE_COLOR_MAPPED => write!(f, "RleColorMapped"),
      TgaImageType::RLE_TRUE_COLOR => write!(f, "RleTrueColor"),
      TgaImageType::RLE_GRAYSCALE => write!(f, "RleGrayscale"),
      TgaImageType(other) => write!(f, "TgaImageType({other})"),
    }
  }
}
impl core::fmt::Display for TgaImageType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

#[test]
fn test_image_type_names() {
  let expected = [
    "No image data",
    "Uncompressed color-mapped",
    "Uncompressed true-color",
    "Uncompressed black-and-white (grayscale)",
    "Run-length encoded color-mapped",
    "Run-length encoded true-color",
    "Run-length encoded black-and-white (grayscale)",
  ];
  for code in 0..=u8::MAX {
    let name = TgaImageType(code).name();
    match expected.get(usize::from(code)) {
      Some(ex) => assert_eq!(name, *ex, "code: {code}"),
      None => assert_eq!(name, "UNKNOWN !!", "code: {code}"),
    }
  }
}
