use super::*;

/// The size of a TGA header in bytes.
pub const TGA_HEADER_SIZE: usize = 18;

/// The color map specification part of a TGA header.
///
/// This is always filled in from the header bytes, even when the header says
/// that there's no color map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TgaColorMapSpec {
  /// Index of the first color map entry.
  pub first_entry_index: u16,

  /// Number of entries in the color map.
  pub map_length: u16,

  /// Bits per color map entry, usually 15, 16, 24, or 32.
  pub map_entry_size: u8,
}

/// The image specification part of a TGA header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TgaImageSpec {
  /// Horizontal screen position of the lower left corner.
  pub x_origin: u16,
  /// Vertical screen position of the lower left corner.
  pub y_origin: u16,
  /// Image width in pixels.
  pub width: u16,
  /// Image height in pixels.
  pub height: u16,
  /// Bits per pixel.
  pub pixel_depth: u8,
  /// Alpha depth and pixel ordering.
  pub descriptor: TgaDescriptor,
}

/// The 18 byte header at the start of all TGA files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TgaHeader {
  /// Length of the image ID field that follows the header.
  ///
  /// The ID field itself isn't read.
  pub id_length: u8,

  /// 0 for no color map, 1 for a color map.
  ///
  /// Other values are kept as-is.
  pub color_map_type: u8,

  /// The kind of image data in the file.
  pub image_type: TgaImageType,

  #[allow(missing_docs)]
  pub color_map: TgaColorMapSpec,

  #[allow(missing_docs)]
  pub image: TgaImageSpec,
}
impl From<TgaRawHeader> for TgaHeader {
  #[inline]
  fn from(raw: TgaRawHeader) -> Self {
    Self {
      id_length: raw.id_length,
      color_map_type: raw.color_map_type,
      image_type: TgaImageType(raw.image_type),
      color_map: TgaColorMapSpec {
        first_entry_index: raw.first_entry_index.get(),
        map_length: raw.color_map_length.get(),
        map_entry_size: raw.color_map_entry_size,
      },
      image: TgaImageSpec {
        x_origin: raw.x_origin.get(),
        y_origin: raw.y_origin.get(),
        width: raw.width.get(),
        height: raw.height.get(),
        pixel_depth: raw.pixel_depth,
        descriptor: TgaDescriptor(raw.image_descriptor),
      },
    }
  }
}
impl From<[u8; TGA_HEADER_SIZE]> for TgaHeader {
  #[inline]
  fn from(value: [u8; TGA_HEADER_SIZE]) -> Self {
    Self::from(bytemuck::cast::<_, TgaRawHeader>(value))
  }
}
impl From<TgaHeader> for [u8; TGA_HEADER_SIZE] {
  #[inline]
  fn from(h: TgaHeader) -> Self {
    let mut a = [0; TGA_HEADER_SIZE];
    a[0] = h.id_length;
    a[1] = h.color_map_type;
    a[2] = h.image_type.0;
    a[3..5].copy_from_slice(h.color_map.first_entry_index.to_le_bytes().as_slice());
    a[5..7].copy_from_slice(h.color_map.map_length.to_le_bytes().as_slice());
    a[7] = h.color_map.map_entry_size;
    a[8..10].copy_from_slice(h.image.x_origin.to_le_bytes().as_slice());
    a[10..12].copy_from_slice(h.image.y_origin.to_le_bytes().as_slice());
    a[12..14].copy_from_slice(h.image.width.to_le_bytes().as_slice());
    a[14..16].copy_from_slice(h.image.height.to_le_bytes().as_slice());
    a[16] = h.image.pixel_depth;
    a[17] = h.image.descriptor.0;
    a
  }
}
impl TgaHeader {
  /// Tries to get the header and remaining bytes from the bytes of a TGA
  /// file.
  ///
  /// The remaining bytes start with the image ID field (if any).
  ///
  /// ## Failure
  /// * [`TgaError::InsufficientData`] if there's less than
  ///   [`TGA_HEADER_SIZE`] bytes.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), TgaError> {
    let (a, rest) = try_pull_byte_array::<TGA_HEADER_SIZE>(bytes)?;
    let header = Self::from(a);
    tracing::trace!(?header, trailing_bytes = rest.len(), "decoded TGA header");
    Ok((header, rest))
  }
}

/// Decodes the header at the start of the bytes of a TGA file.
///
/// Only the first [`TGA_HEADER_SIZE`] bytes are looked at. The values are
/// never checked for being sensible.
#[inline]
pub fn tga_decode_header(bytes: &[u8]) -> Result<TgaHeader, TgaError> {
  TgaHeader::try_from_bytes(bytes).map(|(header, _rest)| header)
}
