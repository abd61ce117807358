use tgdump::{
  tga::{tga_decode_header, tga_format_header, TgaHeader, TgaQuirks, TGA_HEADER_SIZE},
  TgaError,
};

const TRUE_COLOR_100X64: [u8; 18] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 0, 64, 0, 24, 0];

#[test]
fn test_random_buffers_never_fail_to_decode() {
  for _ in 0..64 {
    let v = super::rand_bytes(64);
    let header = tga_decode_header(&v).unwrap();
    assert_eq!(header.id_length, v[0]);
    assert_eq!(header.color_map_type, v[1]);
    assert_eq!(header.image_type.0, v[2]);
    assert_eq!(header.color_map.first_entry_index, u16::from(v[3]) | (u16::from(v[4]) << 8));
    assert_eq!(header.color_map.map_length, u16::from(v[5]) | (u16::from(v[6]) << 8));
    assert_eq!(header.color_map.map_entry_size, v[7]);
    assert_eq!(header.image.x_origin, u16::from(v[8]) | (u16::from(v[9]) << 8));
    assert_eq!(header.image.y_origin, u16::from(v[10]) | (u16::from(v[11]) << 8));
    assert_eq!(header.image.width, u16::from(v[12]) | (u16::from(v[13]) << 8));
    assert_eq!(header.image.height, u16::from(v[14]) | (u16::from(v[15]) << 8));
    assert_eq!(header.image.pixel_depth, v[16]);
    assert_eq!(header.image.descriptor.0, v[17]);
    // both output forms are total
    let _ = tga_format_header(&header, false);
    let _ = tga_format_header(&header, true);
  }
}

#[test]
fn test_random_short_buffers_are_rejected() {
  for len in 0..TGA_HEADER_SIZE {
    let v = super::rand_bytes(len);
    assert_eq!(tga_decode_header(&v), Err(TgaError::InsufficientData), "len: {len}");
  }
}

#[test]
fn test_true_color_short_output() {
  let header = tga_decode_header(&TRUE_COLOR_100X64).unwrap();
  assert_eq!(
    tga_format_header(&header, false),
    "Uncompressed true-color image, no colour map, 100x64"
  );
}

#[test]
fn test_true_color_verbose_output() {
  let header = tga_decode_header(&TRUE_COLOR_100X64).unwrap();
  let text = tga_format_header(&header, true);
  assert!(text.contains("Colour Map?         : NO"), "{text}");
  assert!(text.contains("Uncompressed true-color"), "{text}");
  let descriptor_line = text.lines().find(|l| l.contains("Descriptor")).unwrap();
  assert!(descriptor_line.ends_with("0bit alpha channel"), "{descriptor_line}");
}

#[test]
fn test_color_mapped_short_output() {
  let mut bytes = TRUE_COLOR_100X64;
  bytes[1] = 1;
  bytes[2] = 1;
  bytes[7] = 16;
  let header = tga_decode_header(&bytes).unwrap();
  let text = tga_format_header(&header, false);
  assert!(text.contains("16bit map"), "{text}");
  assert_eq!(text, "Uncompressed color-mapped image, 16bit map, 100x64");
}

#[test]
fn test_unknown_image_type() {
  let mut bytes = TRUE_COLOR_100X64;
  bytes[2] = 9;
  let header = tga_decode_header(&bytes).unwrap();
  assert_eq!(header.image_type.name(), "UNKNOWN !!");
  assert_eq!(tga_format_header(&header, false), "UNKNOWN !! image, no colour map, 100x64");
}

#[test]
fn test_descriptor_ordering_is_constant_unless_corrected() {
  for byte in 0..=u8::MAX {
    let mut bytes = TRUE_COLOR_100X64;
    bytes[17] = byte;
    let header = TgaHeader::from(bytes);
    let alpha = byte & 0x0F;

    let compatible = tga_format_header(&header, true);
    let expected = format!("Ordering: left to right, bottom to top, {alpha}bit alpha channel");
    assert!(compatible.ends_with(&expected), "byte: {byte:#010b}\n{compatible}");

    let corrected = header.display(true, TgaQuirks::Corrected).to_string();
    let h = if byte & 0x10 != 0 { "right to left" } else { "left to right" };
    let v = if byte & 0x20 != 0 { "top to bottom" } else { "bottom to top" };
    let expected = format!("Ordering: {h}, {v}, {alpha}bit alpha channel");
    assert!(corrected.ends_with(&expected), "byte: {byte:#010b}\n{corrected}");
  }
}

#[test]
fn test_header_bytes_round_trip() {
  let v = super::rand_bytes(TGA_HEADER_SIZE);
  let bytes: [u8; TGA_HEADER_SIZE] = v.as_slice().try_into().unwrap();
  let header = TgaHeader::from(bytes);
  assert_eq!(<[u8; TGA_HEADER_SIZE]>::from(header), bytes);
}
