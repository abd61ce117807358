//! The header exactly as it sits in the file.

use pack1::*;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct TgaRawHeader {
  pub id_length: u8,
  pub color_map_type: u8,
  pub image_type: u8,
  pub first_entry_index: U16LE,
  pub color_map_length: U16LE,
  pub color_map_entry_size: u8,
  pub x_origin: U16LE,
  pub y_origin: U16LE,
  pub width: U16LE,
  pub height: U16LE,
  pub pixel_depth: u8,
  pub image_descriptor: u8,
}
const _: () = assert!(core::mem::size_of::<TgaRawHeader>() == 18);
