#![forbid(unsafe_code)]

//! Module for Truevision TGA files.
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in TGA are always little-endian encoded.
//!
//! * A TGA file always starts with an 18 byte header:
//!   * The length of the image ID field that follows the header.
//!   * The color map type. 0 means there's no color map, 1 means there is one.
//!     Other values aren't given any meaning here.
//!   * The image type, see [`TgaImageType`].
//!   * The color map specification (5 bytes): the first entry index, the
//!     number of entries, and the bits per entry.
//!   * The image specification (10 bytes): x and y origin, width, height,
//!     bits per pixel, and the image descriptor byte (see [`TgaDescriptor`]).
//! * Next there **might** be the image ID field, the color map, and the image
//!   data. None of that is decoded by this crate.
//!
//! Decoding never validates the field values. Any `u8` or `u16` is accepted
//! as-is, and only a buffer shorter than the header is an error.

use crate::{parser_helpers::*, TgaError};

mod raw_header;
pub(crate) use raw_header::*;

mod header;
pub use header::*;

mod image_type;
pub use image_type::*;

mod descriptor;
pub use descriptor::*;

mod display;
pub use display::*;
