//! Human readable text for a TGA header.

use super::*;
use core::fmt::{Display, Formatter, Result as FmtResult};

const SEPARATOR: &str = "----------------------------------------------------";

/// Selects how a few questionable fields of the header get shown.
///
/// The dump output has always had two odd behaviors, and by default they're
/// kept so that output stays the same:
/// * The descriptor's ordering bits are never reported as set, so every image
///   shows as "left to right, bottom to top".
/// * The verbose output says there's a colour map whenever the color map type
///   isn't 0, but the short output only shows the map when the type is
///   exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TgaQuirks {
  /// Keep the output exactly as it has always been.
  #[default]
  Compatible,
  /// Report the ordering bits as they actually are, and only count a color
  /// map type of 1 as having a color map.
  Corrected,
}
impl TgaQuirks {
  #[inline]
  #[must_use]
  const fn verbose_has_color_map(self, color_map_type: u8) -> bool {
    match self {
      Self::Compatible => color_map_type != 0,
      Self::Corrected => color_map_type == 1,
    }
  }

  #[inline]
  #[must_use]
  fn orderings(self, d: TgaDescriptor) -> (bool, bool) {
    match self {
      Self::Compatible => (d.compatible_right_to_left(), d.compatible_top_to_bottom()),
      Self::Corrected => (d.right_to_left(), d.top_to_bottom()),
    }
  }
}

impl TgaHeader {
  /// Gets a value that displays the header as text.
  ///
  /// * Short: `Uncompressed true-color image, no colour map, 100x64`
  /// * Verbose: a multi-line block with every field of the header.
  #[inline]
  #[must_use]
  pub const fn display(&self, verbose: bool, quirks: TgaQuirks) -> TgaHeaderDisplay {
    TgaHeaderDisplay { header: *self, verbose, quirks }
  }
}
impl TgaColorMapSpec {
  /// Gets a value that displays the three color map lines.
  #[inline]
  #[must_use]
  pub const fn display(&self) -> TgaColorMapDisplay {
    TgaColorMapDisplay(*self)
  }
}
impl TgaImageSpec {
  /// Gets a value that displays the six image specification lines.
  #[inline]
  #[must_use]
  pub const fn display(&self, quirks: TgaQuirks) -> TgaImageSpecDisplay {
    TgaImageSpecDisplay { spec: *self, quirks }
  }
}
impl TgaDescriptor {
  /// Gets a value that displays the descriptor's ordering and alpha depth.
  #[inline]
  #[must_use]
  pub const fn display(self, quirks: TgaQuirks) -> TgaDescriptorDisplay {
    TgaDescriptorDisplay { descriptor: self, quirks }
  }
}

/// Displays a [`TgaHeader`], see [`TgaHeader::display`].
#[derive(Debug, Clone, Copy)]
pub struct TgaHeaderDisplay {
  header: TgaHeader,
  verbose: bool,
  quirks: TgaQuirks,
}
impl Display for TgaHeaderDisplay {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let TgaHeader { id_length, color_map_type, image_type, color_map, image } = self.header;
    if self.verbose {
      let yes_no =
        if self.quirks.verbose_has_color_map(color_map_type) { "YES" } else { "NO" };
      writeln!(f, "Header")?;
      writeln!(f, "{SEPARATOR}")?;
      writeln!(f, "ID Field Length     : {id_length}")?;
      writeln!(f, "Colour Map?         : {yes_no}")?;
      writeln!(f, "Image Type          : {image_type}")?;
      writeln!(f, "Colour Map          :")?;
      writeln!(f, "{}", color_map.display())?;
      writeln!(f, "Image Specification :")?;
      write!(f, "{}", image.display(self.quirks))
    } else if color_map_type == 1 {
      write!(
        f,
        "{image_type} image, {}bit map, {}x{}",
        color_map.map_entry_size, image.width, image.height
      )
    } else {
      write!(f, "{image_type} image, no colour map, {}x{}", image.width, image.height)
    }
  }
}

/// Displays a [`TgaColorMapSpec`], see [`TgaColorMapSpec::display`].
#[derive(Debug, Clone, Copy)]
pub struct TgaColorMapDisplay(TgaColorMapSpec);
impl Display for TgaColorMapDisplay {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let TgaColorMapSpec { first_entry_index, map_length, map_entry_size } = self.0;
    writeln!(f, "\tFirst Entry   : {first_entry_index}")?;
    writeln!(f, "\tMap Length    : {map_length}")?;
    write!(f, "\tEntry Size    : {map_entry_size}bit")
  }
}

/// Displays a [`TgaImageSpec`], see [`TgaImageSpec::display`].
#[derive(Debug, Clone, Copy)]
pub struct TgaImageSpecDisplay {
  spec: TgaImageSpec,
  quirks: TgaQuirks,
}
impl Display for TgaImageSpecDisplay {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let TgaImageSpec { x_origin, y_origin, width, height, pixel_depth, descriptor } = self.spec;
    writeln!(f, "\tX Origin      : {x_origin}")?;
    writeln!(f, "\tY Origin      : {y_origin}")?;
    writeln!(f, "\tWidth         : {width}")?;
    writeln!(f, "\tHeight        : {height}")?;
    writeln!(f, "\tPixel Depth   : {pixel_depth}")?;
    write!(f, "\tDescriptor    : {}", descriptor.display(self.quirks))
  }
}

/// Displays a [`TgaDescriptor`], see [`TgaDescriptor::display`].
#[derive(Debug, Clone, Copy)]
pub struct TgaDescriptorDisplay {
  descriptor: TgaDescriptor,
  quirks: TgaQuirks,
}
impl Display for TgaDescriptorDisplay {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let (right_to_left, top_to_bottom) = self.quirks.orderings(self.descriptor);
    let horizontal = if right_to_left { "right to left" } else { "left to right" };
    let vertical = if top_to_bottom { "top to bottom" } else { "bottom to top" };
    write!(
      f,
      "Ordering: {horizontal}, {vertical}, {}bit alpha channel",
      self.descriptor.alpha_bits()
    )
  }
}

/// Formats the header as text, the same way the dump output always has.
///
/// This is [`TgaHeader::display`] with [`TgaQuirks::Compatible`].
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
#[inline]
#[must_use]
pub fn tga_format_header(header: &TgaHeader, verbose: bool) -> alloc::string::String {
  use alloc::string::ToString;
  header.display(verbose, TgaQuirks::Compatible).to_string()
}
