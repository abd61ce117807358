#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for reading the header of Truevision TGA image files.
//!
//! The core of the crate is [`tga`]: decode the fixed 18 byte header with
//! [`tga::tga_decode_header`], then print it with
//! [`TgaHeader::display`](tga::TgaHeader::display). Nothing past the header
//! is decoded.
//!
//! With the `cli` feature there's also the `tgdump` binary, see [`cli`].

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod parser_helpers;

pub mod tga;

#[cfg(feature = "cli")]
#[cfg_attr(docs_rs, doc(cfg(feature = "cli")))]
pub mod cli;
