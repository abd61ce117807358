//! The command line front end used by the `tgdump` binary.
//!
//! All file access happens here. The header itself is decoded and formatted
//! by [`crate::tga`].

use std::{
  borrow::ToOwned,
  format,
  fs::File,
  io::{Read, Write},
  path::{Path, PathBuf},
  string::String,
  vec::Vec,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn, Level};

use crate::tga::{tga_decode_header, TgaHeader, TgaQuirks, TGA_HEADER_SIZE};

/// Exit code for a successful dump.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when the file couldn't be dumped.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code clap uses for bad arguments.
pub const EXIT_USAGE: u8 = 2;

/// Languages that the header could be written out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
  /// A C/C++ header file.
  C,
  /// A Java source file.
  Java,
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tgdump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump header information from a TGA image file. The dump can optionally \
output the image and colour map data as a C/C++ header file.")]
pub struct Cli {
  /// Provide extra info
  #[arg(short, long)]
  pub verbose: bool,

  /// Output as language file
  #[arg(short = 'c', long)]
  pub output_code: bool,

  /// Language used by --output-code
  #[arg(long, value_enum, default_value_t = Language::C)]
  pub language: Language,

  /// Show the descriptor ordering bits and colour map presence as they
  /// actually are, instead of the way older versions printed them
  #[arg(long)]
  pub corrected: bool,

  /// Enable debug logging on stderr
  #[arg(short, long)]
  pub debug: bool,

  /// Full path and file name of TGA file
  pub input_file: PathBuf,
}
impl Cli {
  /// The header display quirks these arguments select.
  #[inline]
  #[must_use]
  pub fn quirks(&self) -> TgaQuirks {
    if self.corrected {
      TgaQuirks::Corrected
    } else {
      TgaQuirks::Compatible
    }
  }
}

/// Runs the whole program: parse `args`, dump the file, and give the exit
/// code.
///
/// The dump text is written to `out`. Logging and clap's own messages go to
/// stderr (or stdout for `--help` and `--version`).
pub fn run_cli<I, T>(args: I, out: &mut dyn Write) -> u8
where
  I: IntoIterator<Item = T>,
  T: Into<std::ffi::OsString> + Clone,
{
  let cli = match Cli::try_parse_from(args) {
    Ok(cli) => cli,
    Err(e) => {
      let code = u8::try_from(e.exit_code()).unwrap_or(EXIT_USAGE);
      // nothing more useful to do if the terminal is gone
      let _ = e.print();
      return code;
    }
  };
  init_logging(cli.debug);
  match dump(&cli, out) {
    Ok(code) => code,
    Err(e) => {
      warn!("{e:#}");
      EXIT_FAILURE
    }
  }
}

fn init_logging(debug: bool) {
  let level = if debug { Level::DEBUG } else { Level::WARN };
  // A subscriber might already be installed when this runs more than once in
  // a process (tests).
  let _ = tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

fn dump(cli: &Cli, out: &mut dyn Write) -> Result<u8> {
  let path = cli.input_file.as_path();
  let file_size = match std::fs::metadata(path) {
    Ok(metadata) => metadata.len(),
    Err(e) => {
      debug!(path = %path.display(), "can't get file metadata: {e}");
      0
    }
  };
  debug!(path = %path.display(), file_size, "checking file size");
  if file_size < TGA_HEADER_SIZE as u64 {
    writeln!(out, "File not big enough to contain TGA header")?;
    return Ok(EXIT_FAILURE);
  }

  if cli.output_code {
    warn!(language = ?cli.language, "code file output is not implemented, ignoring");
  }

  writeln!(out, "File: {}", path.display())?;
  match read_header(path) {
    Ok(header) => {
      writeln!(out, "{}", header.display(cli.verbose, cli.quirks()))?;
      Ok(EXIT_SUCCESS)
    }
    Err(e) => {
      debug!("{e:#}");
      writeln!(out, "Error reading header from file")?;
      Ok(EXIT_FAILURE)
    }
  }
}

/// Reads up to the first [`TGA_HEADER_SIZE`] bytes of the file and decodes
/// them.
pub fn read_header(path: &Path) -> Result<TgaHeader> {
  let file = File::open(path).with_context(|| format!("opening `{}`", path.display()))?;
  let mut bytes = Vec::with_capacity(TGA_HEADER_SIZE);
  file
    .take(TGA_HEADER_SIZE as u64)
    .read_to_end(&mut bytes)
    .with_context(|| format!("reading `{}`", path.display()))?;
  let header = tga_decode_header(&bytes)
    .with_context(|| format!("decoding the header of `{}`", path.display()))?;
  Ok(header)
}

#[test]
fn test_cli_parses_flags() {
  let cli = Cli::try_parse_from(["tgdump", "-v", "-c", "--language", "java", "a.tga"]).unwrap();
  assert!(cli.verbose);
  assert!(cli.output_code);
  assert_eq!(cli.language, Language::Java);
  assert_eq!(cli.quirks(), TgaQuirks::Compatible);
  assert_eq!(cli.input_file, PathBuf::from("a.tga"));

  let cli = Cli::try_parse_from(["tgdump", "--corrected", "b.tga"]).unwrap();
  assert!(!cli.verbose);
  assert_eq!(cli.language, Language::C);
  assert_eq!(cli.quirks(), TgaQuirks::Corrected);
}

#[test]
fn test_cli_requires_input_file() {
  assert!(Cli::try_parse_from(["tgdump", "-v"]).is_err());
}

#[test]
fn test_cli_command_name() {
  use clap::CommandFactory;
  assert_eq!(Cli::command().get_name(), "tgdump");
}
