#![cfg(feature = "cli")]

use std::io::Write;

use tempfile::NamedTempFile;
use tgdump::cli::{run_cli, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};

const TRUE_COLOR_100X64: [u8; 18] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 0, 64, 0, 24, 0];

fn temp_file_with(bytes: &[u8]) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(bytes).unwrap();
  file.flush().unwrap();
  file
}

fn run(args: &[&str]) -> (u8, String) {
  let mut out = Vec::new();
  let code = run_cli(args.iter().copied(), &mut out);
  (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_cli_dumps_short_header() {
  let file = temp_file_with(&TRUE_COLOR_100X64);
  let path = file.path().to_str().unwrap();
  let (code, out) = run(&["tgdump", path]);
  assert_eq!(code, EXIT_SUCCESS);
  assert_eq!(
    out,
    format!("File: {path}\nUncompressed true-color image, no colour map, 100x64\n")
  );
}

#[test]
fn test_cli_dumps_verbose_header() {
  let mut bytes = TRUE_COLOR_100X64.to_vec();
  // pixel data after the header is ignored
  bytes.extend_from_slice(&[0xFF; 100 * 3]);
  let file = temp_file_with(&bytes);
  let path = file.path().to_str().unwrap();
  let (code, out) = run(&["tgdump", "--verbose", path]);
  assert_eq!(code, EXIT_SUCCESS);
  assert!(out.starts_with(&format!("File: {path}\nHeader\n")), "{out}");
  assert!(out.contains("Colour Map?         : NO\n"), "{out}");
  assert!(out.ends_with("bottom to top, 0bit alpha channel\n"), "{out}");
}

#[test]
fn test_cli_corrected_ordering() {
  let mut bytes = TRUE_COLOR_100X64;
  bytes[17] = 0x28;
  let file = temp_file_with(&bytes);
  let path = file.path().to_str().unwrap();
  let (_, compatible) = run(&["tgdump", "-v", path]);
  assert!(compatible.contains("Ordering: left to right, bottom to top, 8bit"), "{compatible}");
  let (code, corrected) = run(&["tgdump", "-v", "--corrected", path]);
  assert_eq!(code, EXIT_SUCCESS);
  assert!(corrected.contains("Ordering: left to right, top to bottom, 8bit"), "{corrected}");
}

#[test]
fn test_cli_rejects_small_file() {
  let file = temp_file_with(&TRUE_COLOR_100X64[..17]);
  let path = file.path().to_str().unwrap();
  let (code, out) = run(&["tgdump", path]);
  assert_eq!(code, EXIT_FAILURE);
  assert_eq!(out, "File not big enough to contain TGA header\n");
}

#[test]
fn test_cli_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing.tga");
  let (code, out) = run(&["tgdump", path.to_str().unwrap()]);
  assert_eq!(code, EXIT_FAILURE);
  assert_eq!(out, "File not big enough to contain TGA header\n");
}

#[test]
fn test_cli_unreadable_file() {
  // a directory passes the size check but can't be read as a file
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().to_str().unwrap();
  let (code, out) = run(&["tgdump", path]);
  assert_eq!(code, EXIT_FAILURE);
  assert_eq!(out, format!("File: {path}\nError reading header from file\n"));
}

#[test]
fn test_cli_output_code_is_accepted() {
  let file = temp_file_with(&TRUE_COLOR_100X64);
  let path = file.path().to_str().unwrap();
  let (code, out) = run(&["tgdump", "-c", "--language", "java", path]);
  assert_eq!(code, EXIT_SUCCESS);
  assert!(out.ends_with("no colour map, 100x64\n"), "{out}");
}

#[test]
fn test_cli_bad_arguments() {
  let (code, out) = run(&["tgdump", "--no-such-flag", "a.tga"]);
  assert_eq!(code, EXIT_USAGE);
  assert!(out.is_empty());
}
