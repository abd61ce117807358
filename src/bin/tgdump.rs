use std::process::ExitCode;

fn main() -> ExitCode {
  let stdout = std::io::stdout();
  let code = tgdump::cli::run_cli(std::env::args_os(), &mut stdout.lock());
  ExitCode::from(code)
}
