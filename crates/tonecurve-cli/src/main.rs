use std::process::ExitCode;

use tonecurve_cli::{arg_error_message, cmd_transform, exit_code_for, init_logging, Cli};

use clap::Parser;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = exit_code_for(&err);
            if code == 0 {
                let _ = err.print();
            } else {
                eprint!("{}", arg_error_message(&err));
            }
            return ExitCode::from(code as u8);
        }
    };

    init_logging(cli.verbose);

    match cmd_transform(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
