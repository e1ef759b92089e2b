//! embed_header - write a binary file out as a C header
//!
//! Usage: embed_header <input> <output> <name>

use std::error::Error as _;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use embed_header::log::{self, LogLevel};
use embed_header::{log_debug, EmbedConfig};

/// Every argv string is taken as given; only the count is checked.
#[derive(Parser, Debug)]
#[command(name = "embed_header")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// <input> <output> <name>
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn usage() -> ExitCode {
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("embed_header"));
    println!("Usage: {} <input> <output> <name>", program.to_string_lossy());
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let Ok(cli) = Cli::try_parse() else {
        return usage();
    };
    let Ok([input, output, name]) = <[OsString; 3]>::try_from(cli.args) else {
        return usage();
    };

    log::init(LogLevel::Warn);

    let config = EmbedConfig::new(PathBuf::from(input), PathBuf::from(output), name);
    match config.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(cause) = err.source() {
                log_debug!("main", "{}: {}", err, cause);
            }
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
