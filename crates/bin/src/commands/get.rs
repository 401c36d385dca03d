//! Get command - prints the value at a path.

use std::process::ExitCode;

use super::{CommandError, fetch, load};
use crate::cli::GetArgs;
use crate::output::{OutputFormat, render};

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<ExitCode, CommandError> {
    let doc = load(&args.source)?;
    let value = fetch(&doc, &args.path, args.target, args.default.as_deref())?;
    println!("{}", render(&value, format)?);
    Ok(ExitCode::SUCCESS)
}
