//! Has command - reports whether a path exists.

use std::process::ExitCode;

use super::{CommandError, load};
use crate::cli::HasArgs;
use crate::output::OutputFormat;

/// Run the has command
pub fn run(args: &HasArgs, format: OutputFormat) -> Result<ExitCode, CommandError> {
    let doc = load(&args.source)?;
    let found = doc.has(&args.path);

    match format {
        OutputFormat::Human => println!("{found}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": args.path,
                "exists": found,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
