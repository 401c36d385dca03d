//! Children command - reads one path out of every map in a list.

use std::process::ExitCode;

use mappath::doc::Value;

use super::{CommandError, fetch, load};
use crate::cli::ChildrenArgs;
use crate::output::{OutputFormat, format_table, render};

/// Run the children command
pub fn run(args: &ChildrenArgs, format: OutputFormat) -> Result<ExitCode, CommandError> {
    let doc = load(&args.source)?;
    let children = doc.get_children(&args.path, None)?;
    tracing::debug!(path = %args.path, count = children.len(), "iterating children");

    let values = children
        .iter()
        .map(|child| fetch(child, &args.subpath, args.target, None))
        .collect::<Result<Vec<Value>, _>>()?;

    match format {
        OutputFormat::Human => {
            if values.is_empty() {
                println!("No children found.");
                return Ok(ExitCode::SUCCESS);
            }

            let rows = values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    // Containers go on one line inside a table cell
                    let cell = match value {
                        Value::Map(_) | Value::List(_) => value.to_json_string(),
                        scalar => render(scalar, OutputFormat::Human)?,
                    };
                    Ok(vec![index.to_string(), cell])
                })
                .collect::<Result<Vec<_>, serde_json::Error>>()?;
            for line in format_table(&["INDEX", &args.subpath.to_uppercase()], &rows) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", render(&Value::List(values), OutputFormat::Json)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
