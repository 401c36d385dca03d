//! Subcommand implementations.

pub mod children;
pub mod get;
pub mod has;

use mappath::{
    Doc,
    doc::{AccessError, FromValue, Map, Value},
};

use crate::cli::{SourceArgs, Target};

/// Failure of a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Bad input on the command line that clap could not catch
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Mappath(#[from] mappath::Error),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<AccessError> for CommandError {
    fn from(err: AccessError) -> Self {
        CommandError::Mappath(err.into())
    }
}

impl CommandError {
    /// Short name for the kind of failure, printed in front of the message
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Usage(_) => "usage",
            CommandError::Output(_) => "output",
            CommandError::Mappath(err) => match err.as_access_error() {
                Some(access) if access.is_not_found() => "not found",
                Some(access) if access.is_type_error() => "invalid type",
                Some(access) if access.is_unsupported() => "unsupported type",
                Some(_) => "access",
                None if err.is_io_error() => "io",
                None => "decode",
            },
        }
    }
}

/// Loads the document named on the command line
pub fn load(source: &SourceArgs) -> Result<Doc, CommandError> {
    let format = source.format.resolve().map_err(CommandError::Usage)?;
    let doc = match format {
        Some(format) => Doc::from_file_as(&source.file, format)?,
        None => Doc::from_file(&source.file)?,
    };
    Ok(doc)
}

/// Reads `path` from `doc`, converted according to `target`.
///
/// Without a target the raw value is returned. `default` is parsed into the
/// target type and used only when the path does not exist.
pub fn fetch(
    doc: &Doc,
    path: &str,
    target: Option<Target>,
    default: Option<&str>,
) -> Result<Value, CommandError> {
    let Some(target) = target else {
        return Ok(doc.lookup(path)?.clone());
    };
    match target {
        Target::Bool => scalar::<bool>(doc, path, default),
        Target::Int => scalar::<i64>(doc, path, default),
        Target::Float => scalar::<f64>(doc, path, default),
        Target::String => scalar::<String>(doc, path, default),
        Target::Map => structured::<Map>(doc, path, default),
        Target::List => structured::<Vec<Value>>(doc, path, default),
        Target::Bools => list::<bool>(doc, path, default),
        Target::Ints => list::<i64>(doc, path, default),
        Target::Floats => list::<f64>(doc, path, default),
        Target::Strings => list::<String>(doc, path, default),
        Target::Maps => list::<Map>(doc, path, default),
    }
}

fn scalar<T>(doc: &Doc, path: &str, default: Option<&str>) -> Result<Value, CommandError>
where
    T: FromValue + Into<Value>,
{
    let fallback = default
        .map(|raw| {
            T::from_value(&Value::from(raw)).map_err(|err| invalid_default(raw, &err))
        })
        .transpose()?;
    Ok(doc.get_as::<T>(path, fallback)?.into())
}

fn structured<T>(doc: &Doc, path: &str, default: Option<&str>) -> Result<Value, CommandError>
where
    T: FromValue + Into<Value>,
{
    let fallback = default
        .map(|raw| {
            let decoded = parse_json(raw)?;
            T::from_value(&decoded).map_err(|err| invalid_default(raw, &err))
        })
        .transpose()?;
    Ok(doc.get_as::<T>(path, fallback)?.into())
}

fn list<T>(doc: &Doc, path: &str, default: Option<&str>) -> Result<Value, CommandError>
where
    T: FromValue + Into<Value>,
{
    let fallback = default
        .map(|raw| {
            // Run the decoded default through the same element conversion
            let holder = Doc::new().with("default", parse_json(raw)?);
            holder
                .get_list::<T>("default", None)
                .map_err(|err| invalid_default(raw, &err))
        })
        .transpose()?;
    Ok(doc.get_list::<T>(path, fallback)?.into())
}

fn parse_json(raw: &str) -> Result<Value, CommandError> {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .map_err(|err| invalid_default(raw, &err))
}

fn invalid_default(raw: &str, reason: &dyn std::fmt::Display) -> CommandError {
    CommandError::Usage(format!("invalid --default value '{raw}': {reason}"))
}
