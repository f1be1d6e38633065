//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use super::Manifest;
use crate::{
    Error, Result,
    error::SourceContext,
    validate::{ParseContext, find_name_span, find_param_name_spans},
};

/// Default filename used in error reports.
pub const DEFAULT_FILENAME: &str = "bindings.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a bindings.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    Ok(manifest)
}

/// Validate names, parameter uniqueness and option values.
fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    for (name, function) in &manifest.functions {
        ctx.validate_name(name, "function")?;
        let fn_ctx = ctx.push(name);
        let section = find_name_span(source.src(), name, 0).map_or(0, |s| s.offset());

        let mut seen: HashSet<&str> = HashSet::new();
        for param in &function.params {
            fn_ctx.validate_name(&param.name, "parameter")?;

            if !seen.insert(param.name.as_str()) {
                let spans = find_param_name_spans(source.src(), &param.name, section);
                return Err(source.duplicate_param_error(
                    name,
                    &param.name,
                    spans.first().copied(),
                    spans.get(1).copied(),
                ));
            }

            if param.kind.trim().is_empty() {
                return Err(source.validation_error(
                    format!("parameter '{}' of '{}' has an empty kind", param.name, name),
                    fn_ctx.find_span(&param.name),
                ));
            }

            if matches!(param.count.as_deref(), Some(count) if count.trim().is_empty()) {
                return Err(source.validation_error(
                    format!("parameter '{}' of '{}' has an empty count", param.name, name),
                    fn_ctx.find_span(&param.name),
                ));
            }

            for (key, value) in &param.options {
                if !matches!(
                    value,
                    toml::Value::String(_) | toml::Value::Boolean(_) | toml::Value::Integer(_)
                ) {
                    return Err(source.validation_error(
                        format!(
                            "option '{}' of parameter '{}' must be a string, boolean or integer",
                            key, param.name
                        ),
                        fn_ctx.find_span(key),
                    ));
                }
            }
        }
    }
    Ok(())
}
