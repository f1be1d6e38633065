//! Validation utilities for Fortran identifiers and source spans.

use f08gen_core::is_fortran_identifier;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "bindings.toml");
/// ctx.validate_name("send", "function")?;
///
/// let nested = ctx.push("send");
/// nested.validate_name("buf", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    /// Path segments for nested validation (e.g., ["send", "buf"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// The current path joined with dots.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Context description for error messages, e.g. "parameter in 'send'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Span of the section or string naming `name`, searched after the
    /// enclosing function's section header when there is one.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let offset = self
            .path
            .first()
            .and_then(|function| find_name_span(src, function, 0))
            .map_or(0, |span| span.offset());
        find_name_span(src, name, offset)
    }

    /// Validate that a name is a valid Fortran identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_error(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }
}

/// Find the span of a name in the TOML source at or after `from`.
///
/// Looks for `[functions.<name>]` style keys first, then for a quoted
/// string value, then for the bare name.
pub(crate) fn find_name_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;
    let patterns = [
        (format!(".{}]", name), 1),
        (format!(".{}.", name), 1),
        (format!("\"{}\"", name), 1),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = haystack.find(pattern.as_str()) {
            return Some(SourceSpan::from((from + pos + skip, name.len())));
        }
    }

    haystack
        .find(name)
        .map(|pos| SourceSpan::from((from + pos, name.len())))
}

/// Every span of `name = "<param>"` at or after `from`, skipping the same
/// string used as a `kind` or `count` value.
pub(crate) fn find_param_name_spans(src: &str, param: &str, from: usize) -> Vec<SourceSpan> {
    let Some(haystack) = src.get(from..) else {
        return Vec::new();
    };
    let pattern = format!("\"{}\"", param);
    haystack
        .match_indices(pattern.as_str())
        .filter(|(pos, _)| is_name_value(&haystack[..*pos]))
        .map(|(pos, _)| SourceSpan::from((from + pos + 1, param.len())))
        .collect()
}

/// Whether `before` ends with a `name =` key.
fn is_name_value(before: &str) -> bool {
    let Some(key) = before.trim_end().strip_suffix('=') else {
        return false;
    };
    let Some(rest) = key.trim_end().strip_suffix("name") else {
        return false;
    };
    !rest
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    if is_fortran_identifier(name) {
        return None;
    }
    let Some(first) = name.chars().next() else {
        return Some("name cannot be empty");
    };
    if !first.is_ascii_alphabetic() {
        return Some("name must start with a letter");
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, digits and underscores");
    }
    Some("name must be at most 63 characters long")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_errors() {
        assert_eq!(identifier_error("comm_rank"), None);
        assert_eq!(identifier_error("Send2"), None);
        assert_eq!(identifier_error(""), Some("name cannot be empty"));
        assert_eq!(identifier_error("_x"), Some("name must start with a letter"));
        assert_eq!(identifier_error("2nd"), Some("name must start with a letter"));
        assert_eq!(
            identifier_error("comm-rank"),
            Some("name must contain only letters, digits and underscores")
        );
        assert_eq!(
            identifier_error(&"a".repeat(64)),
            Some("name must be at most 63 characters long")
        );
    }

    #[test]
    fn test_find_name_span_section() {
        let src = "[functions.send]\nbigcount = true";
        let span = find_name_span(src, "send", 0).unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_name_span_quoted() {
        let src = r#"params = [{ kind = "COUNT", name = "count" }]"#;
        let span = find_name_span(src, "count", 0).unwrap();
        assert_eq!(span.offset(), 36);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_param_name_spans_skips_other_keys() {
        let src = r#"params = [
  { kind = "INT", name = "n" },
  { kind = "INT_ARRAY", name = "a", count = "n" },
  { kind = "INT", name="n" },
  { kind = "INT", fn_name = "n" },
]"#;
        let spans = find_param_name_spans(src, "n", 0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), src.find("\"n\"").unwrap() + 1);
        assert_eq!(&src[spans[1].offset() - 6..spans[1].offset() - 1], "name=");
    }

    #[test]
    fn test_parse_context_path() {
        let source = SourceContext::new("", "bindings.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("function"), "function");

        let nested = ctx.push("send");
        assert_eq!(nested.context_for("parameter"), "parameter in 'send'");
        assert_eq!(nested.push("buf").path_string(), "send.buf");
    }

    #[test]
    fn test_validate_name_span_is_scoped_to_function() {
        let src = "[functions.a]\nparams = [{ kind = \"INT\", name = \"x-1\" }]\n\
                   [functions.b]\nparams = [{ kind = \"INT\", name = \"x-1\" }]\n";
        let source = SourceContext::new(src, "bindings.toml");
        let ctx = ParseContext::new(&source).push("b");
        let err = ctx.validate_name("x-1", "parameter").unwrap_err();
        match *err {
            crate::Error::InvalidIdentifier { span, .. } => {
                let offset = span.unwrap().offset();
                assert!(offset > src.find("[functions.b]").unwrap());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
