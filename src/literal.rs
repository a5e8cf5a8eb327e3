use serde_json::Value;

/// Formats an already-rendered reference as a source literal for the
/// embedding document.
///
/// Injected at the call site so the image type stays decoupled from any one
/// config dialect.
pub trait QuoteLiteral {
    fn quote(&self, raw: &str) -> String;
}

/// Quoting for JSON configs: a double-quoted, escaped string literal.
#[derive(Debug, Default)]
pub struct JsonQuoting;

impl QuoteLiteral for JsonQuoting {
    fn quote(&self, raw: &str) -> String {
        Value::String(raw.to_owned()).to_string()
    }
}
