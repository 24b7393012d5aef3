use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use serde_json::Value;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    /// 4-space-indented JSON.
    Pretty,
    /// Compact single-line JSON.
    Json,
    /// The payload bytes exactly as received.
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

pub fn print_document(value: &Value, payload: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Pretty => println!("{}", to_pretty(value)),
        OutputFormat::Json => println!("{value}"),
        OutputFormat::Raw => print_raw(payload),
    }
}

/// Render a document with 4-space indentation.
pub fn to_pretty(value: &Value) -> String {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    if serde::Serialize::serialize(value, &mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}
