//! Output Rendering
//!
//! Human-readable lines on stdout, or one JSON object per line with
//! `--json`. Diagnostics go to stderr through `tracing`.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::RemovalReport;
use crate::config::ConfigWarning;
use crate::domain::ports::{TeardownEvent, TeardownSink};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Serialize any result as one JSON line on stdout
pub fn emit_value<T: Serialize>(event: &str, value: &T) -> io::Result<()> {
    let mut payload = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut payload {
        map.insert("event".to_string(), serde_json::Value::from(event));
        return emit(payload);
    }
    emit(serde_json::json!({ "event": event, "value": payload }))
}

/// Render a bulk removal as text lines
pub fn render_removal(out: &mut impl Write, kind: &str, report: &RemovalReport) -> io::Result<()> {
    for name in &report.removed {
        writeln!(out, "removed {} {}", kind, name)?;
    }
    for name in &report.not_found {
        writeln!(out, "no {} matching {}", kind, name)?;
    }
    for name in &report.failed {
        writeln!(out, "failed to remove {} {}", kind, name)?;
    }
    Ok(())
}

/// Print non-fatal configuration warnings to stderr
pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Teardown progress printed to stdout
pub struct ConsoleTeardownSink {
    format: OutputFormat,
}

impl ConsoleTeardownSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl TeardownSink for ConsoleTeardownSink {
    fn on_event(&self, event: &TeardownEvent) {
        let _ = match self.format {
            OutputFormat::Text => {
                let mut out = io::stdout().lock();
                write_teardown_line(&mut out, event)
            }
            OutputFormat::Json => emit(teardown_event_json(event)),
        };
    }
}

/// Text form of a teardown event; `Removing` and `Converged` are quiet
pub fn write_teardown_line(out: &mut impl Write, event: &TeardownEvent) -> io::Result<()> {
    match event {
        TeardownEvent::Removing { .. } | TeardownEvent::Converged { .. } => Ok(()),
        TeardownEvent::Elapsed { elapsed, budget } => writeln!(
            out,
            "Time elapsed: {} seconds out of {}.",
            elapsed, budget
        ),
        TeardownEvent::Finished { message } => writeln!(out, "{}", message),
    }
}

pub fn teardown_event_json(event: &TeardownEvent) -> serde_json::Value {
    match event {
        TeardownEvent::Removing { stack } => {
            serde_json::json!({ "event": "teardown_removing", "stack": stack })
        }
        TeardownEvent::Elapsed { elapsed, budget } => {
            serde_json::json!({ "event": "teardown_elapsed", "elapsed": elapsed, "budget": budget })
        }
        TeardownEvent::Converged { elapsed } => {
            serde_json::json!({ "event": "teardown_converged", "elapsed": elapsed })
        }
        TeardownEvent::Finished { message } => {
            serde_json::json!({ "event": "teardown_finished", "message": message })
        }
    }
}
