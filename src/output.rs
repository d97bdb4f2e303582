// ABOUTME: Output formatting for CLI feedback and report lines.
// ABOUTME: Supports human-readable and JSON output modes.

use crate::error::Result;
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain report lines
    Normal,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration_secs(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Write a rendered report.
    ///
    /// Normal mode prints one line per entry. JSON mode prints a single event
    /// carrying both the lines and the structured `data` they were rendered from;
    /// nothing is printed if `data` fails to serialize.
    pub fn report<T: Serialize>(&self, lines: &[String], data: &T) -> Result<()> {
        match self.mode {
            OutputMode::Normal => {
                for line in lines {
                    println!("{line}");
                }
            }
            OutputMode::Json => {
                let event = ReportEvent {
                    event: "report",
                    lines,
                    data,
                    duration_secs: self.duration_secs(),
                };
                let json = serde_json::to_string(&event)?;
                println!("{json}");
            }
        }
        Ok(())
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration_secs(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct ReportEvent<'a, T: Serialize> {
    event: &'a str,
    lines: &'a [String],
    data: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
