//! Line-delimited JSON session between a browser host and the controller.
//!
//! Protocol: one [`HostEvent`] per input line, one [`HostResponse`] per
//! output line, strictly in order. A line that does not parse is answered
//! with `{"error": ...}` and the session keeps going. Blank lines are skipped.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::controller::{HostEvent, HostResponse, RedirectController};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("encoding response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Owns the controller for the lifetime of one host connection.
#[derive(Debug)]
pub struct Session {
    controller: RedirectController,
    handled: u64,
}

impl Session {
    pub fn new(controller: RedirectController) -> Self {
        Self {
            controller,
            handled: 0,
        }
    }

    pub fn controller(&self) -> &RedirectController {
        &self.controller
    }

    /// Number of events answered so far (including error answers).
    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Answer one input line. Returns `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let response = match serde_json::from_str::<HostEvent>(line) {
            Ok(event) => self.controller.handle(event),
            Err(e) => {
                tracing::warn!("malformed host event: {}", e);
                HostResponse::Error {
                    error: format!("malformed event: {e}"),
                }
            }
        };
        self.handled += 1;
        Ok(Some(serde_json::to_string(&response)?))
    }

    /// Serve until `reader` reaches EOF. Each answer is flushed before the
    /// next line is read.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<u64, SessionError> {
        for line in reader.lines() {
            if let Some(out) = self.handle_line(&line?)? {
                writeln!(writer, "{out}")?;
                writer.flush()?;
            }
        }
        tracing::debug!(handled = self.handled, "host session finished");
        Ok(self.handled)
    }
}
