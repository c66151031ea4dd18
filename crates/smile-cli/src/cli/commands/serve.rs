//! `smile serve` – host bridge: JSON-line events on stdin, answers on stdout.

use anyhow::Result;
use smile_core::config::SmileConfig;
use smile_core::controller::RedirectController;
use smile_core::session::Session;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn run_serve(cfg: &SmileConfig) -> Result<()> {
    let mut session = Session::new(RedirectController::from_config(cfg));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    tracing::info!(
        enabled = session.controller().is_enabled(),
        "serving host events on stdin"
    );
    // One event at a time: the answer is flushed before the next line is read.
    while let Some(line) = lines.next_line().await? {
        if let Some(out) = session.handle_line(&line)? {
            stdout.write_all(out.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    tracing::info!(handled = session.handled(), "host closed stdin");
    Ok(())
}
