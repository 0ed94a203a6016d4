//! REPL Module
//!
//! The interactive command loop.
//!
//! # Commands
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the Pokemon in an area
//! - `catch <pokemon>` / `inspect <pokemon>` / `pokedex` - Manage caught Pokemon
//! - `cache` - Response cache statistics
//! - `help` / `exit`

pub mod command;
pub mod session;

pub use command::{Command, COMMANDS};
pub use session::{Reply, Session};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// Reads commands from `input` until `exit`, end of input, or `shutdown`.
///
/// A failing command prints a one-line `Error:` diagnostic and the loop keeps
/// prompting. Only I/O errors on `input` or `output` end the loop early.
/// Cancelling `shutdown` abandons a pending read, so the loop returns even
/// while `input` stays open.
pub async fn run<R, W>(
    session: &mut Session,
    input: R,
    mut output: W,
    shutdown: &CancellationToken,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let next = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Input abandoned on shutdown");
                None
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = next else {
            output.write_all(b"\n").await?;
            break;
        };

        match session.handle_line(&line).await {
            Ok(reply) => {
                if !reply.output.is_empty() {
                    output.write_all(reply.output.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                if reply.exit {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                output.write_all(format!("Error: {}\n", e).as_bytes()).await?;
            }
        }
    }

    output.flush().await
}
