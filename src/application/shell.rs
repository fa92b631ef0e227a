//! Interactive read-eval loop: one line of user text per turn, `>> ` prompt,
//! runs until stdin reaches EOF.

use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use super::agent::{Agent, AgentError};
use crate::domain::Conversation;
use crate::infrastructure::model::ModelProvider;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fatal(#[from] AgentError),
}

/// Recoverable turn failures are reported and the session continues; a fatal
/// agent error ends it.
pub async fn run<P>(agent: &Agent<P>, conversation: &mut Conversation) -> Result<(), ShellError>
where
    P: ModelProvider,
{
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = io::stdout();

    loop {
        stdout.write_all(b">> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("stdin closed, ending session");
            return Ok(());
        };
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }

        match agent.run_turn(conversation, prompt).await {
            Ok(reply) => {
                stdout.write_all(reply.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Err(err) if err.is_fatal() => {
                error!(%err, "Session aborted");
                return Err(err.into());
            }
            Err(err) => {
                error!(%err, "Turn failed");
                stdout.write_all(err.user_message().as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
    }
}
