#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::DocServiceArc;
use crate::domain::models::Event;
use crate::domain::models::SelectedFile;
use crate::domain::models::ServiceHealth;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /file (/f) [PATH] - Selects the PDF document to upload.
- /upload (/u) [PATH?] - Uploads the selected document to the DocChat service. When a PATH is given, it is selected first.
- /help (/h) - Lists the available commands.
- /quit /exit (/q) - Exit DocChat.

Anything else typed in the prompt is sent as a question about the uploaded document.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit DocChat.
        "#;

    return text.trim().to_string();
}

pub fn help_summary() -> String {
    return "Commands: /file PATH, /upload [PATH], /help, /quit. Scroll with Up/Down, CTRL+U/CTRL+D."
        .to_string();
}

async fn health_check(service: DocServiceArc, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    let mut health = ServiceHealth::Reachable;
    if let Err(err) = service.health_check().await {
        tracing::warn!(error = ?err, "DocChat service health check failed");
        health = ServiceHealth::Unreachable;
    }

    tx.send(Event::ServiceHealth(health))?;

    return Ok(());
}

async fn upload(
    service: DocServiceArc,
    tx: mpsc::UnboundedSender<Event>,
    file: SelectedFile,
) -> Result<()> {
    let res = service.upload(&file).await;
    if let Err(err) = &res {
        tracing::error!(kind = err.kind(), error = %err, name = file.name.as_str(), "Upload failed");
    }

    tx.send(Event::UploadResponse(res))?;

    return Ok(());
}

/// Answers questions one at a time, in the order they were asked.
async fn ask_worker(
    service: DocServiceArc,
    tx: mpsc::UnboundedSender<Event>,
    mut rx: mpsc::UnboundedReceiver<String>,
) -> Result<()> {
    while let Some(question) = rx.recv().await {
        let res = service.ask(&question).await;
        if let Err(err) = &res {
            tracing::error!(kind = err.kind(), error = %err, "Ask failed");
        }

        tx.send(Event::AskResponse(res))?;
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        service: DocServiceArc,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        tokio::spawn(health_check(service.clone(), tx.clone()));

        let (ask_tx, ask_rx) = mpsc::unbounded_channel::<String>();
        let worker: JoinHandle<Result<()>> =
            tokio::spawn(ask_worker(service.clone(), tx.clone(), ask_rx));

        while let Some(action) = rx.recv().await {
            match action {
                Action::Ask(question) => {
                    tracing::debug!(question = question.as_str(), "Queueing question");
                    ask_tx.send(question)?;
                }
                Action::Upload(file) => {
                    tracing::debug!(name = file.name.as_str(), "Starting upload");
                    tokio::spawn(upload(service.clone(), tx.clone(), file));
                }
            }
        }

        drop(ask_tx);
        worker.await??;

        return Ok(());
    }
}
