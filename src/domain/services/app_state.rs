#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_summary;
use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::BusyMode;
use crate::domain::models::PendingRequests;
use crate::domain::models::RequestKind;
use crate::domain::models::SelectedFile;
use crate::domain::models::Sender;
use crate::domain::models::ServiceError;
use crate::domain::models::ServiceHealth;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::models::Transcript;
use crate::domain::models::UploadStatus;
use crate::domain::models::ASK_FALLBACK_TEXT;

pub struct AppState<'a> {
    pub api_base_url: String,
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub notice: Option<String>,
    pub pending: PendingRequests,
    pub prompt: tui_textarea::TextArea<'a>,
    pub scroll: Scroll,
    pub selected_file: Option<SelectedFile>,
    pub service_health: ServiceHealth,
    pub transcript: Transcript,
    pub upload_status: UploadStatus,
}

impl<'a> AppState<'a> {
    pub fn new(
        api_base_url: &str,
        username: &str,
        busy_mode: BusyMode,
        file_path: &str,
    ) -> AppState<'a> {
        let mut app_state = AppState {
            api_base_url: api_base_url.to_string(),
            bubble_list: BubbleList::new(username),
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            pending: PendingRequests::new(busy_mode),
            prompt: TextArea::default(),
            scroll: Scroll::default(),
            selected_file: None,
            service_health: ServiceHealth::default(),
            transcript: Transcript::default(),
            upload_status: UploadStatus::default(),
        };

        if !file_path.is_empty() {
            app_state.select_file(file_path);
        }

        tracing::debug!(busy_mode = %app_state.pending.mode(), "App state ready");

        return app_state;
    }

    pub fn pending_question(&self) -> String {
        return self.prompt.lines().join("\n");
    }

    pub fn is_busy(&self) -> bool {
        return self.pending.is_busy();
    }

    pub fn can_send(&self) -> bool {
        return self.pending.can_ask();
    }

    /// Appends to the transcript, re-lays out the bubbles and starts scrolling
    /// towards the new entry.
    pub fn append_message(&mut self, sender: Sender, text: &str) {
        self.transcript.append_message(sender, text);
        self.sync_dependants();
        self.scroll.animate_to_last();
    }

    /// Handles the prompt being submitted. Returns true when the application
    /// should exit.
    pub fn submit_prompt(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let input = self.pending_question();
        if let Some(command) = SlashCommand::parse(&input) {
            self.prompt = TextArea::default();
            return self.handle_slash_command(command, tx);
        }

        self.submit_question(tx)?;
        return Ok(false);
    }

    fn handle_slash_command(
        &mut self,
        command: SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            self.notice = Some(help_summary());
            return Ok(false);
        }

        if command.is_select_file() {
            self.select_file(&command.args_text());
            return Ok(false);
        }

        if command.is_upload() {
            if !command.args.is_empty() && !self.select_file(&command.args_text()) {
                return Ok(false);
            }

            self.request_upload(tx)?;
        }

        return Ok(false);
    }

    /// Runs the picker. A rejected path leaves the current selection alone.
    pub fn select_file(&mut self, file_path: &str) -> bool {
        match SelectedFile::pick(file_path) {
            Ok(file) => {
                tracing::debug!(name = file.name.as_str(), "Selected document");
                self.notice = None;
                self.selected_file = Some(file);
                return true;
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                return false;
            }
        }
    }

    pub fn submit_question(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let question = self.pending_question();
        if question.trim().is_empty() || !self.can_send() {
            return Ok(());
        }

        self.append_message(Sender::User, &question);
        self.prompt = TextArea::default();
        self.pending.begin(RequestKind::Ask);
        tx.send(Action::Ask(question))?;

        return Ok(());
    }

    pub fn request_upload(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let file = match &self.selected_file {
            Some(file) => file.clone(),
            None => return Ok(()),
        };

        self.pending.begin(RequestKind::Upload);
        self.upload_status = UploadStatus::Uploading;
        tx.send(Action::Upload(file))?;

        return Ok(());
    }

    pub fn handle_ask_response(&mut self, res: Result<String, ServiceError>) {
        match res {
            Ok(answer) => self.append_message(Sender::Bot, &answer),
            Err(_) => self.append_message(Sender::Bot, ASK_FALLBACK_TEXT),
        }

        self.pending.finish(RequestKind::Ask);
    }

    pub fn handle_upload_response(&mut self, res: Result<(), ServiceError>) {
        if res.is_ok() {
            self.upload_status = UploadStatus::Succeeded;
        } else {
            self.upload_status = UploadStatus::Failed;
        }

        self.pending.finish(RequestKind::Upload);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(self.transcript.messages(), self.last_known_width.into());

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);
    }
}
