use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(true));

        return textarea;
    }

    /// Border for the question prompt. Typing stays possible while sending
    /// is disabled.
    pub fn block(can_send: bool) -> Block<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .padding(Padding::new(1, 1, 0, 0));

        if can_send {
            return block.title("Ask a question...");
        }

        return block
            .title("Waiting for an answer...")
            .border_style(Style::default().fg(Color::DarkGray));
    }
}
