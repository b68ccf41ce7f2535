use ratatui::prelude::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Default)]
pub struct Loading {}

impl Loading {
    pub fn render(&self, frame: &mut Frame, rect: Rect) {
        frame.render_widget(
            Paragraph::new("Thinking...")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            rect,
        );
    }
}
