#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::ChatMessage;
use crate::domain::models::Sender;
use crate::domain::models::ASK_FALLBACK_TEXT;

#[derive(Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

impl BubbleAlignment {
    pub fn for_sender(sender: Sender) -> BubbleAlignment {
        if sender == Sender::User {
            return BubbleAlignment::Right;
        }

        return BubbleAlignment::Left;
    }
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a ChatMessage,
    label: String,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let mut values = subtractions.into_iter();
    let first = values.next().unwrap_or(0);
    let count = values.fold(first, |acc, e| return acc.saturating_sub(e));

    return text.repeat(count);
}

fn split_long_word(word: &str, max_length: usize) -> Vec<String> {
    let chars = word.chars().collect::<Vec<char>>();
    if chars.len() <= max_length {
        return vec![word.to_string()];
    }

    return chars
        .chunks(max_length)
        .map(|chunk| return chunk.iter().collect::<String>())
        .collect();
}

/// Greedy word wrap. Leading spaces are kept so indented answers stay
/// indented, words longer than a line are split.
fn wrap_line(line: &str, max_length: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut current_words: Vec<String> = vec![];
    let mut char_count = 0;

    for word in line.split(' ') {
        for chunk in split_long_word(word, max_length) {
            let chunk_length = chunk.chars().count();
            if !current_words.is_empty() && chunk_length + char_count > max_length {
                lines.push(current_words.join(" ").trim_end().to_string());
                current_words = vec![];
                char_count = 0;
            }

            char_count += chunk_length + 1;
            current_words.push(chunk);
        }
    }

    if !current_words.is_empty() {
        lines.push(current_words.join(" ").trim_end().to_string());
    }

    return lines;
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a ChatMessage,
        alignment: BubbleAlignment,
        label: String,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            label,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();

        let mut lines = self
            .message
            .display_lines()
            .iter()
            .flat_map(|line| return wrap_line(line, max_line_length))
            .map(|line| return self.text_to_line(line, max_line_length))
            .collect::<Vec<Line<'static>>>();

        if lines.is_empty() {
            lines.push(self.text_to_line("".to_string(), max_line_length));
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn text_to_line(&self, text: String, max_line_length: usize) -> Line<'static> {
        let text_length = text.chars().count();
        let fill = repeat_from_subtractions(" ", vec![max_line_length, text_length]);
        let formatted_line_length = text_length + fill.len() + Bubble::style_config().bubble_padding;

        let mut spans = vec![
            self.highlight_span("│ ".to_string()),
            Span::styled(text, self.text_style()),
            self.highlight_span(format!("{fill} │")),
        ];

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_bubble_padding));
            return Line::from(spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = self
            .message
            .display_lines()
            .iter()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0);

        let available_length = self.window_max_width.saturating_sub(line_border_width);
        if max_line_length > available_length {
            max_line_length = available_length;
        }

        let label_length = self.label.chars().count();
        if max_line_length < label_length {
            max_line_length = label_length;
        }

        return max_line_length.max(1);
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        // Add 2 for the vertical bars.
        let label_fill = repeat_from_subtractions(
            "─",
            vec![max_line_length + 2, self.label.chars().count()],
        );
        let top_bar = format!("╭{}{label_fill}╮", self.label);
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn is_fallback(&self) -> bool {
        return self.message.sender() == Sender::Bot && self.message.text() == ASK_FALLBACK_TEXT;
    }

    fn text_style(&self) -> Style {
        if self.is_fallback() {
            return Style::default().fg(Color::Red);
        }

        return Style::default();
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.is_fallback() {
            return Span::styled(text, Style::default().fg(Color::Red));
        }

        if self.message.sender() == Sender::User {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(37, 99, 235)), // Blue
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
