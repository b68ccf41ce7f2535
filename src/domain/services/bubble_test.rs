use ratatui::style::Color;
use ratatui::text::Line;
use test_utils::long_answer_fixture;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::ChatMessage;
use crate::domain::models::Sender;

fn create_bubble_lines(sender: Sender, text: &str) -> Vec<Line<'static>> {
    let message = ChatMessage::new(sender, text);
    let alignment = BubbleAlignment::for_sender(sender);
    return Bubble::new(&message, alignment, sender.label("testuser"), 50).as_lines();
}

fn line_to_string(line: &Line) -> String {
    return line
        .spans
        .iter()
        .map(|span| {
            return span.content.to_string();
        })
        .collect::<Vec<String>>()
        .join("");
}

fn create_lines(sender: Sender, text: &str) -> String {
    return create_bubble_lines(sender, text)
        .iter()
        .map(|line| return line_to_string(line).trim_end().to_string())
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_creates_bot_text() {
    let lines_str = create_lines(Sender::Bot, "Hi there!");
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat────╮
    │ Hi there! │
    ╰───────────╯
    "###);
}

#[test]
fn it_creates_bot_text_long() {
    let lines_str = create_lines(Sender::Bot, "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?");
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat──────────────────────────────────────╮
    │ Hi there! This is a really long line that   │
    │ pushes the boundaries of 50 characters      │
    │ across the screen, resulting in a bubble    │
    │ where the line is wrapped to the next line. │
    │ Cool right?                                 │
    ╰─────────────────────────────────────────────╯
    "###);
}

#[test]
fn it_creates_bot_text_multiline() {
    let lines_str = create_lines(Sender::Bot, long_answer_fixture());
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat──────────────────────────────────────╮
    │ The report covers the third quarter.        │
    │ Revenue grew by twelve percent compared to  │
    │ the previous quarter, driven mostly by      │
    │ subscription renewals.                      │
    │                                             │
    │ Key points:                                 │
    │ - Operating costs stayed flat.              │
    │ - Two new regional offices opened.          │
    │                                             │
    │ That's the summary!                         │
    ╰─────────────────────────────────────────────╯
    "###);
}

#[test]
fn it_splits_long_words() {
    let lines_str = create_lines(Sender::Bot, &"a".repeat(60));
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat──────────────────────────────────────╮
    │ aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa │
    │ aaaaaaaaaaaaaaaaa                           │
    ╰─────────────────────────────────────────────╯
    "###);
}

#[test]
fn it_expands_tabs() {
    let lines_str = create_lines(Sender::Bot, "  indented\tline");
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat───────────╮
    │   indented  line │
    ╰──────────────────╯
    "###);
}

#[test]
fn it_creates_empty_text() {
    let lines_str = create_lines(Sender::Bot, "");
    insta::assert_snapshot!(lines_str, @r###"
    ╭DocChat──╮
    │         │
    ╰─────────╯
    "###);
}

#[test]
fn it_creates_user_text_aligned_right() {
    let lines = create_bubble_lines(Sender::User, "What is the summary?")
        .iter()
        .map(line_to_string)
        .collect::<Vec<String>>();

    let padding = " ".repeat(22);
    assert_eq!(
        lines,
        vec![
            format!("{padding}╭testuser──────────────╮"),
            format!("{padding}│ What is the summary? │"),
            format!("{padding}╰──────────────────────╯"),
        ]
    );
}

#[test]
fn it_highlights_fallback_text() {
    let lines = create_bubble_lines(Sender::Bot, "Error getting response.");
    let text_span = &lines[1].spans[1];

    assert_eq!(text_span.content, "Error getting response.");
    assert_eq!(text_span.style.fg, Some(Color::Red));
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
}

#[test]
fn it_does_not_highlight_regular_answers() {
    let lines = create_bubble_lines(Sender::Bot, "It is a quarterly report.");
    let text_span = &lines[1].spans[1];

    assert_eq!(text_span.style.fg, None);
}

#[test]
fn it_aligns_by_sender() {
    assert_eq!(
        BubbleAlignment::for_sender(Sender::User),
        BubbleAlignment::Right
    );
    assert_eq!(BubbleAlignment::for_sender(Sender::Bot), BubbleAlignment::Left);
}
