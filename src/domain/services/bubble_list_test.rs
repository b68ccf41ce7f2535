use test_utils::long_answer_fixture;

use super::BubbleList;
use crate::domain::models::ChatMessage;
use crate::domain::models::Sender;

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::new("testuser");

    assert_eq!(bubble_list.cache.len(), 0);
    assert_eq!(bubble_list.len(), 0);
}

#[test]
fn it_caches_lines() {
    let messages = vec![
        ChatMessage::new(Sender::User, "What is the summary?"),
        ChatMessage::new(Sender::Bot, long_answer_fixture()),
    ];

    let mut bubble_list = BubbleList::new("testuser");
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.cache.len(), 2);
}

#[test]
fn it_returns_correct_length() {
    let messages = vec![
        ChatMessage::new(Sender::User, "What is the summary?"),
        ChatMessage::new(Sender::Bot, long_answer_fixture()),
    ];

    let mut bubble_list = BubbleList::new("testuser");
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.len(), 15);
}

#[test]
fn it_appends_to_cached_lines() {
    let mut messages = vec![ChatMessage::new(Sender::User, "What is the summary?")];

    let mut bubble_list = BubbleList::new("testuser");
    bubble_list.set_messages(&messages, 50);
    assert_eq!(bubble_list.len(), 3);

    messages.push(ChatMessage::new(Sender::Bot, "It is a quarterly report."));
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.cache.len(), 2);
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_clears_cache_on_resize() {
    let messages = vec![ChatMessage::new(Sender::Bot, long_answer_fixture())];

    let mut bubble_list = BubbleList::new("testuser");
    bubble_list.set_messages(&messages, 50);
    assert_eq!(bubble_list.len(), 12);

    bubble_list.set_messages(&messages, 200);
    assert_eq!(bubble_list.len(), 9);
}
