//! End-to-end tests: chat screen, backend thread and a fake page source

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};

use crate::backend_tests::FakeSource;
use crate::error::ChatError;
use crate::grouping::{build_display_items, ListOrder};
use crate::screen::ChatScreen;
use crate::state::Completion;

/// Drain events until the screen is idle, collecting completions.
fn settle(screen: &mut ChatScreen) -> Vec<Completion> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut completions = Vec::new();
    loop {
        completions.extend(screen.process_events());
        if !screen.state().is_loading() {
            return completions;
        }
        assert!(Instant::now() < deadline, "screen did not settle");
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn ids(screen: &ChatScreen) -> Vec<&str> {
    screen.state().messages().iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn test_paging_until_exhausted() {
    let source = Arc::new(
        FakeSource::new()
            .with_page(0, &["4", "3"])
            .with_page(1, &["2", "1"]),
    );
    let (mut screen, handle) = ChatScreen::spawn(source.clone());

    screen.load_initial();
    assert_eq!(settle(&mut screen), vec![Completion::Replaced { count: 2 }]);
    assert_eq!(screen.state().trip().name, "Trip 1");

    assert!(screen.load_more());
    assert_eq!(
        settle(&mut screen),
        vec![Completion::Appended { added: 2, duplicates: 0 }]
    );
    assert_eq!(screen.state().current_page(), 1);

    // Page 2 is empty: history is exhausted
    assert!(screen.load_more());
    assert_eq!(settle(&mut screen), vec![Completion::Exhausted]);
    assert!(!screen.state().has_more());
    assert_eq!(screen.state().current_page(), 1);
    assert_eq!(ids(&screen), vec!["4", "3", "2", "1"]);

    assert!(!screen.load_more());
    assert_eq!(source.requested(), vec![0, 1, 2]);

    drop(screen);
    handle.join().unwrap();
}

#[test]
fn test_refresh_supersedes_pending_load_more() {
    let source = Arc::new(
        FakeSource::new()
            .with_page(0, &["4", "3"])
            .with_page(1, &["2", "1"])
            .with_delay(1, Duration::from_millis(300)),
    );
    let (mut screen, handle) = ChatScreen::spawn(source);

    screen.load_initial();
    settle(&mut screen);

    assert!(screen.load_more());
    screen.refresh();
    let completions = settle(&mut screen);
    assert_eq!(completions, vec![Completion::Replaced { count: 2 }]);

    // The slow page 1 answer lands later and is ignored
    std::thread::sleep(Duration::from_millis(500));
    assert_eq!(screen.process_events(), vec![Completion::Discarded]);
    assert_eq!(ids(&screen), vec!["4", "3"]);
    assert_eq!(screen.state().current_page(), 0);
    assert!(!screen.take_older_loaded());

    drop(screen);
    handle.join().unwrap();
}

#[test]
fn test_failed_initial_load_then_refresh_recovers() {
    let source = Arc::new(
        FakeSource::new()
            .with_page(0, &["2", "1"])
            .with_first_error(0, ChatError::Parse("expected value".into())),
    );
    let (mut screen, handle) = ChatScreen::spawn(source.clone());

    screen.load_initial();
    let completions = settle(&mut screen);
    assert!(matches!(completions.as_slice(), [Completion::Failed(ChatError::Parse(_))]));
    assert!(screen.state().messages().is_empty());
    assert!(screen.state().last_error().is_some());
    assert!(screen.state().has_more());

    // Same screen, same view state: a refresh clears the failure
    screen.refresh();
    assert_eq!(settle(&mut screen), vec![Completion::Replaced { count: 2 }]);
    assert_eq!(ids(&screen), vec!["2", "1"]);
    assert!(screen.state().last_error().is_none());
    assert_eq!(screen.state().current_page(), 0);
    assert_eq!(source.requested(), vec![0, 0]);

    drop(screen);
    handle.join().unwrap();
}

#[test]
fn test_unmount_with_fetch_in_flight() {
    let source = Arc::new(
        FakeSource::new()
            .with_page(0, &["1"])
            .with_delay(0, Duration::from_secs(30)),
    );
    let (mut screen, handle) = ChatScreen::spawn(source);

    screen.load_initial();
    assert!(screen.state().is_loading());

    // Dropping the screen stops the backend without waiting for the fetch
    drop(screen);
    handle.join().unwrap();
}

#[test]
fn test_loaded_messages_group_by_day() {
    let source = Arc::new(FakeSource::new().with_page(0, &["2", "1"]));
    let (mut screen, handle) = ChatScreen::spawn(source);
    screen.load_initial();
    settle(&mut screen);

    // Both canned messages share a day: one run, one separator
    let today = NaiveDate::from_ymd_opt(2023, 1, 13).unwrap();
    let items = build_display_items(screen.state().messages(), ListOrder::NewestFirst, &Utc, today);
    assert_eq!(items.len(), 3);
    assert!(items[2].is_separator());
    assert_eq!(screen.state().member_preview(3), vec!["u1"]);

    drop(screen);
    handle.join().unwrap();
}
