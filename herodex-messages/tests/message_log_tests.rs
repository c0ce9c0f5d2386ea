use herodex_messages::MessageLog;
use pretty_assertions::assert_eq;
use std::sync::Arc;

// ── Append ────────────────────────────────────────────────────────

#[test]
fn starts_empty() {
    let log = MessageLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(log.messages(), Vec::<String>::new());
}

#[test]
fn add_appends_in_order() {
    let log = MessageLog::new();
    log.add("first");
    log.add("second");
    log.add("third");
    assert_eq!(log.messages(), vec!["first", "second", "third"]);
}

#[test]
fn add_accepts_owned_and_borrowed_strings() {
    let log = MessageLog::new();
    log.add("borrowed");
    log.add(String::from("owned"));
    assert_eq!(log.len(), 2);
}

#[test]
fn duplicate_messages_are_kept() {
    let log = MessageLog::new();
    log.add("same");
    log.add("same");
    assert_eq!(log.messages(), vec!["same", "same"]);
}

#[test]
fn messages_returns_a_snapshot() {
    let log = MessageLog::new();
    log.add("one");
    let snapshot = log.messages();
    log.add("two");
    assert_eq!(snapshot, vec!["one"]);
    assert_eq!(log.len(), 2);
}

// ── Clear ─────────────────────────────────────────────────────────

#[test]
fn clear_empties_the_log() {
    let log = MessageLog::new();
    log.add("first");
    log.add("second");
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.messages(), Vec::<String>::new());
}

#[test]
fn clear_on_empty_log_is_a_noop() {
    let log = MessageLog::new();
    log.clear();
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn log_is_usable_after_clear() {
    let log = MessageLog::new();
    log.add("before");
    log.clear();
    log.add("after");
    assert_eq!(log.messages(), vec!["after"]);
}

// ── Sharing ───────────────────────────────────────────────────────

#[test]
fn shared_handles_see_the_same_entries() {
    let log = Arc::new(MessageLog::new());
    let other = Arc::clone(&log);
    log.add("from first handle");
    other.add("from second handle");
    assert_eq!(
        log.messages(),
        vec!["from first handle", "from second handle"]
    );
}

#[test]
fn concurrent_appends_are_all_recorded() {
    let log = Arc::new(MessageLog::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let log = Arc::clone(&log);
            std::thread::spawn(move || {
                for j in 0..50 {
                    log.add(format!("writer {i} message {j}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(log.len(), 8 * 50);
}
