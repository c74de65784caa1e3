use super::*;

#[test]
fn vec_collector_records_in_order() {
    let mut rec: Vec<Notice> = Vec::new();
    rec.info("Sync", "Deck 1: Synced to master");
    rec.warn("No Track", "Load a track first!");

    assert_eq!(rec.len(), 2);
    assert_eq!(rec[0].level, NoticeLevel::Info);
    assert_eq!(rec[0].title, "Sync");
    assert_eq!(rec[1].level, NoticeLevel::Warning);
    assert_eq!(rec[1].message, "Load a track first!");
}

#[test]
fn queue_shows_oldest_first_and_dismisses_in_order() {
    let mut q = NoticeQueue::new();
    assert!(!q.has_pending());
    assert!(q.current().is_none());

    q.info("Loaded", "Deck 1: a.mp3");
    q.info("Loaded", "Deck 2: b.mp3");
    assert_eq!(q.len(), 2);
    assert_eq!(q.current().unwrap().message, "Deck 1: a.mp3");

    let first = q.dismiss().unwrap();
    assert_eq!(first.message, "Deck 1: a.mp3");
    assert_eq!(q.current().unwrap().message, "Deck 2: b.mp3");

    q.dismiss();
    assert!(!q.has_pending());
    assert!(q.dismiss().is_none());
}

#[test]
fn queue_works_through_dyn_notifier() {
    let mut q = NoticeQueue::new();
    {
        let n: &mut dyn Notifier = &mut q;
        n.warn("No Track", "Load a track first!");
    }
    assert_eq!(q.current().unwrap().level, NoticeLevel::Warning);
}
