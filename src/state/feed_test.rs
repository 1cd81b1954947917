use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

fn page(start: u32, len: u32) -> Vec<u32> {
    (start..start + len).collect()
}

fn network_error() -> ApiError {
    ApiError::Network("connection reset".to_owned())
}

/// Page source backed by a fixed cursor -> result table. Unknown cursors return
/// an empty page.
struct ScriptedSource {
    pages: HashMap<Cursor, Result<Vec<u32>, ApiError>>,
    calls: RefCell<Vec<Cursor>>,
}

impl ScriptedSource {
    fn new(pages: Vec<(Cursor, Result<Vec<u32>, ApiError>)>) -> Self {
        Self { pages: pages.into_iter().collect(), calls: RefCell::new(Vec::new()) }
    }
}

impl PageSource<u32> for ScriptedSource {
    fn fetch_page(&self, cursor: Cursor) -> impl Future<Output = Result<Vec<u32>, ApiError>> {
        self.calls.borrow_mut().push(cursor);
        let result = self.pages.get(&cursor).cloned().unwrap_or_else(|| Ok(Vec::new()));
        std::future::ready(result)
    }
}

fn settle_and_continue(
    loader: &RefCell<FeedLoader<u32>>,
    ticket: FetchTicket,
    result: Result<Vec<u32>, ApiError>,
) -> Option<FetchTicket> {
    let mut loader = loader.borrow_mut();
    loader.settle(ticket, result);
    loader.reevaluate()
}

// =============================================================
// Start and first page
// =============================================================

#[test]
fn start_requests_first_cursor() {
    let mut loader = FeedLoader::<u32>::new();
    assert_eq!(loader.start(), Some(FetchTicket { session: 0, cursor: 1 }));
    assert!(loader.is_loading());
    assert_eq!(loader.notice(), FeedNotice::InitialLoading);
}

#[test]
fn start_is_only_honoured_once() {
    let mut loader = FeedLoader::<u32>::new();
    let ticket = loader.start().unwrap();
    assert_eq!(loader.start(), None);
    loader.settle(ticket, Ok(page(0, 3)));
    assert_eq!(loader.start(), None);
}

#[test]
fn new_loader_reports_more_available() {
    let loader = FeedLoader::<u32>::new();
    assert!(loader.has_more());
    assert!(loader.is_empty());
    assert_eq!(loader.next_cursor(), 1);
}

// =============================================================
// Accumulation
// =============================================================

#[test]
fn non_empty_pages_concatenate_in_fetch_order() {
    let mut loader = FeedLoader::<u32>::new();
    let mut ticket = loader.start().unwrap();
    let pages = [page(0, 10), page(10, 4), page(14, 7)];
    for (i, items) in pages.iter().enumerate() {
        assert_eq!(ticket.cursor, u32::try_from(i).unwrap() + 1);
        assert!(loader.settle(ticket, Ok(items.clone())));
        assert_eq!(loader.reevaluate(), None);
        if i + 1 < pages.len() {
            ticket = loader.on_visibility(true).unwrap();
            loader.on_visibility(false);
        }
    }
    let expected: Vec<u32> = pages.concat();
    assert_eq!(loader.items().copied().collect::<Vec<_>>(), expected);
    assert_eq!(loader.len(), 21);
    assert_eq!(loader.page_count(), 3);
    assert_eq!(loader.next_cursor(), 4);
    assert!(loader.has_more());
}

#[test]
fn ten_items_then_empty_page_ends_the_feed() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    loader.settle(first, Ok(page(0, 10)));
    assert_eq!(loader.len(), 10);
    assert!(loader.has_more());

    let second = loader.on_visibility(true).unwrap();
    assert_eq!(second.cursor, 2);
    assert!(loader.settle(second, Ok(Vec::new())));
    assert_eq!(loader.reevaluate(), None);

    assert_eq!(loader.len(), 10);
    assert!(!loader.has_more());
    assert_eq!(loader.notice(), FeedNotice::NoMore);
    for visible in [false, true, false, true, true] {
        assert_eq!(loader.on_visibility(visible), None);
    }
    assert_eq!(loader.phase(), &LoadPhase::Exhausted);
}

#[test]
fn empty_first_page_reports_empty_feed() {
    let mut loader = FeedLoader::<u32>::new();
    let ticket = loader.start().unwrap();
    loader.settle(ticket, Ok(Vec::new()));
    assert_eq!(loader.notice(), FeedNotice::Empty);
    assert_eq!(loader.on_visibility(true), None);
}

// =============================================================
// Single-flight discipline
// =============================================================

#[test]
fn visibility_toggles_while_loading_are_ignored() {
    let mut loader = FeedLoader::<u32>::new();
    let ticket = loader.start().unwrap();
    for _ in 0..50 {
        assert_eq!(loader.on_visibility(true), None);
        assert_eq!(loader.on_visibility(false), None);
    }
    assert_eq!(loader.phase(), &LoadPhase::Loading { cursor: 1 });
    assert!(loader.settle(ticket, Ok(page(0, 5))));
    assert_eq!(loader.next_cursor(), 2);
}

#[test]
fn settle_reevaluates_remembered_visibility() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    assert_eq!(loader.on_visibility(true), None);
    assert!(loader.settle(first, Ok(page(0, 2))));
    assert_eq!(loader.reevaluate(), Some(FetchTicket { session: 0, cursor: 2 }));
    assert_eq!(loader.reevaluate(), None);
    assert_eq!(loader.notice(), FeedNotice::LoadingMore);
}

#[test]
fn settle_without_visible_sentinel_waits() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    assert!(loader.settle(first, Ok(page(0, 2))));
    assert_eq!(loader.reevaluate(), None);
    assert_eq!(loader.notice(), FeedNotice::MoreAvailable);
    assert!(!loader.is_loading());
}

#[test]
fn duplicate_settle_is_ignored() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    loader.settle(first, Ok(page(0, 3)));
    assert!(!loader.settle(first, Ok(page(100, 3))));
    assert_eq!(loader.len(), 3);
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failed_first_page_leaves_list_empty_and_never_retries() {
    let mut loader = FeedLoader::<u32>::new();
    let ticket = loader.start().unwrap();
    assert!(loader.settle(ticket, Err(network_error())));

    assert!(loader.is_empty());
    assert_eq!(loader.error(), Some(&network_error()));
    assert!(!loader.has_more());
    assert_eq!(loader.notice(), FeedNotice::Failed("Failed to fetch events".to_owned()));
    for _ in 0..5 {
        assert_eq!(loader.on_visibility(true), None);
        assert_eq!(loader.reevaluate(), None);
    }
    assert_eq!(loader.start(), None);
}

#[test]
fn failure_after_some_pages_keeps_loaded_items() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    loader.settle(first, Ok(page(0, 4)));
    let second = loader.on_visibility(true).unwrap();
    loader.settle(second, Err(ApiError::Status { status: 503, message: Some("Maintenance".to_owned()) }));
    assert_eq!(loader.len(), 4);
    assert_eq!(loader.notice(), FeedNotice::Failed("Maintenance".to_owned()));
    assert_eq!(loader.on_visibility(true), None);
}

// =============================================================
// Reset and teardown
// =============================================================

#[test]
fn reset_clears_state_and_drops_stale_results() {
    let mut loader = FeedLoader::<u32>::new();
    let first = loader.start().unwrap();
    loader.settle(first, Err(network_error()));

    loader.reset();
    assert!(loader.error().is_none());
    assert!(loader.is_empty());
    assert_eq!(loader.next_cursor(), 1);

    let fresh = loader.start().unwrap();
    assert_eq!(fresh, FetchTicket { session: 1, cursor: 1 });
    assert!(!loader.settle(first, Ok(page(0, 9))));
    assert!(loader.is_empty());
    loader.settle(fresh, Ok(page(0, 2)));
    assert_eq!(loader.len(), 2);
}

#[test]
fn results_after_dispose_are_discarded() {
    let mut loader = FeedLoader::<u32>::new();
    let ticket = loader.start().unwrap();
    loader.dispose();
    assert!(!loader.settle(ticket, Ok(page(0, 3))));
    assert!(loader.is_empty());
    assert_eq!(loader.on_visibility(true), None);
    assert!(loader.is_disposed());
}

// =============================================================
// Driver
// =============================================================

#[test]
fn drive_fetches_sequentially_until_empty_page() {
    let source = ScriptedSource::new(vec![
        (1, Ok(page(0, 10))),
        (2, Ok(page(10, 10))),
        (3, Ok(page(20, 3))),
    ]);
    let loader = RefCell::new(FeedLoader::<u32>::new());
    let ticket = loader.borrow_mut().start().unwrap();
    loader.borrow_mut().on_visibility(true);

    futures::executor::block_on(drive(&source, ticket, |t, r| settle_and_continue(&loader, t, r)));

    assert_eq!(*source.calls.borrow(), vec![1, 2, 3, 4]);
    let loader = loader.into_inner();
    assert_eq!(loader.len(), 23);
    assert!(!loader.has_more());
}

#[test]
fn drive_stops_at_first_page_when_sentinel_hidden() {
    let source = ScriptedSource::new(vec![(1, Ok(page(0, 10))), (2, Ok(page(10, 10)))]);
    let loader = RefCell::new(FeedLoader::<u32>::new());
    let ticket = loader.borrow_mut().start().unwrap();

    futures::executor::block_on(drive(&source, ticket, |t, r| settle_and_continue(&loader, t, r)));

    assert_eq!(*source.calls.borrow(), vec![1]);
    assert_eq!(loader.borrow().notice(), FeedNotice::MoreAvailable);
}

#[test]
fn drive_does_not_retry_after_failure() {
    let source = ScriptedSource::new(vec![(1, Err(network_error()))]);
    let loader = RefCell::new(FeedLoader::<u32>::new());
    let ticket = loader.borrow_mut().start().unwrap();
    loader.borrow_mut().on_visibility(true);

    futures::executor::block_on(drive(&source, ticket, |t, r| settle_and_continue(&loader, t, r)));

    assert_eq!(*source.calls.borrow(), vec![1]);
    assert!(loader.borrow().error().is_some());
}

#[test]
fn drive_stops_when_owner_is_gone() {
    let source = ScriptedSource::new(vec![(1, Ok(page(0, 10))), (2, Ok(page(10, 10)))]);
    let ticket = FetchTicket { session: 0, cursor: 1 };
    futures::executor::block_on(drive(&source, ticket, |_, _: Result<Vec<u32>, ApiError>| None));
    assert_eq!(*source.calls.borrow(), vec![1]);
}
