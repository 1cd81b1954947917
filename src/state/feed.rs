//! Incremental list loader behind the infinite-scroll event feed.
//!
//! DESIGN
//! ======
//! The loader is a plain state machine with no framework or browser types so
//! the whole fetch discipline is unit-testable natively. The view owns a
//! `RwSignal<FeedLoader<_>>`, feeds it sentinel visibility changes, and runs
//! the tickets it hands out through `drive`.
//!
//! ```text
//! idle    -> (sentinel visible, more available) -> loading
//! loading -> (page non-empty)                   -> idle
//! loading -> (page empty)                       -> exhausted  (terminal)
//! loading -> (fetch failed)                     -> failed     (terminal)
//! ```
//!
//! At most one ticket is outstanding. Visibility changes while loading only
//! update the remembered visibility; the sentinel is re-evaluated once the
//! fetch settles. Every ticket carries the session it was issued in, so
//! results that arrive after `reset` or `dispose` are dropped.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::ApiError;

/// Page ordinal. The first page is 1.
pub type Cursor = u32;

pub const FIRST_CURSOR: Cursor = 1;

/// Permission to run exactly one page fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub session: u64,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading { cursor: Cursor },
    /// An empty page came back. No more fetches this session.
    Exhausted,
    /// A fetch failed. No more fetches until `reset`.
    Failed(ApiError),
}

/// What the feed should tell the user below (or instead of) the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedNotice {
    /// First page still loading; nothing to show yet.
    InitialLoading,
    LoadingMore,
    /// More pages exist; the sentinel is waiting to scroll into view.
    MoreAvailable,
    /// Reached the end with at least one item.
    NoMore,
    /// Reached the end without any items.
    Empty,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct FeedLoader<T> {
    pages: Vec<Vec<T>>,
    next_cursor: Cursor,
    phase: LoadPhase,
    sentinel_visible: bool,
    session: u64,
    disposed: bool,
}

impl<T> Default for FeedLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FeedLoader<T> {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_cursor: FIRST_CURSOR,
            phase: LoadPhase::Idle,
            sentinel_visible: false,
            session: 0,
            disposed: false,
        }
    }

    /// Request the first page on mount. Returns `None` if anything has already
    /// been requested this session.
    pub fn start(&mut self) -> Option<FetchTicket> {
        if self.next_cursor != FIRST_CURSOR || !self.pages.is_empty() {
            return None;
        }
        self.try_begin()
    }

    /// Record a sentinel visibility change; returns a ticket when the change
    /// should start a fetch.
    pub fn on_visibility(&mut self, visible: bool) -> Option<FetchTicket> {
        self.sentinel_visible = visible;
        if visible { self.try_begin() } else { None }
    }

    /// Apply the outcome of `ticket`'s fetch. Returns `false` when the result
    /// was stale and dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if self.disposed || ticket.session != self.session {
            leptos::logging::log!("feed: dropping stale page {} from session {}", ticket.cursor, ticket.session);
            return false;
        }
        if self.phase != (LoadPhase::Loading { cursor: ticket.cursor }) {
            leptos::logging::warn!("feed: unexpected settle for page {}", ticket.cursor);
            return false;
        }

        match result {
            Ok(items) if items.is_empty() => self.phase = LoadPhase::Exhausted,
            Ok(items) => {
                self.pages.push(items);
                self.next_cursor += 1;
                self.phase = LoadPhase::Idle;
            }
            Err(err) => {
                leptos::logging::warn!("feed: page {} failed: {err}", ticket.cursor);
                self.phase = LoadPhase::Failed(err);
            }
        }
        true
    }

    /// Re-check the last reported sentinel visibility after a fetch settled.
    ///
    /// The browser view re-arms its observer instead, so the check runs against
    /// the layout that includes the new page.
    pub fn reevaluate(&mut self) -> Option<FetchTicket> {
        if self.sentinel_visible { self.try_begin() } else { None }
    }

    /// Start a fresh session as if the view were remounted.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.next_cursor = FIRST_CURSOR;
        self.phase = LoadPhase::Idle;
        self.sentinel_visible = false;
        self.session += 1;
        self.disposed = false;
    }

    /// Mark the owning view as torn down. Nothing is fetched or applied after this.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn try_begin(&mut self) -> Option<FetchTicket> {
        if self.disposed || self.phase != LoadPhase::Idle {
            return None;
        }
        let cursor = self.next_cursor;
        self.phase = LoadPhase::Loading { cursor };
        Some(FetchTicket { session: self.session, cursor })
    }

    /// All fetched items, in page order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Vec::is_empty)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn next_cursor(&self) -> Cursor {
        self.next_cursor
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// False once an empty page has been seen or a fetch failed.
    pub fn has_more(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading { .. })
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.phase {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn notice(&self) -> FeedNotice {
        match &self.phase {
            LoadPhase::Failed(err) => FeedNotice::Failed(err.user_message("Failed to fetch events")),
            LoadPhase::Loading { .. } if self.pages.is_empty() => FeedNotice::InitialLoading,
            LoadPhase::Loading { .. } => FeedNotice::LoadingMore,
            LoadPhase::Exhausted if self.is_empty() => FeedNotice::Empty,
            LoadPhase::Exhausted => FeedNotice::NoMore,
            LoadPhase::Idle => FeedNotice::MoreAvailable,
        }
    }
}

/// Anything that can produce one page of items for a cursor.
pub trait PageSource<T> {
    fn fetch_page(&self, cursor: Cursor) -> impl Future<Output = Result<Vec<T>, ApiError>>;
}

/// Run `ticket` and every follow-up ticket `settle` hands back, one at a time.
///
/// `settle` applies a result to wherever the loader lives and returns the next
/// ticket, or `None` to stop (including when the loader is gone).
pub async fn drive<T, S, F>(source: &S, ticket: FetchTicket, mut settle: F)
where
    S: PageSource<T>,
    F: FnMut(FetchTicket, Result<Vec<T>, ApiError>) -> Option<FetchTicket>,
{
    let mut next = Some(ticket);
    while let Some(ticket) = next {
        let result = source.fetch_page(ticket.cursor).await;
        next = settle(ticket, result);
    }
}
