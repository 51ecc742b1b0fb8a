//! Tests for the pagination engine

use super::*;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    id: Option<String>,
}

fn row(id: &str) -> Row {
    Row {
        id: Some(id.to_string()),
    }
}

fn rows(ids: std::ops::RangeInclusive<u32>) -> Vec<Row> {
    ids.map(|i| row(&i.to_string())).collect()
}

fn row_id(r: &Row) -> Option<String> {
    r.id.clone()
}

/// Spy page reader: serves scripted pages in order and records every request
/// it receives. Once the script runs out it serves empty pages.
struct ScriptedReader {
    pages: Mutex<VecDeque<Result<Vec<Row>>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedReader {
    fn new(pages: Vec<Result<Vec<Row>>>) -> Arc<Self> {
        Arc::new(Self {
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn read(&self, request: PageRequest) -> Result<Vec<Row>> {
        self.requests.lock().unwrap().push(request);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn read_fn(
    reader: &Arc<ScriptedReader>,
) -> impl Fn(PageRequest) -> futures::future::Ready<Result<Vec<Row>>> + Send {
    let reader = Arc::clone(reader);
    move |request| futures::future::ready(reader.read(request))
}

fn ids_of(items: Vec<Result<Row>>) -> Vec<String> {
    items
        .into_iter()
        .map(|r| r.expect("expected Ok item").id.expect("expected id"))
        .collect()
}

// ============================================================================
// Page chaining
// ============================================================================

#[tokio::test]
async fn full_pages_concatenate_until_short_page() {
    let reader = ScriptedReader::new(vec![Ok(rows(1..=10)), Ok(rows(11..=12))]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(10, Order::Asc));

    let items: Vec<_> = stream.collect().await;

    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(ids_of(items), expected);
    assert_eq!(reader.calls(), 2);
}

#[tokio::test]
async fn empty_first_page_ends_after_one_call() {
    let reader = ScriptedReader::new(vec![Ok(Vec::new())]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::default());

    let items: Vec<_> = stream.collect().await;

    assert!(items.is_empty());
    assert_eq!(reader.calls(), 1);
}

#[tokio::test]
async fn exact_multiple_makes_one_trailing_empty_request() {
    // Collection of exactly 2 * page_size items; the scripted reader serves
    // an empty page once exhausted, which terminates the stream.
    let reader = ScriptedReader::new(vec![Ok(rows(1..=5)), Ok(rows(6..=10))]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(5, Order::Asc));

    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 10);
    assert_eq!(reader.calls(), 3);
    assert_eq!(reader.requests()[2].cursor.as_deref(), Some("10"));
}

#[tokio::test]
async fn cursor_tracks_last_item_of_preceding_page() {
    let reader = ScriptedReader::new(vec![Ok(rows(1..=3)), Ok(rows(4..=6)), Ok(rows(7..=8))]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(3, Order::Desc));

    let items: Vec<_> = stream.collect().await;
    assert_eq!(items.len(), 8);

    let requests = reader.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].cursor, None);
    assert_eq!(requests[1].cursor.as_deref(), Some("3"));
    assert_eq!(requests[2].cursor.as_deref(), Some("6"));
    for request in &requests {
        assert_eq!(request.page_size, 3);
        assert_eq!(request.order, Order::Desc);
    }
}

#[tokio::test]
async fn page_order_is_preserved_verbatim() {
    // The engine trusts the reader; an inconsistently ordered page passes
    // through without any corrective sort.
    let reader = ScriptedReader::new(vec![Ok(vec![row("3"), row("1"), row("2")])]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(10, Order::Asc));

    let items: Vec<_> = stream.collect().await;

    assert_eq!(ids_of(items), vec!["3", "1", "2"]);
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn dropping_the_stream_stops_fetching() {
    let reader = ScriptedReader::new(vec![Ok(rows(1..=10)), Ok(rows(11..=20))]);
    {
        let stream = paginate(read_fn(&reader), row_id, PageRequest::first(10, Order::Desc));
        futures::pin_mut!(stream);
        for _ in 0..10 {
            assert!(stream.next().await.expect("expected item").is_ok());
        }
        // Stream dropped here, parked right after the first page's last item
    }
    assert_eq!(reader.calls(), 1);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn reader_error_surfaces_at_the_failing_page() {
    let reader = ScriptedReader::new(vec![
        Ok(rows(1..=10)),
        Err(Error::http_status(500, "backend down")),
    ]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(10, Order::Desc));

    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 11);
    assert!(items[..10].iter().all(Result::is_ok));
    assert!(matches!(
        items[10],
        Err(Error::HttpStatus { status: 500, .. })
    ));
    assert_eq!(reader.calls(), 2);
}

#[tokio::test]
async fn missing_id_on_full_page_fails_fast() {
    let mut page = rows(1..=9);
    page.push(Row { id: None });
    let reader = ScriptedReader::new(vec![Ok(page)]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(10, Order::Desc));

    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::MissingTransactionId)));
    assert_eq!(reader.calls(), 1);
}

#[tokio::test]
async fn zero_page_size_is_rejected_before_any_fetch() {
    let reader = ScriptedReader::new(vec![Ok(rows(1..=10))]);
    let stream = paginate(read_fn(&reader), row_id, PageRequest::first(0, Order::Desc));

    let items: Vec<_> = stream.collect().await;

    assert_eq!(items.len(), 1);
    assert!(matches!(
        items[0],
        Err(Error::InvalidPageSize { page_size: 0 })
    ));
    assert_eq!(reader.calls(), 0);
}

// ============================================================================
// PageRequest
// ============================================================================

#[test]
fn test_page_request_after_is_a_fresh_value() {
    let first = PageRequest::first(10, Order::Asc);
    let next = first.after("42");

    assert_eq!(first.cursor, None);
    assert_eq!(next.cursor.as_deref(), Some("42"));
    assert_eq!(next.page_size, first.page_size);
    assert_eq!(next.order, first.order);
}

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(request.cursor, None);
    assert_eq!(request.order, Order::Desc);
}

#[test]
fn test_order_wire_form() {
    assert_eq!(Order::Asc.as_str(), "asc");
    assert_eq!(Order::Desc.as_str(), "desc");
    assert_eq!(Order::default(), Order::Desc);
}
