mod support;

use std::sync::Arc;

use clipper_core::{ClipperSettings, Source};
use clipper_engine::{Clipper, EngineEvent, EngineHandle, FailureKind};
use support::StubFetcher;

#[test]
fn engine_reports_started_only_for_recognised_inputs() {
    engine_logging::initialize_for_tests();
    let fetcher = StubFetcher::new().fail("https://vimeo.com/9", FailureKind::RateLimited);
    let engine = EngineHandle::new(Clipper::new(ClipperSettings::default(), fetcher.clone()))
        .expect("runtime starts");

    engine.enqueue(1, "not a link");
    engine.enqueue(2, "https://vimeo.com/9");

    let mut started = Vec::new();
    let mut completed = Vec::new();
    while completed.len() < 2 {
        match engine.recv().expect("engine alive") {
            EngineEvent::Started { request_id, source } => started.push((request_id, source)),
            EngineEvent::Completed {
                request_id, result, ..
            } => completed.push((request_id, result)),
        }
    }
    completed.sort_by_key(|(id, _)| *id);

    assert_eq!(started, vec![(2, Source::Vimeo)]);
    assert_eq!(completed[0].1, Ok(None));
    let err = completed[1].1.clone().unwrap_err();
    assert_eq!(err.kind, FailureKind::RateLimited);
    assert_eq!(fetcher.calls(), 1);
    assert!(engine.try_recv().is_none());
}

#[test]
fn requests_complete_independently() {
    let fetcher = StubFetcher::new()
        .page("https://example.com/a", "<html><body></body></html>")
        .fail("https://example.com/b", FailureKind::HttpStatus(500));
    let clipper = Clipper::new(ClipperSettings::default(), fetcher)
        .with_article_extractor(Arc::new(support::NoArticle));
    let engine = EngineHandle::new(clipper).expect("runtime starts");

    engine.enqueue(10, "https://example.com/b");
    engine.enqueue(11, "https://example.com/a");

    let mut results = Vec::new();
    while results.len() < 2 {
        if let Some(EngineEvent::Completed {
            request_id, result, ..
        }) = engine.recv()
        {
            results.push((request_id, result.map(|note| note.is_some())));
        }
    }
    results.sort_by_key(|(id, _)| *id);
    assert!(results[0].1.is_err());
    assert_eq!(results[1].1, Ok(true));
}
