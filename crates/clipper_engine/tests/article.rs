use std::sync::Arc;

use clipper_core::{ClipperSettings, StructuredRecord};
use clipper_engine::{Clipper, FetchSettings, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn paragraph(topic: &str) -> String {
    format!(
        "<p>{}</p>",
        format!("The {topic} section explains how ownership moves between values in a program. ")
            .repeat(5)
    )
}

fn article_page() -> String {
    let body: String = ["borrowing", "lifetimes", "traits", "iterators", "closures"]
        .iter()
        .map(|topic| paragraph(topic))
        .collect();
    format!(
        r#"<html lang="en"><head>
        <title>Notes on Rust</title>
        <meta property="og:image" content="/cover.png">
        <script>track()</script>
        </head><body>
        <nav><a href="/">Home</a></nav>
        <article><h1>Notes on Rust</h1>{body}
        <pre><code class="language-rust">fn main() {{<br>}}</code></pre>
        </article>
        <footer>Copyright</footer>
        </body></html>"#
    )
}

#[tokio::test]
async fn article_is_extracted_end_to_end() {
    engine_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(article_page(), "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("client builds");
    let clipper = Clipper::new(ClipperSettings::default(), Arc::new(fetcher));
    let url = format!("{}/notes", server.uri());

    let record = clipper
        .extract(clipper.dispatch(&url).expect("website matches"), &url)
        .await
        .expect("extraction succeeds");
    let StructuredRecord::Article(article) = record else {
        panic!("expected a parsed article, got {record:?}");
    };

    assert_eq!(article.article_title, "Notes on Rust");
    assert_eq!(article.article_url, url);
    // About 300 words at 228 per minute.
    assert_eq!(article.article_reading_time, 2);
    assert!(article.article_content.contains("ownership moves"));
    assert!(article.article_content.contains("```"));
    assert!(article.article_content.contains("fn main()"));
    assert!(!article.article_content.contains("track()"));
    assert_eq!(article.preview_url, "/cover.png");

    let note = clipper.clip(&url).await.unwrap().expect("recognised");
    assert_eq!(note.file_name, "Notes on Rust");
    assert!(note.body.starts_with("[[ReadItLater]] [[Article]]"));
}
