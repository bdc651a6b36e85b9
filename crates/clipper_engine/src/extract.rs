use dom_smoothie::Readability;
use engine_logging::engine_debug;

/// Main content of a page as found by heuristic extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadableArticle {
    pub title: String,
    pub content_html: String,
    pub text_content: String,
    pub byline: Option<String>,
    pub site_name: Option<String>,
    pub lang: Option<String>,
    pub published_time: Option<String>,
}

/// Heuristic "find the article" capability.
///
/// `None` means the page is not parseable as an article; callers degrade
/// rather than fail.
pub trait ArticleExtractor: Send + Sync {
    fn extract(&self, html: &str, base_url: &str) -> Option<ReadableArticle>;
}

/// Readability port backed by `dom_smoothie`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityExtractor;

impl ArticleExtractor for ReadabilityExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Option<ReadableArticle> {
        let mut reader = match Readability::new(html, Some(base_url), None) {
            Ok(reader) => reader,
            Err(err) => {
                engine_debug!("readability init failed for {}: {:?}", base_url, err);
                return None;
            }
        };
        let article = match reader.parse() {
            Ok(article) => article,
            Err(err) => {
                engine_debug!("readability found no article at {}: {:?}", base_url, err);
                return None;
            }
        };

        let content_html = article.content.to_string();
        if content_html.trim().is_empty() {
            return None;
        }

        Some(ReadableArticle {
            title: article.title.to_string(),
            content_html,
            text_content: article.text_content.to_string(),
            byline: non_empty(article.byline),
            site_name: non_empty(article.site_name),
            lang: non_empty(article.lang),
            published_time: non_empty(article.published_time),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
