//! Per-source extraction: fetched page (or the URL itself) to structured record.

pub(crate) mod bilibili;
pub(crate) mod tiktok;
pub(crate) mod vimeo;
pub(crate) mod website;

use clipper_core::{ClipperSettings, Source};
use engine_logging::engine_warn;

use crate::convert::Converter;
use crate::decode::decode_html;
use crate::extract::ArticleExtractor;
use crate::fetch::Fetcher;
use crate::normalize::DocumentNormalizer;
use crate::ExtractError;

/// Collaborators shared by every extractor for one request.
pub(crate) struct ExtractContext<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub settings: &'a ClipperSettings,
    pub normalizer: &'a DocumentNormalizer,
    pub article_extractor: &'a dyn ArticleExtractor,
    pub converter: &'a dyn Converter,
}

pub(crate) struct FetchedPage {
    pub html: String,
    pub final_url: String,
}

pub(crate) async fn fetch_page(
    ctx: &ExtractContext<'_>,
    source: Source,
    url: &str,
    user_agent: &str,
) -> Result<FetchedPage, ExtractError> {
    let output = ctx
        .fetcher
        .fetch(url, user_agent)
        .await
        .map_err(|err| ExtractError::fetch(source, err))?;
    let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref());
    if decoded.had_errors {
        engine_warn!(
            "{} contained bytes invalid for {}; replaced",
            url,
            decoded.encoding_label
        );
    }
    Ok(FetchedPage {
        html: decoded.html,
        final_url: output.metadata.final_url,
    })
}
