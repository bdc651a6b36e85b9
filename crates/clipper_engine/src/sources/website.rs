use clipper_core::{
    format_published_time, reading_time_minutes, ArticleRecord, NotParsableRecord, Source,
    StructuredRecord,
};
use engine_logging::{engine_debug, engine_warn};
use url::Url;

use super::{fetch_page, ExtractContext};
use crate::meta::PageMeta;
use crate::{ExtractError, FailureKind};

const UNTITLED: &str = "No title";

pub(crate) async fn extract(
    input: &str,
    ctx: &ExtractContext<'_>,
) -> Result<StructuredRecord, ExtractError> {
    let page_url = Url::parse(input.trim())
        .map_err(|err| ExtractError::new(Source::Website, FailureKind::InvalidUrl, err.to_string()))?;
    let user_agent = &ctx.settings.website.user_agent;
    let page = fetch_page(ctx, Source::Website, page_url.as_str(), user_agent).await?;
    // Relative links resolve against where the page actually came from.
    let fetched_url = Url::parse(&page.final_url).unwrap_or_else(|_| page_url.clone());
    Ok(readable_record(&page_url, &fetched_url, &page.html, ctx))
}

/// Full article record, or the degraded record when the page has no
/// extractable article.
pub(crate) fn readable_record(
    page_url: &Url,
    fetched_url: &Url,
    html: &str,
    ctx: &ExtractContext<'_>,
) -> StructuredRecord {
    let preview_url = PageMeta::parse(html).preview_image().unwrap_or_default();

    let normalized = ctx.normalizer.parse(html, fetched_url);
    let base_url = normalized.base_url.to_string();
    let article = ctx
        .article_extractor
        .extract(&normalized.html(), &base_url);

    let Some(article) = article else {
        engine_warn!("Website not parseable: {}", page_url);
        return StructuredRecord::NotParsable(NotParsableRecord {
            article_url: page_url.to_string(),
            preview_url,
        });
    };

    let reading_time = reading_time_minutes(&article.text_content, article.lang.as_deref());
    engine_debug!(
        "Parsed article {:?} ({} min, lang {:?})",
        article.title,
        reading_time,
        article.lang
    );

    let title = article.title.trim();
    StructuredRecord::Article(ArticleRecord {
        article_title: if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title.to_string()
        },
        article_url: page_url.to_string(),
        article_reading_time: reading_time,
        article_content: ctx.converter.to_markdown(&article.content_html),
        site_name: article.site_name.unwrap_or_default(),
        author: article.byline.unwrap_or_default(),
        preview_url,
        published_time: article
            .published_time
            .map(|raw| format_published_time(&raw, &ctx.settings.date_content_format))
            .unwrap_or_default(),
    })
}
