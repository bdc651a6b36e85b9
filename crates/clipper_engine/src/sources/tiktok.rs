use clipper_core::{Source, StructuredRecord, TikTokRecord, TikTokUrl, VideoSourceSettings};

use super::{fetch_page, ExtractContext};
use crate::meta::PageMeta;
use crate::ExtractError;

pub(crate) async fn extract(
    input: &str,
    ctx: &ExtractContext<'_>,
) -> Result<StructuredRecord, ExtractError> {
    let settings = &ctx.settings.tiktok;
    let page = fetch_page(ctx, Source::TikTok, input, &settings.user_agent).await?;
    Ok(StructuredRecord::TikTok(parse(input, &page.html, settings)))
}

/// Id and author come from the URL path; description and canonical URL
/// from the page.
fn parse(input: &str, html: &str, settings: &VideoSourceSettings) -> TikTokRecord {
    let meta = PageMeta::parse(html);
    let url = TikTokUrl::parse(input);
    let (video_id, author_name, author_url) = match &url {
        Some(url) => (url.video_id.clone(), url.author_name.clone(), url.author_url()),
        None => Default::default(),
    };
    TikTokRecord {
        video_url: meta
            .property("og:url")
            .unwrap_or_else(|| input.to_string()),
        video_description: meta.property("og:description").unwrap_or_default(),
        video_player: player(&video_id, settings),
        video_id,
        author_name,
        author_url,
    }
}

pub(crate) fn player(video_id: &str, settings: &VideoSourceSettings) -> String {
    format!(
        r#"<iframe width="{}" height="{}" src="https://www.tiktok.com/embed/v2/{video_id}"></iframe>"#,
        settings.embed_width, settings.embed_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_url_falls_back_to_input() {
        let input = "https://www.tiktok.com/@a/video/42";
        let record = parse(input, "<html></html>", &VideoSourceSettings::default());
        assert_eq!(record.video_url, input);
        assert_eq!(record.video_description, "");
        assert_eq!(record.author_url, "https://www.tiktok.com/@a");
    }
}
