use clipper_core::{BilibiliRecord, BilibiliUrl, Source, StructuredRecord, VideoSourceSettings};

use super::{fetch_page, ExtractContext};
use crate::meta::PageMeta;
use crate::ExtractError;

pub(crate) async fn extract(
    input: &str,
    ctx: &ExtractContext<'_>,
) -> Result<StructuredRecord, ExtractError> {
    let settings = &ctx.settings.bilibili;
    let page = fetch_page(ctx, Source::Bilibili, input, &settings.user_agent).await?;
    Ok(StructuredRecord::Bilibili(parse(input, &page.html, settings)))
}

fn parse(input: &str, html: &str, settings: &VideoSourceSettings) -> BilibiliRecord {
    let meta = PageMeta::parse(html);
    let video_id = BilibiliUrl::parse(input)
        .map(|url| url.video_id)
        .unwrap_or_default();
    BilibiliRecord {
        video_title: meta.property("og:title").unwrap_or_default(),
        video_url: input.to_string(),
        video_player: player(&video_id, settings),
        video_id,
    }
}

pub(crate) fn player(video_id: &str, settings: &VideoSourceSettings) -> String {
    format!(
        r#"<iframe width="{}" height="{}" src="https://player.bilibili.com/player.html?autoplay=0&bvid={video_id}" scrolling="no" border="0" frameborder="no" framespacing="0" allowfullscreen="true"></iframe>"#,
        settings.embed_width, settings.embed_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bvid_yields_empty_id() {
        let settings = VideoSourceSettings::default();
        let record = parse("https://www.bilibili.com//", "<html></html>", &settings);
        assert_eq!(record.video_id, "");
        assert_eq!(record.video_title, "");
        assert!(record.video_player.contains("bvid=\""));
    }
}
