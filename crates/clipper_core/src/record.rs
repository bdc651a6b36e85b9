use serde::Serialize;
use serde_json::{Map, Value};

use crate::source::Source;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BilibiliRecord {
    pub video_id: String,
    pub video_title: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    pub video_player: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokRecord {
    pub video_id: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    pub video_description: String,
    pub video_player: String,
    pub author_name: String,
    #[serde(rename = "authorURL")]
    pub author_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VimeoRecord {
    pub video_id: String,
    pub video_title: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    pub video_player: String,
    pub channel_name: String,
    #[serde(rename = "channelURL")]
    pub channel_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub article_title: String,
    #[serde(rename = "articleURL")]
    pub article_url: String,
    pub article_reading_time: u32,
    pub article_content: String,
    pub site_name: String,
    pub author: String,
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    pub published_time: String,
}

/// Degraded website record: only the page URL and a best-effort preview image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotParsableRecord {
    #[serde(rename = "articleURL")]
    pub article_url: String,
    #[serde(rename = "previewURL")]
    pub preview_url: String,
}

/// Source-specific data handed to the note templates.
///
/// Every field of a variant is always serialised, possibly as an empty
/// string, so templates can rely on a fixed set of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredRecord {
    Bilibili(BilibiliRecord),
    TikTok(TikTokRecord),
    Vimeo(VimeoRecord),
    Article(ArticleRecord),
    NotParsable(NotParsableRecord),
}

impl StructuredRecord {
    pub fn source(&self) -> Source {
        match self {
            StructuredRecord::Bilibili(_) => Source::Bilibili,
            StructuredRecord::TikTok(_) => Source::TikTok,
            StructuredRecord::Vimeo(_) => Source::Vimeo,
            StructuredRecord::Article(_) | StructuredRecord::NotParsable(_) => Source::Website,
        }
    }

    /// Template data for the note body.
    pub fn template_data(&self) -> Map<String, Value> {
        let value = match self {
            StructuredRecord::Bilibili(r) => serde_json::to_value(r),
            StructuredRecord::TikTok(r) => serde_json::to_value(r),
            StructuredRecord::Vimeo(r) => serde_json::to_value(r),
            StructuredRecord::Article(r) => serde_json::to_value(r),
            StructuredRecord::NotParsable(r) => serde_json::to_value(r),
        };
        match value {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Reduced view used for the filename template.
    pub fn filename_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        match self {
            StructuredRecord::Bilibili(r) => {
                data.insert("title".into(), Value::String(r.video_title.clone()));
            }
            StructuredRecord::TikTok(r) => {
                data.insert("authorName".into(), Value::String(r.author_name.clone()));
            }
            StructuredRecord::Vimeo(r) => {
                data.insert("title".into(), Value::String(r.video_title.clone()));
            }
            StructuredRecord::Article(r) => {
                data.insert("title".into(), Value::String(r.article_title.clone()));
            }
            StructuredRecord::NotParsable(_) => {}
        }
        data
    }
}
