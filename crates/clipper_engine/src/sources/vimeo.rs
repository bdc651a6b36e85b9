use clipper_core::{Source, StructuredRecord, VideoSourceSettings, VimeoRecord, VimeoUrl};
use serde::Deserialize;
use serde_json::Value;

use super::{fetch_page, ExtractContext};
use crate::meta::PageMeta;
use crate::{ExtractError, FailureKind};

const VIDEO_TYPE: &str = "VideoObject";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoObject {
    name: Option<String>,
    url: Option<String>,
    embed_url: Option<String>,
    author: Option<Authors>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Authors {
    Named(String),
    One(Person),
    Many(Vec<Person>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Person {
    name: Option<String>,
    url: Option<String>,
}

impl Authors {
    /// Name and profile URL of the first author.
    fn channel(&self) -> (String, String) {
        let person = match self {
            Authors::Named(name) => return (name.clone(), String::new()),
            Authors::One(person) => Some(person),
            Authors::Many(people) => people.first(),
        };
        person
            .map(|p| {
                (
                    p.name.clone().unwrap_or_default(),
                    p.url.clone().unwrap_or_default(),
                )
            })
            .unwrap_or_default()
    }
}

pub(crate) async fn extract(
    input: &str,
    ctx: &ExtractContext<'_>,
) -> Result<StructuredRecord, ExtractError> {
    let settings = &ctx.settings.vimeo;
    let page = fetch_page(ctx, Source::Vimeo, input, &settings.user_agent).await?;
    parse(input, &page.html, settings).map(StructuredRecord::Vimeo)
}

fn parse(
    input: &str,
    html: &str,
    settings: &VideoSourceSettings,
) -> Result<VimeoRecord, ExtractError> {
    let schema = PageMeta::parse(html).ld_json().ok_or_else(|| {
        ExtractError::new(
            Source::Vimeo,
            FailureKind::SchemaNotFound,
            "ld+json schema element not found",
        )
    })?;
    let video = find_video_object(&schema)?;

    let (channel_name, channel_url) = video
        .author
        .as_ref()
        .map(Authors::channel)
        .unwrap_or_default();

    Ok(VimeoRecord {
        video_id: VimeoUrl::parse(input)
            .map(|url| url.video_id)
            .unwrap_or_default(),
        video_title: video.name.unwrap_or_default(),
        video_url: video.url.unwrap_or_default(),
        video_player: player(video.embed_url.as_deref().unwrap_or_default(), settings),
        channel_name,
        channel_url,
    })
}

/// First `VideoObject` in the block, which may be a single object, an
/// array, or a `@graph` container.
fn find_video_object(schema: &str) -> Result<VideoObject, ExtractError> {
    let malformed = |message: String| {
        ExtractError::new(Source::Vimeo, FailureKind::MalformedSchema, message)
    };
    let root: Value = serde_json::from_str(schema).map_err(|err| malformed(err.to_string()))?;

    let candidates: Vec<&Value> = match &root {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![&root],
        },
        _ => Vec::new(),
    };

    let video = candidates
        .into_iter()
        .find(|item| has_type(item, VIDEO_TYPE))
        .ok_or_else(|| {
            ExtractError::new(
                Source::Vimeo,
                FailureKind::SchemaNotFound,
                "no VideoObject in ld+json schema",
            )
        })?;
    serde_json::from_value(video.clone()).map_err(|err| malformed(err.to_string()))
}

fn has_type(item: &Value, expected: &str) -> bool {
    match item.get("@type") {
        Some(Value::String(kind)) => kind == expected,
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some(expected)),
        _ => false,
    }
}

pub(crate) fn player(embed_url: &str, settings: &VideoSourceSettings) -> String {
    format!(
        r#"<iframe width="{}" height="{}" src="{embed_url}" title="Vimeo video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
        settings.embed_width, settings.embed_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_container_and_author_list_are_supported() {
        let schema = r#"{"@graph":[{"@type":"WebPage"},{"@type":["VideoObject"],"name":"N","author":[{"name":"Chan","url":"https://vimeo.com/chan"}]}]}"#;
        let video = find_video_object(schema).unwrap();
        assert_eq!(video.name.as_deref(), Some("N"));
        let channel = video.author.as_ref().map(Authors::channel).unwrap();
        assert_eq!(channel, ("Chan".to_string(), "https://vimeo.com/chan".to_string()));
    }

    #[test]
    fn plain_string_author() {
        let video = find_video_object(r#"[{"@type":"VideoObject","author":"Someone"}]"#).unwrap();
        let channel = video.author.as_ref().map(Authors::channel).unwrap();
        assert_eq!(channel, ("Someone".to_string(), String::new()));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = find_video_object("[{").unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedSchema);
    }

    #[test]
    fn schema_without_video_is_not_found() {
        let err = find_video_object(r#"[{"@type":"Person"}]"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::SchemaNotFound);
    }
}
