use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

#[allow(clippy::expect_used)]
static BILIBILI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bilibili\.com)/(video)?/([a-z0-9]+)?").expect("BILIBILI_PATTERN regex")
});

#[allow(clippy::expect_used)]
static TIKTOK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(tiktok\.com)/(\S+)/(video)/(\d+)").expect("TIKTOK_PATTERN regex")
});

#[allow(clippy::expect_used)]
static VIMEO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(vimeo\.com)/(\d+)?").expect("VIMEO_PATTERN regex"));

/// A content source the clipper knows how to turn into a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Bilibili,
    TikTok,
    Vimeo,
    /// Fallback for any absolute http(s) URL. Always evaluated last.
    Website,
}

impl Source {
    /// Evaluation order used by the default registry.
    pub const PRIORITY: [Source; 4] = [
        Source::Bilibili,
        Source::TikTok,
        Source::Vimeo,
        Source::Website,
    ];

    /// Advisory recognition check. Never panics on malformed input.
    pub fn matches(self, input: &str) -> bool {
        if !is_valid_url(input) {
            return false;
        }
        match self {
            Source::Bilibili => BILIBILI_PATTERN.is_match(input),
            Source::TikTok => TIKTOK_PATTERN.is_match(input),
            Source::Vimeo => VIMEO_PATTERN.is_match(input),
            Source::Website => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Bilibili => "Bilibili",
            Source::TikTok => "TikTok",
            Source::Vimeo => "Vimeo",
            Source::Website => "Website",
        }
    }

    /// Human-readable message reported when extraction for this source fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Source::Bilibili => "Unable to parse Bilibili page.",
            Source::TikTok => "Unable to parse TikTok page.",
            Source::Vimeo => "Unable to parse Vimeo page.",
            Source::Website => "Unable to parse website.",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute URL with an http or https scheme.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input.trim())
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

/// Identifier segments captured from a Bilibili URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilibiliUrl {
    /// `bvid`, empty when the share link carries none.
    pub video_id: String,
}

impl BilibiliUrl {
    pub fn parse(input: &str) -> Option<Self> {
        let caps = BILIBILI_PATTERN.captures(input)?;
        Some(Self {
            video_id: group(&caps, 3),
        })
    }
}

/// Identifier and author segments captured from a TikTok URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TikTokUrl {
    pub author_name: String,
    pub video_id: String,
}

impl TikTokUrl {
    pub fn parse(input: &str) -> Option<Self> {
        let caps = TIKTOK_PATTERN.captures(input)?;
        Some(Self {
            author_name: group(&caps, 2),
            video_id: group(&caps, 4),
        })
    }

    pub fn author_url(&self) -> String {
        format!("https://www.tiktok.com/{}", self.author_name)
    }
}

/// Numeric video identifier captured from a Vimeo URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VimeoUrl {
    /// Empty for channel or showcase links without a numeric segment.
    pub video_id: String,
}

impl VimeoUrl {
    pub fn parse(input: &str) -> Option<Self> {
        let caps = VIMEO_PATTERN.captures(input)?;
        Some(Self {
            video_id: group(&caps, 2),
        })
    }
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
