use serde::{Deserialize, Serialize};

use crate::note::NoteTemplates;
use crate::record::StructuredRecord;

const CHROME_103_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Safari/537.36";
const CHROME_108_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Everything the pipeline needs to know about the user's preferences.
///
/// Passed explicitly into the extractors and the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipperSettings {
    /// chrono format string used in filenames.
    pub date_title_format: String,
    /// chrono format string used inside note bodies.
    pub date_content_format: String,
    pub bilibili: VideoSourceSettings,
    pub tiktok: VideoSourceSettings,
    pub vimeo: VideoSourceSettings,
    pub website: WebsiteSettings,
    pub images: ImageSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSourceSettings {
    pub note_title_template: String,
    pub note_template: String,
    pub content_type_slug: String,
    pub embed_width: u32,
    pub embed_height: u32,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteSettings {
    pub parsable_title_template: String,
    pub parsable_note_template: String,
    pub not_parsable_title_template: String,
    pub not_parsable_note_template: String,
    pub content_type_slug: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub download_images: bool,
    pub assets_dir: String,
    /// Store images of each article in its own subdirectory of `assets_dir`.
    pub download_images_in_article_dir: bool,
}

impl ClipperSettings {
    pub fn video(&self, record: &StructuredRecord) -> Option<&VideoSourceSettings> {
        match record {
            StructuredRecord::Bilibili(_) => Some(&self.bilibili),
            StructuredRecord::TikTok(_) => Some(&self.tiktok),
            StructuredRecord::Vimeo(_) => Some(&self.vimeo),
            StructuredRecord::Article(_) | StructuredRecord::NotParsable(_) => None,
        }
    }

    /// Filename and body templates responsible for `record`.
    pub fn templates_for(&self, record: &StructuredRecord) -> NoteTemplates<'_> {
        if let Some(video) = self.video(record) {
            return NoteTemplates {
                title: &video.note_title_template,
                body: &video.note_template,
                category: &video.content_type_slug,
            };
        }
        let website = &self.website;
        match record {
            StructuredRecord::NotParsable(_) => NoteTemplates {
                title: &website.not_parsable_title_template,
                body: &website.not_parsable_note_template,
                category: &website.content_type_slug,
            },
            _ => NoteTemplates {
                title: &website.parsable_title_template,
                body: &website.parsable_note_template,
                category: &website.content_type_slug,
            },
        }
    }
}

impl Default for ClipperSettings {
    fn default() -> Self {
        Self {
            date_title_format: "%Y-%m-%d %H-%M-%S".to_string(),
            date_content_format: "%Y-%m-%d".to_string(),
            bilibili: VideoSourceSettings {
                note_title_template: "{{ title }}".to_string(),
                note_template: "[[ReadItLater]] [[Bilibili]]\n\n# [{{ videoTitle }}]({{ videoURL }})\n\n{{ videoPlayer }}\n".to_string(),
                content_type_slug: "bilibili".to_string(),
                embed_width: 560,
                embed_height: 315,
                user_agent: CHROME_103_UA.to_string(),
            },
            tiktok: VideoSourceSettings {
                note_title_template: "TikTok from {{ authorName }} ({{ date }})".to_string(),
                note_template: "[[ReadItLater]] [[TikTok]]\n\n{{ videoDescription }}\n\n[{{ videoURL }}]({{ videoURL }})\n\n{{ videoPlayer }}\n".to_string(),
                content_type_slug: "tiktok".to_string(),
                embed_width: 325,
                embed_height: 760,
                user_agent: CHROME_108_UA.to_string(),
            },
            vimeo: VideoSourceSettings {
                note_title_template: "{{ title }}".to_string(),
                note_template: "[[ReadItLater]] [[Vimeo]]\n\n# [{{ videoTitle }}]({{ videoURL }})\n\n[{{ channelName }}]({{ channelURL }})\n\n{{ videoPlayer }}\n".to_string(),
                content_type_slug: "vimeo".to_string(),
                embed_width: 560,
                embed_height: 315,
                user_agent: CHROME_108_UA.to_string(),
            },
            website: WebsiteSettings::default(),
            images: ImageSettings {
                download_images: false,
                assets_dir: "ReadItLater Inbox/assets".to_string(),
                download_images_in_article_dir: false,
            },
        }
    }
}

impl Default for VideoSourceSettings {
    fn default() -> Self {
        Self {
            note_title_template: "{{ title }}".to_string(),
            note_template: "{{ videoPlayer }}\n".to_string(),
            content_type_slug: "video".to_string(),
            embed_width: 560,
            embed_height: 315,
            user_agent: CHROME_108_UA.to_string(),
        }
    }
}

impl Default for WebsiteSettings {
    fn default() -> Self {
        Self {
            parsable_title_template: "{{ title }}".to_string(),
            parsable_note_template: "[[ReadItLater]] [[Article]]\n\n# [{{ articleTitle }}]({{ articleURL }})\n\n{{ articleContent }}\n".to_string(),
            not_parsable_title_template: "Article {{ date }}".to_string(),
            not_parsable_note_template: "[[ReadItLater]] [[Article]]\n\n[{{ articleURL }}]({{ articleURL }})\n\n![]({{ previewURL }})\n".to_string(),
            content_type_slug: "article".to_string(),
            user_agent: CHROME_108_UA.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NotParsableRecord, VimeoRecord};

    #[test]
    fn degraded_record_uses_not_parsable_templates() {
        let settings = ClipperSettings::default();
        let record = StructuredRecord::NotParsable(NotParsableRecord::default());
        let templates = settings.templates_for(&record);
        assert_eq!(templates.title, settings.website.not_parsable_title_template);
        assert_eq!(templates.category, "article");
    }

    #[test]
    fn video_record_uses_its_own_templates() {
        let settings = ClipperSettings::default();
        let record = StructuredRecord::Vimeo(VimeoRecord::default());
        assert_eq!(settings.templates_for(&record).category, "vimeo");
    }
}
