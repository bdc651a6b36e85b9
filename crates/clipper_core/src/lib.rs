//! Clipper core: source recognition, structured records and note assembly.
//!
//! Everything in this crate is pure; network and filesystem access live in
//! `clipper_engine`.
mod note;
mod reading;
mod record;
mod registry;
mod settings;
mod source;
mod template;

pub use note::{format_date, format_published_time, FinishedNote, NoteAssembler, NoteTemplates};
pub use reading::{reading_time_minutes, word_count, words_per_minute, DEFAULT_WORDS_PER_MINUTE};
pub use record::{
    ArticleRecord, BilibiliRecord, NotParsableRecord, StructuredRecord, TikTokRecord, VimeoRecord,
};
pub use registry::SourceRegistry;
pub use settings::{ClipperSettings, ImageSettings, VideoSourceSettings, WebsiteSettings};
pub use source::{is_valid_url, BilibiliUrl, Source, TikTokUrl, VimeoUrl};
pub use template::{PlaceholderRenderer, TemplateRenderer};
