use std::sync::Arc;

use chrono::{DateTime, Local};
use clipper_core::{
    ClipperSettings, FinishedNote, NoteAssembler, PlaceholderRenderer, Source, SourceRegistry,
    StructuredRecord, TemplateRenderer,
};
use engine_logging::{engine_debug, engine_error, engine_info};

use crate::convert::{Converter, Html2MdConverter};
use crate::extract::{ArticleExtractor, ReadabilityExtractor};
use crate::fetch::Fetcher;
use crate::filename::sanitize_filename;
use crate::images::{ImageReplacer, KeepRemoteImages};
use crate::normalize::DocumentNormalizer;
use crate::sources::{self, ExtractContext};
use crate::ExtractError;

/// Input string to finished note: dispatch, extract, assemble.
///
/// Holds no per-request state; one instance serves concurrent requests.
pub struct Clipper {
    settings: ClipperSettings,
    registry: SourceRegistry,
    fetcher: Arc<dyn Fetcher>,
    renderer: Arc<dyn TemplateRenderer>,
    images: Arc<dyn ImageReplacer>,
    article_extractor: Arc<dyn ArticleExtractor>,
    converter: Arc<dyn Converter>,
    normalizer: DocumentNormalizer,
}

impl Clipper {
    pub fn new(settings: ClipperSettings, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            settings,
            registry: SourceRegistry::default(),
            fetcher,
            renderer: Arc::new(PlaceholderRenderer),
            images: Arc::new(KeepRemoteImages),
            article_extractor: Arc::new(ReadabilityExtractor),
            converter: Arc::new(Html2MdConverter),
            normalizer: DocumentNormalizer::default(),
        }
    }

    pub fn with_registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_image_replacer(mut self, images: Arc<dyn ImageReplacer>) -> Self {
        self.images = images;
        self
    }

    pub fn with_article_extractor(mut self, extractor: Arc<dyn ArticleExtractor>) -> Self {
        self.article_extractor = extractor;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn Converter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn settings(&self) -> &ClipperSettings {
        &self.settings
    }

    pub fn dispatch(&self, input: &str) -> Option<Source> {
        self.registry.dispatch(input)
    }

    /// Clips `input`. `Ok(None)` means the input is not a recognised content
    /// request; nothing was fetched.
    pub async fn clip(&self, input: &str) -> Result<Option<FinishedNote>, ExtractError> {
        let created_at = Local::now();
        let Some(source) = self.dispatch(input) else {
            engine_debug!("No source recognises input ({} chars)", input.len());
            return Ok(None);
        };
        self.clip_as(source, input, created_at).await.map(Some)
    }

    /// Clips `input` with an already chosen source. `created_at` is used for
    /// every date in the note.
    pub async fn clip_as(
        &self,
        source: Source,
        input: &str,
        created_at: DateTime<Local>,
    ) -> Result<FinishedNote, ExtractError> {
        engine_info!("Clipping {} as {}", input.trim(), source);
        let record = self.extract(source, input).await.inspect_err(|err| {
            engine_error!("{}", err);
        })?;
        Ok(self.assemble(&record, created_at).await)
    }

    pub async fn extract(
        &self,
        source: Source,
        input: &str,
    ) -> Result<StructuredRecord, ExtractError> {
        let input = input.trim();
        let ctx = ExtractContext {
            fetcher: self.fetcher.as_ref(),
            settings: &self.settings,
            normalizer: &self.normalizer,
            article_extractor: self.article_extractor.as_ref(),
            converter: self.converter.as_ref(),
        };
        match source {
            Source::Bilibili => sources::bilibili::extract(input, &ctx).await,
            Source::TikTok => sources::tiktok::extract(input, &ctx).await,
            Source::Vimeo => sources::vimeo::extract(input, &ctx).await,
            Source::Website => sources::website::extract(input, &ctx).await,
        }
    }

    pub async fn assemble(
        &self,
        record: &StructuredRecord,
        created_at: DateTime<Local>,
    ) -> FinishedNote {
        let assembler = NoteAssembler::new(
            self.renderer.as_ref(),
            &self.settings.date_title_format,
            &self.settings.date_content_format,
        );
        let mut note =
            assembler.assemble(record, self.settings.templates_for(record), created_at);

        let images = &self.settings.images;
        if record.source() == Source::Website && images.download_images {
            let assets_dir = assets_dir_for(
                &images.assets_dir,
                &note.file_name,
                images.download_images_in_article_dir,
            );
            let body = std::mem::take(&mut note.body);
            note.body = self.images.replace_images(body, &assets_dir).await;
        }
        note
    }
}

fn assets_dir_for(assets_dir: &str, note_name: &str, per_article: bool) -> String {
    if per_article {
        format!(
            "{}/{}/",
            assets_dir.trim_end_matches('/'),
            sanitize_filename(note_name)
        )
    } else {
        assets_dir.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::assets_dir_for;

    #[test]
    fn per_article_assets_dir_uses_sanitised_note_name() {
        assert_eq!(assets_dir_for("assets/", "A: B", true), "assets/A_ B/");
        assert_eq!(assets_dir_for("assets", "A: B", false), "assets");
    }
}
