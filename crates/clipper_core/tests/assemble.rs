use chrono::{Local, TimeZone};
use clipper_core::{
    ArticleRecord, ClipperSettings, NotParsableRecord, NoteAssembler, NoteTemplates,
    PlaceholderRenderer, StructuredRecord, TikTokRecord,
};
use pretty_assertions::assert_eq;

fn captured() -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .unwrap()
}

#[test]
fn filename_and_body_dates_share_one_timestamp() {
    let assembler = NoteAssembler::new(&PlaceholderRenderer, "%Y-%m-%d %H-%M-%S", "%d/%m/%Y");
    let record = StructuredRecord::TikTok(TikTokRecord {
        author_name: "@someone".into(),
        ..TikTokRecord::default()
    });
    let templates = NoteTemplates {
        title: "{{ authorName }} {{ date }}",
        body: "clipped {{ date }}",
        category: "tiktok",
    };

    let note = assembler.assemble(&record, templates, captured());

    assert_eq!(note.file_name, "@someone 2024-01-02 03-04-05");
    assert_eq!(note.body, "clipped 02/01/2024");
    assert_eq!(note.created_at, captured());
    assert_eq!(note.extension, "md");
    assert_eq!(note.category, "tiktok");
}

#[test]
fn article_note_renders_default_templates() {
    let settings = ClipperSettings::default();
    let assembler = NoteAssembler::new(
        &PlaceholderRenderer,
        &settings.date_title_format,
        &settings.date_content_format,
    );
    let record = StructuredRecord::Article(ArticleRecord {
        article_title: "Rust in Production".into(),
        article_url: "https://example.com/rust".into(),
        article_content: "Body text".into(),
        ..ArticleRecord::default()
    });

    let note = assembler.assemble(&record, settings.templates_for(&record), captured());

    assert_eq!(note.file_name, "Rust in Production");
    assert_eq!(
        note.body,
        "[[ReadItLater]] [[Article]]\n\n# [Rust in Production](https://example.com/rust)\n\nBody text\n"
    );
    assert_eq!(note.category, "article");
}

#[test]
fn degraded_note_keeps_url_and_preview() {
    let settings = ClipperSettings::default();
    let assembler = NoteAssembler::new(
        &PlaceholderRenderer,
        &settings.date_title_format,
        &settings.date_content_format,
    );
    let record = StructuredRecord::NotParsable(NotParsableRecord {
        article_url: "https://x/page".into(),
        preview_url: "https://x/img.png".into(),
    });

    let note = assembler.assemble(&record, settings.templates_for(&record), captured());

    assert_eq!(note.file_name, "Article 2024-01-02 03-04-05");
    assert!(note.body.contains("[https://x/page](https://x/page)"));
    assert!(note.body.contains("![](https://x/img.png)"));
}
