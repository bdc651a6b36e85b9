use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde_json::Value;

use crate::record::StructuredRecord;
use crate::template::TemplateRenderer;

/// Templates selected for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTemplates<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub category: &'a str,
}

/// A rendered note ready for the vault writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedNote {
    /// Rendered filename template, not yet sanitised for the filesystem.
    pub file_name: String,
    pub extension: String,
    pub body: String,
    pub category: String,
    pub created_at: DateTime<Local>,
}

/// Combines a structured record with its templates.
///
/// Both the filename date and the body date are formatted from the single
/// `created_at` passed to [`NoteAssembler::assemble`].
pub struct NoteAssembler<'a> {
    renderer: &'a dyn TemplateRenderer,
    date_title_format: &'a str,
    date_content_format: &'a str,
}

impl<'a> NoteAssembler<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        date_title_format: &'a str,
        date_content_format: &'a str,
    ) -> Self {
        Self {
            renderer,
            date_title_format,
            date_content_format,
        }
    }

    pub fn assemble(
        &self,
        record: &StructuredRecord,
        templates: NoteTemplates<'_>,
        created_at: DateTime<Local>,
    ) -> FinishedNote {
        let mut body_data = record.template_data();
        body_data.insert(
            "date".into(),
            Value::String(format_date(&created_at, self.date_content_format)),
        );

        let mut name_data = record.filename_data();
        name_data.insert(
            "date".into(),
            Value::String(format_date(&created_at, self.date_title_format)),
        );

        FinishedNote {
            file_name: self.renderer.render(templates.title, &name_data),
            extension: "md".to_string(),
            body: self.renderer.render(templates.body, &body_data),
            category: templates.category.to_string(),
            created_at,
        }
    }
}

/// Formats `at` with a chrono format string. An invalid format string falls
/// back to RFC 3339 instead of panicking.
pub fn format_date<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        return at.to_rfc3339();
    }
    out
}

/// Reformats a page's published time for note bodies.
///
/// RFC 3339 timestamps and plain `YYYY-MM-DD` dates are reformatted; any
/// other value is kept verbatim.
pub fn format_published_time(raw: &str, format: &str) -> String {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return format_date(&parsed, format);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        {
            return format_date(&midnight, format);
        }
    }
    raw.to_string()
}
