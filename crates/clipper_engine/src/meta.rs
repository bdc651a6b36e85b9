use std::sync::LazyLock;

use scraper::{Html, Selector};

#[allow(clippy::expect_used)]
static LD_JSON: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("LD_JSON selector")
});

/// Read-only view over a fetched page's `<head>` metadata.
pub struct PageMeta {
    doc: Html,
}

impl PageMeta {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// `content` of the first `<meta property=...>` whose property list
    /// contains `property` (whitespace-separated, like `[property~=...]`).
    pub fn property(&self, property: &str) -> Option<String> {
        self.first_content(&format!(r#"meta[property~="{property}"]"#))
    }

    pub fn name(&self, name: &str) -> Option<String> {
        self.first_content(&format!(r#"meta[name="{name}"]"#))
    }

    /// Open Graph image first, then the Twitter card image.
    pub fn preview_image(&self) -> Option<String> {
        self.property("og:image")
            .or_else(|| self.name("twitter:image"))
            .or_else(|| self.property("twitter:image"))
    }

    /// Text of the first `application/ld+json` script block.
    pub fn ld_json(&self) -> Option<String> {
        self.doc
            .select(&LD_JSON)
            .next()
            .map(|script| script.text().collect::<String>())
    }

    fn first_content(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.doc
            .select(&selector)
            .find_map(|meta| meta.value().attr("content"))
            .map(|content| content.trim().to_string())
    }
}
