//! Structural corrections applied to a fetched page before heuristic
//! article extraction.
//!
//! Each [`Correction`] is a tree-in, tree-out step. The full pipeline is
//! idempotent: running it over its own output changes nothing.

use std::sync::LazyLock;

use dom_query::{Document, Selection};
use engine_logging::engine_trace;
use regex::Regex;
use url::Url;

/// Marker element standing in for `<br>` inside preformatted blocks.
pub const LINE_BREAK_MARKER: &str = "br-keep";

/// Prefix of the `id` given to code blocks with a detected language.
pub const CODE_LANG_PREFIX: &str = "code-lang-";

#[allow(clippy::expect_used)]
static HIGHLIGHT_LANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"highlight-(?:text|source)-([a-z0-9]+)").expect("HIGHLIGHT_LANG regex")
});

#[allow(clippy::expect_used)]
static LANGUAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-([a-z0-9]+)").expect("LANGUAGE_CLASS regex"));

const UNSAFE_ELEMENTS: &str = "script, style, noscript, object, embed, applet, frame, frameset";
const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction", "xlink:href"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Single `<base>` in `<head>` so relative links resolve after extraction.
    SetBase,
    /// Drop scripting from `<body>`.
    Sanitize,
    /// Replace `<br>` inside `<pre>` with [`LINE_BREAK_MARKER`].
    KeepPreLineBreaks,
    /// Some class names make the extractor treat headings as boilerplate.
    ClearHeadingClasses,
    /// Tag highlighted code with a `code-lang-<lang>` id.
    TagCodeLanguages,
}

impl Correction {
    pub const PIPELINE: [Correction; 5] = [
        Correction::SetBase,
        Correction::Sanitize,
        Correction::KeepPreLineBreaks,
        Correction::ClearHeadingClasses,
        Correction::TagCodeLanguages,
    ];

    fn apply(self, doc: &Document, page_url: &Url) {
        match self {
            Correction::SetBase => set_base(doc, page_url),
            Correction::Sanitize => sanitize_body(doc),
            Correction::KeepPreLineBreaks => keep_pre_line_breaks(doc),
            Correction::ClearHeadingClasses => {
                doc.select("h1, h2, h3, h4, h5, h6").remove_attr("class");
            }
            Correction::TagCodeLanguages => tag_code_languages(doc),
        }
    }
}

/// Page after normalisation, with the base URL the corrections settled on.
pub struct NormalizedDocument {
    pub document: Document,
    pub base_url: Url,
}

impl NormalizedDocument {
    pub fn html(&self) -> String {
        self.document.html().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct DocumentNormalizer {
    corrections: Vec<Correction>,
}

impl DocumentNormalizer {
    pub fn new(corrections: impl IntoIterator<Item = Correction>) -> Self {
        Self {
            corrections: corrections.into_iter().collect(),
        }
    }

    pub fn parse(&self, html: &str, page_url: &Url) -> NormalizedDocument {
        self.normalize(Document::from(html), page_url)
    }

    pub fn normalize(&self, document: Document, page_url: &Url) -> NormalizedDocument {
        for correction in &self.corrections {
            engine_trace!("applying {:?}", correction);
            correction.apply(&document, page_url);
        }
        let base_url = current_base(&document, page_url);
        NormalizedDocument { document, base_url }
    }
}

impl Default for DocumentNormalizer {
    fn default() -> Self {
        Self::new(Correction::PIPELINE)
    }
}

/// Base declared by the document, resolved against the page URL, or the
/// origin of the page URL.
pub fn current_base(doc: &Document, page_url: &Url) -> Url {
    doc.select("base[href]")
        .attr("href")
        .and_then(|href| page_url.join(href.trim()).ok())
        .or_else(|| page_url.join("/").ok())
        .unwrap_or_else(|| page_url.clone())
}

fn set_base(doc: &Document, page_url: &Url) {
    let base = current_base(doc, page_url);
    doc.select("base").remove();
    let head = doc.select("head");
    if head.is_empty() {
        return;
    }
    head.append_html(format!(r#"<base href="{}">"#, escape_attr(base.as_str())));
}

fn sanitize_body(doc: &Document) {
    doc.select("body").select(UNSAFE_ELEMENTS).remove();

    for node in doc.select("body, body *").nodes() {
        let sel = Selection::from(*node);
        for attr in node.attrs() {
            let name = attr.name.local.to_string();
            let lowered = name.to_ascii_lowercase();
            if lowered.starts_with("on") {
                sel.remove_attr(&name);
            } else if URL_ATTRIBUTES.contains(&lowered.as_str())
                && is_script_url(&attr.value)
            {
                sel.remove_attr(&name);
            }
        }
    }
}

fn is_script_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.starts_with("javascript:") || compact.starts_with("vbscript:")
}

fn keep_pre_line_breaks(doc: &Document) {
    let marker = format!("<{LINE_BREAK_MARKER}></{LINE_BREAK_MARKER}>");
    for node in doc.select("pre br").nodes() {
        Selection::from(*node).replace_with_html(marker.as_str());
    }
}

fn tag_code_languages(doc: &Document) {
    // GitHub-style wrappers: <div class="highlight highlight-source-rust"><pre>
    for node in doc
        .select(r#"[class*="highlight-text"], [class*="highlight-source"]"#)
        .nodes()
    {
        let wrapper = Selection::from(*node);
        let Some(lang) = capture_lang(&HIGHLIGHT_LANG, &wrapper) else {
            continue;
        };
        let Some(first) = wrapper.children().nodes().first().copied() else {
            continue;
        };
        if is_tag(first.node_name().as_deref(), "pre") {
            wrapper.remove_attr("data-snippet-clipboard-copy-content");
            Selection::from(first).set_attr("id", &format!("{CODE_LANG_PREFIX}{lang}"));
        }
    }

    // Prism / highlight.js: <code class="language-rust">
    for node in doc.select(r#"[class*="language-"]"#).nodes() {
        let sel = Selection::from(*node);
        if let Some(lang) = capture_lang(&LANGUAGE_CLASS, &sel) {
            sel.set_attr("id", &format!("{CODE_LANG_PREFIX}{lang}"));
        }
    }

    // Pygments without a language hint.
    for node in doc.select(".codehilite > pre").nodes() {
        let pre = Selection::from(*node);
        let first_is_code = node
            .first_child()
            .is_some_and(|child| is_tag(child.node_name().as_deref(), "code"));
        let class = pre.attr("class").map(|c| c.to_string()).unwrap_or_default();
        if !first_is_code && !class.contains("language") {
            pre.set_attr("id", &format!("{CODE_LANG_PREFIX}text"));
        }
    }
}

fn capture_lang(pattern: &Regex, sel: &Selection) -> Option<String> {
    let class = sel.attr("class")?;
    pattern
        .captures(&class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn is_tag(name: Option<&str>, expected: &str) -> bool {
    name.is_some_and(|name| name.eq_ignore_ascii_case(expected))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_urls_are_detected_through_obfuscation() {
        assert!(is_script_url(" java\tscript:alert(1)"));
        assert!(is_script_url("JAVASCRIPT:void(0)"));
        assert!(!is_script_url("https://example.com/javascript:"));
    }

    #[test]
    fn escapes_quotes_in_base_href() {
        assert_eq!(escape_attr(r#"https://x/?a="b"&c"#), "https://x/?a=&quot;b&quot;&amp;c");
    }
}
