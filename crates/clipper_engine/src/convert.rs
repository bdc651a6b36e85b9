use dom_query::{Document, NodeRef, Selection};

use crate::normalize::{CODE_LANG_PREFIX, LINE_BREAK_MARKER};

pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

/// `html2md` conversion with fenced, language-annotated code blocks.
///
/// `pre` blocks are swapped for placeholders before conversion so their
/// text survives verbatim, then re-inserted as fences.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> String {
        let (prepared, blocks) = extract_code_blocks(html);
        let mut markdown = html2md::parse_html(&prepared);
        for (index, block) in blocks.iter().enumerate() {
            markdown = markdown.replace(&placeholder(index), &block.to_fence());
        }
        markdown.trim().to_string()
    }
}

struct CodeBlock {
    lang: String,
    text: String,
}

impl CodeBlock {
    fn to_fence(&self) -> String {
        let text = self.text.trim_end_matches('\n');
        let fence = if text.contains("```") { "~~~" } else { "```" };
        format!("{fence}{}\n{text}\n{fence}", self.lang)
    }
}

fn placeholder(index: usize) -> String {
    format!("CLIPPERCODEBLOCK{index}END")
}

fn extract_code_blocks(html: &str) -> (String, Vec<CodeBlock>) {
    let doc = Document::from(html);
    for node in doc.select(LINE_BREAK_MARKER).nodes() {
        Selection::from(*node).replace_with_html("\n");
    }
    for node in doc.select("pre br").nodes() {
        Selection::from(*node).replace_with_html("\n");
    }

    let mut blocks = Vec::new();
    for node in doc.select("pre").nodes() {
        // Nested <pre> is handled with its outermost block.
        if inside_pre(node) {
            continue;
        }
        let pre = Selection::from(*node);
        let lang = code_lang(&pre).unwrap_or_default();
        let text = pre.text().to_string();
        pre.replace_with_html(format!("<p>{}</p>", placeholder(blocks.len())));
        blocks.push(CodeBlock { lang, text });
    }

    (doc.select("body").inner_html().to_string(), blocks)
}

fn inside_pre(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case("pre"))
        {
            return true;
        }
        current = parent.parent();
    }
    false
}

fn code_lang(pre: &Selection) -> Option<String> {
    let from_id = |sel: &Selection| {
        sel.attr("id")
            .and_then(|id| id.strip_prefix(CODE_LANG_PREFIX).map(str::to_string))
    };
    from_id(pre).or_else(|| {
        pre.select("code")
            .nodes()
            .iter()
            .find_map(|node| from_id(&Selection::from(*node)))
    })
}
