use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("PLACEHOLDER regex")
});

/// Template rendering collaborator: turns a template and a flat data record
/// into text. The host may plug in a full template engine.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, data: &Map<String, Value>) -> String;
}

/// Substitutes `{{ key }}` with the scalar value stored under `key`.
/// Unknown keys render as an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, data: &Map<String, Value>) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| {
                data.get(&caps[1]).map(scalar_text).unwrap_or_default()
            })
            .into_owned()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn substitutes_strings_and_numbers() {
        let data = data(json!({"title": "Hello", "minutes": 4}));
        let out = PlaceholderRenderer.render("# {{title}} ({{ minutes }} min)", &data);
        assert_eq!(out, "# Hello (4 min)");
    }

    #[test]
    fn missing_keys_render_empty() {
        let out = PlaceholderRenderer.render("[{{ nope }}]", &Map::new());
        assert_eq!(out, "[]");
    }

    #[test]
    fn replacement_text_is_not_reinterpreted() {
        let data = data(json!({"a": "{{ b }} $1", "b": "x"}));
        assert_eq!(PlaceholderRenderer.render("{{ a }}", &data), "{{ b }} $1");
    }
}
