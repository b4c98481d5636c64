use serde::Deserialize;
use serde_json::{Map, Value};

/// What a slide shows. Unknown kinds in the deck data become `Fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SlideKind {
    Intro,
    Stat,
    List,
    Photo,
    Outro,
    #[default]
    Fallback,
}

impl From<String> for SlideKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "intro" => SlideKind::Intro,
            "stat" => SlideKind::Stat,
            "list" => SlideKind::List,
            "photo" => SlideKind::Photo,
            "outro" => SlideKind::Outro,
            _ => SlideKind::Fallback,
        }
    }
}

/// Optional per-slide colors, passed through to whoever paints the slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeHints<'a> {
    pub bg_color: Option<&'a str>,
    pub text_color: Option<&'a str>,
}

/// One slide record as supplied by the deck.
///
/// Playback only relies on `id` and the slide's position in the deck. The
/// remaining fields are display data for the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: SlideKind,

    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Slide {
    pub fn new(id: impl Into<String>, kind: SlideKind) -> Self {
        Self {
            id: id.into(),
            kind,
            bg_color: None,
            text_color: None,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn theme(&self) -> ThemeHints<'_> {
        ThemeHints {
            bg_color: self.bg_color.as_deref(),
            text_color: self.text_color.as_deref(),
        }
    }

    /// Display field as text. Numbers and booleans are stringified, anything
    /// else (missing, null, arrays, objects) yields `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Display field as a list of text entries, skipping entries that are not
    /// scalar values.
    pub fn items(&self, key: &str) -> Vec<String> {
        let Some(Value::Array(values)) = self.fields.get(key) else {
            return Vec::new();
        };
        values
            .iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_and_keeps_display_fields() {
        let slide: Slide = serde_json::from_str(
            r##"{
                "id": "stat-1",
                "type": "stat",
                "bg_color": "#03DAC6",
                "value": "12,931",
                "label": "Minutes Coding"
            }"##,
        )
        .unwrap();

        assert_eq!(slide.kind, SlideKind::Stat);
        assert_eq!(slide.theme().bg_color, Some("#03DAC6"));
        assert_eq!(slide.theme().text_color, None);
        assert_eq!(slide.text("value").as_deref(), Some("12,931"));
        assert!(!slide.fields.contains_key("bg_color"));
        assert!(!slide.fields.contains_key("type"));
    }

    #[test]
    fn unknown_or_missing_kind_is_fallback() {
        let odd: Slide = serde_json::from_str(r#"{"id": "x", "type": "video"}"#).unwrap();
        let bare: Slide = serde_json::from_str(r#"{"id": "y"}"#).unwrap();
        assert_eq!(odd.kind, SlideKind::Fallback);
        assert_eq!(bare.kind, SlideKind::Fallback);
    }

    #[test]
    fn items_skips_nested_values() {
        let slide = Slide::new("list", SlideKind::List)
            .with_field("items", serde_json::json!(["Rust", 42, {"nested": true}, "CSS"]));
        assert_eq!(slide.items("items"), vec!["Rust", "42", "CSS"]);
        assert!(slide.items("missing").is_empty());
    }
}
