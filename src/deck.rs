use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::slide::Slide;

/// Deck-level metadata. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
}

#[derive(Deserialize)]
struct DeckFile {
    #[serde(default)]
    meta: DeckMeta,
    #[serde(default)]
    slides: Option<Vec<Slide>>,
}

/// Ordered, non-empty sequence of slides with unique ids, fixed for a
/// playback session.
#[derive(Debug, Clone)]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(Error::DuplicateSlideId(slide.id.clone()));
            }
        }

        Ok(Self {
            meta: DeckMeta::default(),
            slides,
        })
    }

    pub fn with_meta(mut self, meta: DeckMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DeckFile = serde_json::from_str(json)?;
        Ok(Self::new(file.slides.unwrap_or_default())?.with_meta(file.meta))
    }

    /// Loads a deck file. A path that does not exist is reported as missing
    /// data rather than a generic I/O failure.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::MissingData(path.to_path_buf()),
            _ => Error::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let deck = Self::from_json_str(&json)?;
        info!(path = %path.display(), slides = deck.len(), "deck loaded");
        Ok(deck)
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::slide::SlideKind;

    const WRAPPED: &str = r##"{
        "meta": { "title": "2025 Wrapped", "user_name": "Dev", "theme_color": "#BB86FC" },
        "slides": [
            { "id": "welcome", "type": "intro", "title": "It's that time of year." },
            { "id": "stat-1", "type": "stat", "value": "12,931", "label": "Minutes Coding" },
            { "id": "outro", "type": "outro", "title": "See you in 2026!" }
        ]
    }"##;

    #[test]
    fn parses_meta_and_slides_in_order() {
        let deck = Deck::from_json_str(WRAPPED).unwrap();
        assert_eq!(deck.len(), 3);
        assert!(deck.get(3).is_none());
        assert_eq!(deck.meta().title.as_deref(), Some("2025 Wrapped"));
        let ids: Vec<_> = deck.slides().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["welcome", "stat-1", "outro"]);
        assert_eq!(deck.get(2).map(|s| s.kind), Some(SlideKind::Outro));
    }

    #[test]
    fn rejects_empty_and_missing_slides() {
        assert!(matches!(Deck::from_json_str(r#"{"slides": []}"#), Err(Error::EmptyDeck)));
        assert!(matches!(Deck::from_json_str(r#"{"meta": {}}"#), Err(Error::EmptyDeck)));
        assert!(matches!(Deck::from_json_str(r#"{"slides": null}"#), Err(Error::EmptyDeck)));
        assert!(matches!(Deck::new(Vec::new()), Err(Error::EmptyDeck)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let slides = vec![
            Slide::new("a", SlideKind::Intro),
            Slide::new("b", SlideKind::Stat),
            Slide::new("a", SlideKind::Outro),
        ];
        match Deck::new(slides) {
            Err(Error::DuplicateSlideId(id)) => assert_eq!(id, "a"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Deck::from_json_str("{ slides: "), Err(Error::Parse(_))));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WRAPPED.as_bytes()).unwrap();
        let deck = Deck::load(file.path()).unwrap();
        assert_eq!(deck.len(), 3);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere.json");
        match Deck::load(&missing) {
            Err(Error::MissingData(path)) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
