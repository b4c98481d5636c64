//! Turns a slide record into what gets drawn. Pure: no state, no timing.

use crate::constants::*;
use crate::slide::{Slide, SlideKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub rank: usize,
    pub text: String,
    /// Seconds after the slide appears before this item enters.
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Title {
        title: String,
        subtitle: String,
    },
    Stat {
        value: String,
        label: String,
    },
    List {
        title: String,
        items: Vec<ListItem>,
    },
    Photo {
        image: Option<String>,
        title: String,
        subtitle: String,
    },
    Fallback {
        title: String,
    },
}

pub fn list_item_delay(position: usize) -> f32 {
    LIST_ITEM_DELAY_BASE + LIST_ITEM_DELAY_STEP * position as f32
}

pub fn compose(slide: &Slide) -> SlideContent {
    let text = |key: &str| slide.text(key).unwrap_or_default();

    match slide.kind {
        SlideKind::Intro | SlideKind::Outro => SlideContent::Title {
            title: text("title"),
            subtitle: text("subtitle"),
        },
        SlideKind::Stat => SlideContent::Stat {
            value: text("value"),
            label: text("label"),
        },
        SlideKind::List => SlideContent::List {
            title: text("title"),
            items: slide
                .items("items")
                .into_iter()
                .enumerate()
                .map(|(i, text)| ListItem {
                    rank: i + 1,
                    text,
                    delay: list_item_delay(i),
                })
                .collect(),
        },
        SlideKind::Photo => SlideContent::Photo {
            image: slide.text("image").filter(|s| !s.is_empty()),
            title: text("title"),
            subtitle: text("subtitle"),
        },
        SlideKind::Fallback => SlideContent::Fallback { title: text("title") },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn intro_and_outro_share_title_layout() {
        let intro = Slide::new("welcome", SlideKind::Intro)
            .with_field("title", "It's that time of year.")
            .with_field("subtitle", "Ready?");
        let outro = Slide::new("outro", SlideKind::Outro).with_field("title", "See you in 2026!");

        assert_eq!(
            compose(&intro),
            SlideContent::Title {
                title: "It's that time of year.".into(),
                subtitle: "Ready?".into()
            }
        );
        assert_eq!(
            compose(&outro),
            SlideContent::Title {
                title: "See you in 2026!".into(),
                subtitle: String::new()
            }
        );
    }

    #[test]
    fn list_items_are_ranked_and_staggered() {
        let slide = Slide::new("top", SlideKind::List)
            .with_field("title", "Top Languages")
            .with_field("items", json!(["JavaScript", "Python", "Rust"]));

        let SlideContent::List { title, items } = compose(&slide) else {
            panic!("expected a list");
        };
        assert_eq!(title, "Top Languages");
        assert_eq!(items.iter().map(|i| i.rank).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(items[2].text, "Rust");
        assert!((items[0].delay - 0.2).abs() < 1e-6);
        assert!((items[2].delay - 0.5).abs() < 1e-6);
    }

    #[test]
    fn stat_photo_and_fallback() {
        let stat = Slide::new("s", SlideKind::Stat)
            .with_field("value", 12931)
            .with_field("label", "Minutes");
        assert_eq!(
            compose(&stat),
            SlideContent::Stat {
                value: "12931".into(),
                label: "Minutes".into()
            }
        );

        let photo = Slide::new("p", SlideKind::Photo).with_field("title", "Best Memory");
        assert!(matches!(compose(&photo), SlideContent::Photo { image: None, .. }));

        let unknown = Slide::new("u", SlideKind::Fallback);
        assert_eq!(compose(&unknown), SlideContent::Fallback { title: String::new() });
    }
}
