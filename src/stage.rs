use raylib::core::text::measure_text;
use raylib::prelude::*;

use storyshow::constants::*;
use storyshow::content::{SlideContent, compose};
use storyshow::input::{HitZones, Rect};
use storyshow::progress::Indicator;
use storyshow::theme::{Rgb, Theme};
use storyshow::{PlaybackObserver, Slide};

use crate::photo::KenBurns;

const TITLE_SIZE: i32 = 56;
const SUBTITLE_SIZE: i32 = 28;
const STAT_VALUE_SIZE: i32 = 110;
const LIST_ITEM_SIZE: i32 = 36;
const LINE_SPACING: i32 = 10;
const TEXT_MARGIN: f32 = 48.0;

/// Paints the current slide and the progress strip. Registered as the
/// controller's observer, so it is updated on every transition.
pub struct Stage {
    photos: Vec<Option<Texture2D>>,
    zones: HitZones,
    slide_duration: f32,

    current: usize,
    content: SlideContent,
    theme: Theme,
    shown_for: f32,
    paused: bool,
    ken_burns: Option<KenBurns>,
}

impl Stage {
    /// `photos` is index-aligned with the deck; `None` where a slide has no
    /// loadable image.
    pub fn new(photos: Vec<Option<Texture2D>>, zones: HitZones, slide_duration: f32) -> Self {
        Self {
            photos,
            zones,
            slide_duration,
            current: 0,
            content: SlideContent::Fallback { title: String::new() },
            theme: Theme::default(),
            shown_for: 0.0,
            paused: false,
            ken_burns: None,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.shown_for += dt;
        if let Some(ken_burns) = self.ken_burns.as_mut() {
            ken_burns.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, indicators: &[Indicator]) {
        d.clear_background(color(self.theme.background, 1.0));

        let photo = self.photos.get(self.current).and_then(Option::as_ref);
        if let (Some(image), Some(ken_burns)) = (photo, self.ken_burns.as_ref()) {
            ken_burns.draw(d, image);
            // Darken the photo so the caption stays readable
            d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, Color::new(0, 0, 0, 110));
        }

        self.draw_content(d);
        self.draw_progress(d, indicators);
    }

    fn draw_content(&self, d: &mut RaylibDrawHandle) {
        let alpha = entrance_alpha(self.shown_for);
        let rise = (1.0 - alpha) * 40.0;
        let text = self.theme.text;
        let center_y = RENDER_HEIGHT as f32 * 0.5 + rise;

        match &self.content {
            SlideContent::Title { title, subtitle }
            | SlideContent::Photo { title, subtitle, .. } => {
                let mut lines = wrap(title, TITLE_SIZE);
                let title_count = lines.len();
                lines.extend(wrap(subtitle, SUBTITLE_SIZE));
                let sizes: Vec<i32> = (0..lines.len())
                    .map(|i| if i < title_count { TITLE_SIZE } else { SUBTITLE_SIZE })
                    .collect();
                draw_block(d, &lines, &sizes, center_y, color(text, alpha));
            }
            SlideContent::Stat { value, label } => {
                let mut lines = wrap(value, STAT_VALUE_SIZE);
                let value_count = lines.len();
                lines.extend(wrap(label, SUBTITLE_SIZE));
                let sizes: Vec<i32> = (0..lines.len())
                    .map(|i| if i < value_count { STAT_VALUE_SIZE } else { SUBTITLE_SIZE })
                    .collect();
                draw_block(d, &lines, &sizes, center_y, color(text, alpha));
            }
            SlideContent::List { title, items } => {
                let top = RENDER_HEIGHT as f32 * 0.22 + rise;
                draw_centered(d, title, top as i32, TITLE_SIZE, color(text, alpha));

                let mut y = top + TITLE_SIZE as f32 + 48.0;
                for item in items {
                    let item_alpha = entrance_alpha(self.shown_for - item.delay);
                    let offset = (1.0 - item_alpha) * 30.0;
                    d.draw_text(
                        &item.rank.to_string(),
                        (TEXT_MARGIN + offset) as i32,
                        y as i32,
                        LIST_ITEM_SIZE,
                        color(text, item_alpha * 0.6),
                    );
                    d.draw_text(
                        &item.text,
                        (TEXT_MARGIN + 64.0 + offset) as i32,
                        y as i32,
                        LIST_ITEM_SIZE,
                        color(text, item_alpha),
                    );
                    y += LIST_ITEM_SIZE as f32 + 28.0;
                }
            }
            SlideContent::Fallback { title } => {
                let lines = wrap(title, TITLE_SIZE);
                let sizes = vec![TITLE_SIZE; lines.len()];
                draw_block(d, &lines, &sizes, center_y, color(text, alpha));
            }
        }
    }

    fn draw_progress(&self, d: &mut RaylibDrawHandle, indicators: &[Indicator]) {
        let text = self.theme.text;
        for (i, indicator) in indicators.iter().enumerate() {
            let bar = self.zones.indicator_bar(i);
            d.draw_rectangle_rounded(rectangle(bar), 1.0, 4, color(text, 0.35));

            if indicator.fill > 0.0 {
                let filled = Rect::new(bar.x, bar.y, bar.width * indicator.fill, bar.height);
                d.draw_rectangle_rounded(rectangle(filled), 1.0, 4, color(text, 1.0));
            }
        }
    }
}

impl PlaybackObserver for Stage {
    fn slide_changed(&mut self, index: usize, slide: &Slide) {
        self.current = index;
        self.content = compose(slide);
        self.theme = Theme::from_hints(&slide.theme());
        self.shown_for = 0.0;
        self.paused = false;

        let has_photo = self.photos.get(index).is_some_and(Option::is_some);
        self.ken_burns = has_photo.then(|| KenBurns::new(self.slide_duration));
    }

    fn paused(&mut self, _index: usize) {
        self.paused = true;
    }

    fn resumed(&mut self, _index: usize) {
        self.paused = false;
    }
}

/// Cubic-out fade from 0 to 1 over `ANIMATION_DURATION`, `elapsed` seconds in.
/// Negative `elapsed` (an item still waiting on its delay) stays at 0.
fn entrance_alpha(elapsed: f32) -> f32 {
    let t = elapsed.clamp(0.0, ANIMATION_DURATION);
    ease::cubic_out(t, 0.0, 1.0, ANIMATION_DURATION)
}

fn color(rgb: Rgb, alpha: f32) -> Color {
    Color::new(rgb.r, rgb.g, rgb.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// Greedy word wrap to the render width minus margins.
fn wrap(text: &str, font_size: i32) -> Vec<String> {
    let max_width = (RENDER_WIDTH as f32 - 2.0 * TEXT_MARGIN) as i32;
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{line} {word}") };
        if !line.is_empty() && measure_text(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, y: i32, font_size: i32, tint: Color) {
    let x = (RENDER_WIDTH - measure_text(text, font_size)) / 2;
    d.draw_text(text, x, y, font_size, tint);
}

/// Draws `lines` as one block vertically centered on `center_y`.
fn draw_block(
    d: &mut RaylibDrawHandle,
    lines: &[String],
    sizes: &[i32],
    center_y: f32,
    tint: Color,
) {
    let height: i32 = sizes.iter().map(|s| s + LINE_SPACING).sum::<i32>() - LINE_SPACING;
    let mut y = center_y as i32 - height / 2;
    for (line, size) in lines.iter().zip(sizes) {
        draw_centered(d, line, y, *size, tint);
        y += size + LINE_SPACING;
    }
}

/// Static message shown in place of the slides when no deck could be loaded.
pub fn draw_error(d: &mut RaylibDrawHandle, message: &str) {
    d.clear_background(Color::BLACK);
    d.draw_text("Error: deck could not be loaded.", 20, 20, 20, Color::RED);
    d.draw_text(message, 20, 50, 20, Color::RED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_fades_in_then_holds() {
        assert_eq!(entrance_alpha(0.0), 0.0);
        assert!((entrance_alpha(ANIMATION_DURATION) - 1.0).abs() < 1e-5);
        assert!((entrance_alpha(ANIMATION_DURATION * 4.0) - 1.0).abs() < 1e-5);

        let half = entrance_alpha(ANIMATION_DURATION * 0.5);
        assert!(half > 0.5 && half < 1.0, "cubic-out runs ahead of linear: {half}");
    }

    #[test]
    fn delayed_list_item_stays_hidden() {
        assert_eq!(entrance_alpha(-0.35), 0.0);
        let early = entrance_alpha(0.2 - LIST_ITEM_DELAY_BASE - LIST_ITEM_DELAY_STEP);
        assert_eq!(early, 0.0);
    }
}
