use rand::Rng;
use raylib::prelude::*;
use storyshow::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// Slow zoom and pan across a photo while its slide is up.
pub struct KenBurns {
    direction: PanDirection,
    scale: f32,
    pan: f32,

    tween_scale: ease::Tween,
    tween_pan: ease::Tween,
}

impl KenBurns {
    pub fn new(duration: f32) -> Self {
        // Randomly choose a panning direction
        let direction = match rand::rng().random_range(0..4) {
            0 => PanDirection::LeftToRight,
            1 => PanDirection::RightToLeft,
            2 => PanDirection::TopToBottom,
            _ => PanDirection::BottomToTop,
        };

        Self {
            direction,
            scale: 1.0,
            pan: 0.0,
            tween_scale: ease::Tween::new(ease::linear_none, 1.0, KEN_BURNS_ZOOM, duration),
            tween_pan: ease::Tween::new(ease::linear_none, 0.0, 1.0, duration),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.scale = self.tween_scale.apply(dt);
        self.pan = self.tween_pan.apply(dt);
    }

    /// Part of a `tex_width` x `tex_height` texture to show in the render
    /// target: a crop with the target's aspect ratio, shrunk by the current
    /// zoom and slid along the pan direction.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        let aspect = RENDER_WIDTH as f32 / RENDER_HEIGHT as f32;
        let (base_width, base_height) = if tex_width / tex_height > aspect {
            (tex_height * aspect, tex_height)
        } else {
            (tex_width, tex_width / aspect)
        };

        let width = base_width * self.scale;
        let height = base_height * self.scale;
        let slack_x = tex_width - width;
        let slack_y = tex_height - height;
        let t = self.pan.clamp(0.0, 1.0);

        let (x, y) = match self.direction {
            PanDirection::LeftToRight => (slack_x * t, slack_y * 0.5),
            PanDirection::RightToLeft => (slack_x * (1.0 - t), slack_y * 0.5),
            PanDirection::TopToBottom => (slack_x * 0.5, slack_y * t),
            PanDirection::BottomToTop => (slack_x * 0.5, slack_y * (1.0 - t)),
        };

        Rectangle::new(x, y, width, height)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, image: &Texture2D) {
        let source = self.source_rect(image.width() as f32, image.height() as f32);
        d.draw_texture_pro(
            image,
            source,
            Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
