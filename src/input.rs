//! User input: discrete events, the commands they map to, and hit-testing
//! of pointer positions against the screen zones.

use crate::constants::*;

/// Logical input events produced by the presenter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TapPrev,
    TapNext,
    TapIndicator(usize),
    HoldStart,
    HoldEnd,
    KeyNext,
    KeyPrev,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Advance,
    Retreat,
    GoTo(usize),
    Pause,
    Resume,
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::TapPrev | InputEvent::KeyPrev => Command::Retreat,
            InputEvent::TapNext | InputEvent::KeyNext => Command::Advance,
            InputEvent::TapIndicator(index) => Command::GoTo(index),
            InputEvent::HoldStart => Command::Pause,
            InputEvent::HoldEnd => Command::Resume,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Screen layout in render coordinates: the progress strip along the top,
/// a rewind zone on the left and an advance zone covering the rest.
#[derive(Clone, Copy, Debug)]
pub struct HitZones {
    width: f32,
    height: f32,
    slide_count: usize,
}

impl HitZones {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        Self { width, height, slide_count }
    }

    /// Touch target of indicator `index`, a full-height cell of the strip.
    pub fn indicator_cell(&self, index: usize) -> Rect {
        let count = self.slide_count.max(1) as f32;
        let usable = self.width - 2.0 * INDICATOR_MARGIN - INDICATOR_GAP * (count - 1.0);
        let bar_width = (usable / count).max(0.0);
        let x = INDICATOR_MARGIN + index as f32 * (bar_width + INDICATOR_GAP);
        Rect::new(x, 0.0, bar_width, INDICATOR_STRIP_HEIGHT)
    }

    /// Drawn bar of indicator `index`, inside its cell.
    pub fn indicator_bar(&self, index: usize) -> Rect {
        let cell = self.indicator_cell(index);
        Rect::new(cell.x, INDICATOR_TOP, cell.width, INDICATOR_THICKNESS)
    }

    /// Resolves a tap at `(x, y)`. Positions outside the screen yield
    /// nothing.
    pub fn tap(&self, x: f32, y: f32) -> Option<InputEvent> {
        if !Rect::new(0.0, 0.0, self.width, self.height).contains(x, y) {
            return None;
        }

        if y < INDICATOR_STRIP_HEIGHT {
            // Gaps between cells fall through to the prev/next zones
            let hit = (0..self.slide_count).find(|&i| self.indicator_cell(i).contains(x, y));
            if let Some(index) = hit {
                return Some(InputEvent::TapIndicator(index));
            }
        }

        if x < self.width * PREV_ZONE_FRACTION {
            Some(InputEvent::TapPrev)
        } else {
            Some(InputEvent::TapNext)
        }
    }

    /// Events for a pointer release at `(x, y)`: the hold ends first, then
    /// the tap is resolved, matching press, release, click order.
    pub fn release(&self, x: f32, y: f32) -> Vec<InputEvent> {
        let mut events = vec![InputEvent::HoldEnd];
        events.extend(self.tap(x, y));
        events
    }
}

/// Maps between window pixels and the fixed-size render target, which is
/// scaled to fit the window and centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    render_width: f32,
    render_height: f32,
}

impl Viewport {
    pub fn fit(
        window_width: f32,
        window_height: f32,
        render_width: f32,
        render_height: f32,
    ) -> Self {
        let scale = (window_width / render_width).min(window_height / render_height);
        Self {
            scale,
            offset_x: (window_width - render_width * scale) * 0.5,
            offset_y: (window_height - render_height * scale) * 0.5,
            render_width,
            render_height,
        }
    }

    /// Destination of the render target in window pixels.
    pub fn dest(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.render_width * self.scale,
            self.render_height * self.scale,
        )
    }

    pub fn to_render(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }
}
