use std::path::Path;
use std::time::Duration;

use raylib::prelude::*;
use tracing::warn;

use storyshow::constants::*;
use storyshow::input::{HitZones, InputEvent, Viewport};
use storyshow::{Deck, PlaybackConfig, PlaybackController, SlideKind};

use crate::stage::Stage;
use crate::texture_loader::{load_texture_with_exif_rotation, resolve_image_path};

/// Glue between the raylib window and the playback controller: polls input,
/// drives the session clock and paints each frame.
pub struct StoryEngine {
    controller: PlaybackController<Stage>,
    zones: HitZones,
}

impl StoryEngine {
    /// Loads photo textures and starts playback on the first slide.
    pub fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        deck: Deck,
        deck_dir: &Path,
        config: PlaybackConfig,
    ) -> Self {
        let mut photos = Vec::with_capacity(deck.len());
        for slide in deck.slides() {
            let path = match slide.kind {
                SlideKind::Photo => slide
                    .text("image")
                    .and_then(|source| resolve_image_path(deck_dir, &source)),
                _ => None,
            };
            let texture = path.and_then(|path| {
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        warn!(
                            slide = %slide.id,
                            "photo unavailable, using plain background: {:#}", e
                        );
                        None
                    }
                }
            });
            photos.push(texture);
        }

        let zones = HitZones::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, deck.len());
        let stage = Stage::new(photos, zones, config.slide_duration().as_secs_f32());

        Self {
            controller: PlaybackController::new(deck, config, stage),
            zones,
        }
    }

    /// Collects this frame's pointer and keyboard input into logical events.
    pub fn poll_input(&self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::HoldStart);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            let viewport = Viewport::fit(
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
                RENDER_WIDTH as f32,
                RENDER_HEIGHT as f32,
            );
            let mouse = rl.get_mouse_position();
            let (x, y) = viewport.to_render(mouse.x, mouse.y);
            events.extend(self.zones.release(x, y));
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            events.push(InputEvent::KeyNext);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(InputEvent::KeyPrev);
        }

        events
    }

    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            self.controller.handle_input(*event);
        }
    }

    /// Advances playback by `dt` seconds and renders into `framebuffer`.
    pub fn render_frame(
        &mut self,
        dt: f32,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        framebuffer: &mut RenderTexture2D,
    ) {
        self.controller.tick(Duration::from_secs_f32(dt.max(0.0)));
        self.controller.observer_mut().update(dt);

        let indicators = self.controller.progress().indicators(self.controller.now());
        let stage = self.controller.observer();

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            stage.draw(&mut d, &indicators);
        });
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }
}
