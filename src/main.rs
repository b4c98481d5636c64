use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod engine;
mod photo;
mod stage;
mod texture_loader;

use storyshow::constants::*;
use storyshow::input::Viewport;
use storyshow::{Cli, Deck};

use crate::engine::StoryEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.playback_config()?;

    let deck = Deck::load(&cli.deck);
    let title = deck
        .as_ref()
        .ok()
        .and_then(|deck| deck.meta().title.clone())
        .unwrap_or_else(|| "Story".to_string());

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Deck ---
    let deck = match deck {
        Ok(deck) => deck,
        Err(e) => {
            show_error(&mut rl, &thread, &e.to_string());
            return Err(e).with_context(|| format!("loading deck {}", cli.deck.display()));
        }
    };

    let deck_dir = cli.deck.parent().unwrap_or(Path::new("."));
    let mut engine = StoryEngine::initialize(&mut rl, &thread, deck, deck_dir, config);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let events = engine.poll_input(&rl);
        engine.handle_input(&events);
        engine.render_frame(dt, &mut rl, &thread, &mut framebuffer);

        // Blit the portrait framebuffer, letterboxed, onto the window
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let viewport = Viewport::fit(
            d.get_screen_width() as f32,
            d.get_screen_height() as f32,
            RENDER_WIDTH as f32,
            RENDER_HEIGHT as f32,
        );
        let dest = viewport.dest();
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(dest.x, dest.y, dest.width, dest.height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    engine.shutdown();
    info!("window closed");
    Ok(())
}

/// Replaces the slides with a static error message for a few seconds.
fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let shown_at = Instant::now();
    while !rl.window_should_close() && shown_at.elapsed() < ERROR_SCREEN_DURATION {
        let mut d = rl.begin_drawing(thread);
        stage::draw_error(&mut d, message);
    }
}
