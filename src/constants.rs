use std::time::Duration;

pub const RENDER_WIDTH: i32 = 720;            // Width of the portrait render texture
pub const RENDER_HEIGHT: i32 = 1280;          // Height of the portrait render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_SLIDE_DURATION_MS: u64 = 5000; // Time each slide stays up before auto-advance
pub const ANIMATION_DURATION: f32 = 0.6;      // Content entrance animation (seconds)
pub const LIST_ITEM_DELAY_BASE: f32 = 0.2;    // Delay before the first list item enters (seconds)
pub const LIST_ITEM_DELAY_STEP: f32 = 0.15;   // Extra delay per list item (seconds)
pub const KEN_BURNS_ZOOM: f32 = 0.9;          // Final source crop for photo slides

pub const PREV_ZONE_FRACTION: f32 = 0.3;      // Left share of the screen that rewinds
pub const INDICATOR_STRIP_HEIGHT: f32 = 48.0; // Touch target height of the progress strip
pub const INDICATOR_MARGIN: f32 = 16.0;       // Horizontal margin around the progress strip
pub const INDICATOR_GAP: f32 = 6.0;           // Gap between two progress bars
pub const INDICATOR_TOP: f32 = 20.0;          // Distance from the top edge to the bars
pub const INDICATOR_THICKNESS: f32 = 6.0;     // Drawn height of a progress bar

pub const DEFAULT_BG_COLOR: &str = "#121212";
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

pub const ERROR_SCREEN_DURATION: Duration = Duration::from_secs(5);
