// --- File: constants.rs ---
// --- Global Simulation Constants ---
use crate::utils::Rgb;

pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);
// Color of an organism at full life, blended towards DEAD_COLOR as life runs out
pub const ALIVE_COLOR: Rgb = Rgb::new(100, 150, 255);
pub const DEAD_COLOR: Rgb = Rgb::new(41, 0, 86);

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FRAMES_PER_SECOND: u32 = 100;
pub const FPS_UPDATE_INTERVAL_SECS: f64 = 1.0;

// --- View ---
pub const INITIAL_ZOOM: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.01;

// --- Seed organism ---
pub const INITIAL_POSITION: (f32, f32) = (400.0, 400.0);
pub const INITIAL_RADIUS: f32 = 5.0;
pub const INITIAL_PROPENSITY: f32 = 0.5;

// --- Per-tick rates and mutation ranges ---
pub const LIFE_DECAY_RATE: f32 = 0.01;
pub const ROTATION_VARIATION_RANGE: f32 = 0.5;
pub const RADIUS_VARIATION_RANGE: f32 = 0.25;
pub const PROPENSITY_DECAY_RATE: f32 = 0.005;
// Share of the propensity under which a successful parent stays unlocked
pub const LOCK_ESCAPE_FACTOR: f32 = 0.1;

// Radius floor applied to offspring; mutation can otherwise walk it below zero
pub const MIN_ORGANISM_RADIUS: f32 = 0.1;

// --- End of File: constants.rs ---
