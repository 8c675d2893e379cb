// --- File: config.rs ---
use crate::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("life decay rate must be in (0, 1], got {0}")]
    LifeDecayRate(f32),
    #[error("zoom step must be positive, got {0}")]
    ZoomStep(f32),
    #[error("initial zoom must be at least the zoom step ({step}), got {zoom}")]
    InitialZoom { zoom: f32, step: f32 },
    #[error("minimum organism radius must be positive, got {0}")]
    MinRadius(f32),
    #[error("seed radius must be positive, got {0}")]
    SeedRadius(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeRange { name: &'static str, value: f32 },
    #[error("population cap must be at least 1")]
    PopulationCap,
    #[error("frame rate must be at least 1")]
    FrameRate,
}

/// Parameters of the growth process.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub seed_position: Vec2,
    pub seed_radius: f32,
    pub seed_propensity: f32,
    pub life_decay_rate: f32,
    pub rotation_range: f32,
    pub radius_range: f32,
    pub propensity_decay_rate: f32,
    pub lock_escape_factor: f32,
    pub min_radius: f32,
    // None keeps the population unbounded. With a cap, the oldest fully
    // decayed organisms are dropped once the population exceeds it.
    pub population_cap: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed_position: Vec2::new(INITIAL_POSITION.0, INITIAL_POSITION.1),
            seed_radius: INITIAL_RADIUS,
            seed_propensity: INITIAL_PROPENSITY,
            life_decay_rate: LIFE_DECAY_RATE,
            rotation_range: ROTATION_VARIATION_RANGE,
            radius_range: RADIUS_VARIATION_RANGE,
            propensity_decay_rate: PROPENSITY_DECAY_RATE,
            lock_escape_factor: LOCK_ESCAPE_FACTOR,
            min_radius: MIN_ORGANISM_RADIUS,
            population_cap: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_population_cap(mut self, cap: usize) -> Self {
        self.population_cap = Some(cap);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.life_decay_rate > 0.0 && self.life_decay_rate <= 1.0) {
            return Err(ConfigError::LifeDecayRate(self.life_decay_rate));
        }
        if !(self.min_radius > 0.0) {
            return Err(ConfigError::MinRadius(self.min_radius));
        }
        if !(self.seed_radius > 0.0) {
            return Err(ConfigError::SeedRadius(self.seed_radius));
        }
        for (name, value) in [
            ("rotation range", self.rotation_range),
            ("radius range", self.radius_range),
            ("propensity decay rate", self.propensity_decay_rate),
            ("lock escape factor", self.lock_escape_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeRange { name, value });
            }
        }
        if self.population_cap == Some(0) {
            return Err(ConfigError::PopulationCap);
        }
        Ok(())
    }
}

/// Initial zoom and the zoom increment, which doubles as the zoom floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub initial_zoom: f32,
    pub zoom_step: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_zoom: INITIAL_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_step > 0.0) || !self.zoom_step.is_finite() {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        if !(self.initial_zoom >= self.zoom_step) || !self.initial_zoom.is_finite() {
            return Err(ConfigError::InitialZoom {
                zoom: self.initial_zoom,
                step: self.zoom_step,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub view: ViewConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub frames_per_second: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Biological System Simulation".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            frames_per_second: FRAMES_PER_SECOND,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.view.validate()?;
        if self.window.frames_per_second == 0 {
            return Err(ConfigError::FrameRate);
        }
        Ok(())
    }
}
