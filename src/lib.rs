//! Branching growth visualizer.
//!
//! A single seed organism spawns mutated offspring that age and fade out,
//! drawn onto a persistent canvas through a pan/zoom view.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod frame_clock;
pub mod input;
pub mod organism;
pub mod random;
pub mod renderer;
pub mod simulation;
pub mod utils;
pub mod view;

pub use canvas::{Canvas, PixelCanvas};
pub use config::{AppConfig, ConfigError, SimulationConfig, ViewConfig, WindowConfig};
pub use organism::Organism;
pub use random::{FixedSource, RandomSource, SequenceSource, SimRandom};
pub use simulation::{GrowthEngine, PopulationStats};
pub use utils::Rgb;
pub use view::{ViewSnapshot, ViewTransform};
