// --- File: organism.rs ---
use crate::canvas::Canvas;
use crate::config::SimulationConfig;
use crate::random::RandomSource;
use crate::utils::life_color;
use crate::view::{ViewSnapshot, ViewTransform};
use glam::Vec2;

/// One branching unit of the population.
#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    pub position: Vec2,
    pub radius: f32,
    pub reproduction_propensity: f32,
    pub orientation: f32,
    life: f32,
    locked: bool,
    // None until the first draw
    last_view: Option<ViewSnapshot>,
}

impl Organism {
    pub fn new(position: Vec2, radius: f32, reproduction_propensity: f32, orientation: f32) -> Self {
        Self {
            position,
            radius,
            reproduction_propensity,
            orientation,
            life: 1.0,
            locked: false,
            last_view: None,
        }
    }

    #[inline]
    pub fn life(&self) -> f32 {
        self.life
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Drops the remembered view so the next render draws unconditionally.
    pub fn invalidate_view(&mut self) {
        self.last_view = None;
    }

    /// Lowers life by `rate`, stopping at zero. A remainder under half a
    /// step is rounding residue and counts as zero.
    pub fn decay(&mut self, rate: f32) {
        if self.life <= 0.0 {
            return;
        }
        self.life = (self.life - rate).max(0.0);
        if self.life < rate * 0.5 {
            self.life = 0.0;
        }
    }

    /// Attempts one reproduction. Draw order: success, lock, rotation,
    /// radius, propensity.
    pub fn try_reproduce<R: RandomSource + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Option<Organism> {
        if self.life <= 0.0 || self.locked {
            return None;
        }
        if rng.unit() >= self.reproduction_propensity {
            return None;
        }
        // Staying unlocked is rare and gets rarer as propensity drops
        if rng.unit() >= self.reproduction_propensity * config.lock_escape_factor {
            self.locked = true;
        }
        let rotation_mutation = rng.unit() * 2.0 - 1.0;
        let radius_mutation = rng.unit() * 2.0 - 1.0;
        let propensity_mutation = rng.unit();
        Some(self.offspring(config, rotation_mutation, radius_mutation, propensity_mutation))
    }

    /// Child geometry for fixed mutation draws. `rotation_mutation` and
    /// `radius_mutation` are in [-1, 1], `propensity_mutation` in [0, 1).
    pub fn offspring(
        &self,
        config: &SimulationConfig,
        rotation_mutation: f32,
        radius_mutation: f32,
        propensity_mutation: f32,
    ) -> Organism {
        let orientation = self.orientation + config.rotation_range * rotation_mutation;
        let radius = (self.radius + config.radius_range * radius_mutation).max(config.min_radius);
        let propensity =
            self.reproduction_propensity - config.propensity_decay_rate * propensity_mutation;
        // Average of both radii: a same-size child sits just past the parent's edge
        let offset = (self.radius.max(config.min_radius) + radius) / 2.0;
        let position = self.position + offset * Vec2::new(orientation.sin(), orientation.cos());
        Organism::new(position, radius, propensity, orientation)
    }

    /// Draws the organism unless it is dead and the view has not moved since
    /// its last draw. Returns whether anything was drawn.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, view: &ViewTransform) -> bool {
        let snapshot = view.snapshot();
        if self.life <= 0.0 && self.last_view == Some(snapshot) {
            return false;
        }
        self.last_view = Some(snapshot);

        let color = life_color(self.life);
        let screen = view.world_to_screen(self.position);
        let screen_radius = ((self.radius * view.zoom()).round() as i32).max(1);
        canvas.fill_circle((screen.x as i32, screen.y as i32), screen_radius, color);
        true
    }
}
