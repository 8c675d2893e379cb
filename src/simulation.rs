// --- File: simulation.rs ---
use crate::canvas::Canvas;
use crate::config::SimulationConfig;
use crate::organism::Organism;
use crate::random::{RandomSource, SimRandom};
use crate::view::ViewTransform;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub total: usize,
    pub alive: usize,
    pub locked: usize,
}

/// Owns the population and advances it one generation per tick.
pub struct GrowthEngine<R: RandomSource = SimRandom> {
    organisms: Vec<Organism>,
    rng: R,
    pub config: SimulationConfig,
    ticks: u64,
    is_paused: bool,
    // Reused across ticks to collect offspring
    new_organism_buffer: Vec<Organism>,
}

impl GrowthEngine<SimRandom> {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_source(config, SimRandom::from_entropy())
    }
}

impl<R: RandomSource> GrowthEngine<R> {
    pub fn with_source(config: SimulationConfig, rng: R) -> Self {
        let mut engine = Self {
            organisms: Vec::with_capacity(1024),
            rng,
            config,
            ticks: 0,
            is_paused: false,
            new_organism_buffer: Vec::with_capacity(256),
        };
        engine.initialize_organisms();
        engine
    }

    fn initialize_organisms(&mut self) {
        self.organisms.clear();
        self.new_organism_buffer.clear();
        self.ticks = 0;
        let orientation = self.rng.angle();
        self.organisms.push(Organism::new(
            self.config.seed_position,
            self.config.seed_radius,
            self.config.seed_propensity,
            orientation,
        ));
    }

    /// Discards the population and plants a fresh seed.
    pub fn reset(&mut self) {
        let previous = self.organisms.len();
        self.initialize_organisms();
        log::info!(
            "Reset simulation (discarded {} organisms), seed orientation {:.3}",
            previous,
            self.organisms[0].orientation
        );
    }

    /// One generation: every organism present at the start of the tick tries
    /// to reproduce and then decays. Offspring are appended afterwards, in
    /// parent order, and do not act until the next tick.
    pub fn tick(&mut self) {
        if self.is_paused {
            return;
        }
        self.new_organism_buffer.clear();

        let decay_rate = self.config.life_decay_rate;
        for organism in self.organisms.iter_mut() {
            if let Some(child) = organism.try_reproduce(&self.config, &mut self.rng) {
                self.new_organism_buffer.push(child);
            }
            organism.decay(decay_rate);
        }

        self.organisms.append(&mut self.new_organism_buffer);
        self.ticks += 1;
        self.enforce_population_cap();
    }

    // Soft cap: only fully decayed organisms are evicted, oldest first.
    fn enforce_population_cap(&mut self) {
        let Some(cap) = self.config.population_cap else {
            return;
        };
        if self.organisms.len() <= cap {
            return;
        }
        let mut excess = self.organisms.len() - cap;
        let before = self.organisms.len();
        self.organisms.retain(|organism| {
            if excess > 0 && !organism.is_alive() {
                excess -= 1;
                false
            } else {
                true
            }
        });
        let evicted = before - self.organisms.len();
        if evicted > 0 {
            log::debug!(
                "Population cap {}: evicted {} decayed organisms, {} remain",
                cap,
                evicted,
                self.organisms.len()
            );
        }
        if excess > 0 {
            log::debug!(
                "Population cap {} exceeded by {} living organisms",
                cap,
                excess
            );
        }
    }

    /// Draws oldest first so newer organisms paint over older ones.
    /// Returns the number of organisms actually drawn.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, view: &ViewTransform) -> usize {
        let mut drawn = 0;
        for organism in self.organisms.iter_mut() {
            if organism.render(&mut *canvas, view) {
                drawn += 1;
            }
        }
        drawn
    }

    /// Forces a full redraw on the next render, for when the canvas lost its
    /// pixels without the view changing (e.g. a window resize).
    pub fn invalidate_views(&mut self) {
        for organism in self.organisms.iter_mut() {
            organism.invalidate_view();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::info!(
            "Simulation {}",
            if self.is_paused { "Paused" } else { "Resumed" }
        );
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[inline]
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Ticks since the last reset.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn stats(&self) -> PopulationStats {
        let mut stats = PopulationStats {
            total: self.organisms.len(),
            ..Default::default()
        };
        for org in &self.organisms {
            if org.is_alive() {
                stats.alive += 1;
            }
            if org.is_locked() {
                stats.locked += 1;
            }
        }
        stats
    }
}
