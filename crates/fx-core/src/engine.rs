use crate::config::EffectsConfig;
use crate::constants::{DT_MAX_SEC, DT_MIN_SEC, TICK_INTERVAL, TRAIL_POOL_FRACTION};
use crate::particle::Particle;
use crate::render::{draw_particle, Canvas};
use crate::settings::EffectSettings;
use crate::spawn;
use glam::Vec2;
use instant::Instant;
use log::{debug, info};
use rand::prelude::*;

/// Owns the particle pool and drives spawn, simulation and rendering.
///
/// The engine is single-writer: spawn calls arriving from another thread must
/// be marshaled onto the thread that calls [`EffectEngine::tick`].
pub struct EffectEngine {
    particles: Vec<Particle>,
    settings: EffectSettings,
    max_particles: usize,
    visible: bool,
    last_trail: Option<Instant>,
    last_tick: Option<Instant>,
    rng: StdRng,
}

impl EffectEngine {
    pub fn new(config: &EffectsConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: &EffectsConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: &EffectsConfig, rng: StdRng) -> Self {
        let settings = EffectSettings::from_config(config);
        let max_particles = settings.max_particles();
        Self {
            particles: Vec::with_capacity(max_particles),
            settings,
            max_particles,
            visible: true,
            last_trail: None,
            last_tick: None,
            rng,
        }
    }

    pub fn settings(&self) -> &EffectSettings {
        &self.settings
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        info!(
            "effects {}",
            if self.visible { "enabled" } else { "disabled" }
        );
    }

    /// Replace the settings snapshot wholesale.
    pub fn update_config(&mut self, config: &EffectsConfig) {
        self.settings = EffectSettings::from_config(config);
        self.max_particles = self.settings.max_particles();
        info!(
            "config updated: performance_mode={} max_particles={}",
            self.settings.performance_mode, self.max_particles
        );
    }

    /// Click burst at `pos` (logical screen coordinates).
    pub fn spawn_burst(&mut self, pos: Vec2) {
        if self.particles.len() > self.max_particles {
            return;
        }
        if !self.visible || !self.settings.enabled {
            return;
        }
        let density = self.settings.burst_density();
        let kinds = if self.settings.random_pick {
            match self.settings.kinds.choose(&mut self.rng) {
                Some(kind) => vec![*kind],
                None => return,
            }
        } else {
            self.settings.kinds.clone()
        };
        for kind in kinds {
            let n = spawn::burst(
                &mut self.rng,
                kind,
                pos,
                density,
                &self.settings,
                &mut self.particles,
            );
            debug!("burst {kind} x{n} at ({:.0}, {:.0})", pos.x, pos.y);
        }
    }

    /// Drag trail at `pos`, rate limited by the configured minimum interval.
    pub fn spawn_trail(&mut self, pos: Vec2, now: Instant) {
        if self.particles.len() as f32 > self.max_particles as f32 * TRAIL_POOL_FRACTION {
            return;
        }
        if !self.visible || !self.settings.enabled || !self.settings.trail_enabled {
            return;
        }
        if let Some(last) = self.last_trail {
            if now.saturating_duration_since(last) < self.settings.trail_interval() {
                return;
            }
        }
        self.last_trail = Some(now);
        spawn::trail(&mut self.rng, pos, &self.settings, &mut self.particles);
    }

    /// Advance by the wall time elapsed since the previous tick.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => TICK_INTERVAL,
        };
        self.last_tick = Some(now);
        self.step(elapsed.as_secs_f32());
    }

    /// Integrate all particles by `dt` (clamped), prune the dead and keep at
    /// most `max_particles`, preferring the most recently spawned.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(DT_MIN_SEC, DT_MAX_SEC);
        for p in &mut self.particles {
            p.update(dt);
        }
        self.particles.retain(|p| !p.is_dead());
        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
        if !self.particles.is_empty() && self.particles.len() % 50 == 0 {
            debug!("tick: particles={}", self.particles.len());
        }
    }

    /// Clear `canvas` and draw the live pool back-to-front.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();
        if !self.visible || self.particles.is_empty() {
            return;
        }
        for p in self.particles.iter().take(self.settings.draw_cap()) {
            if p.opacity < crate::constants::DEATH_OPACITY {
                continue;
            }
            draw_particle(p, canvas);
        }
    }
}
