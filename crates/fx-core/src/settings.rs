//! Immutable engine snapshot resolved from an [`EffectsConfig`].

use crate::color::Rgba;
use crate::config::EffectsConfig;
use crate::constants::*;
use crate::spawn::BurstKind;
use log::warn;
use std::time::Duration;

/// Inclusive `[min, max]` sampling range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn new(a: f32, b: f32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Per-bound scaling, e.g. sizes in `[min*1.1, max*1.6]`.
    pub fn scaled(self, lo: f32, hi: f32) -> Self {
        Self::new(self.min * lo, self.max * hi)
    }
}

impl From<[f32; 2]> for Range {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectSettings {
    pub enabled: bool,
    pub performance_mode: bool,
    pub density: usize,
    pub duration: f32,
    pub palette: Vec<Rgba>,
    pub size: Range,
    pub speed: Range,
    pub kinds: Vec<BurstKind>,
    pub random_pick: bool,
    pub trail_enabled: bool,
    pub trail_density: usize,
    pub trail_life: f32,
    pub trail_min_interval_ms: u64,
    pub trail_size: Range,
    pub trail_flower_chance: f32,
    pub trail_flower_size: Range,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self::from_config(&EffectsConfig::default())
    }
}

impl EffectSettings {
    pub fn from_config(cfg: &EffectsConfig) -> Self {
        let kinds = cfg
            .types
            .iter()
            .filter_map(|name| match name.parse::<BurstKind>() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    warn!("{e}; skipping");
                    None
                }
            })
            .collect();
        Self {
            enabled: cfg.enabled,
            performance_mode: cfg.performance_mode,
            density: cfg.density as usize,
            duration: cfg.duration,
            palette: resolve_palette(&cfg.colors),
            size: cfg.size_range.into(),
            speed: cfg.speed_range.into(),
            kinds,
            random_pick: cfg.random_pick,
            trail_enabled: cfg.trail_enabled,
            trail_density: cfg.trail_density as usize,
            trail_life: cfg.trail_life,
            trail_min_interval_ms: cfg.trail_min_interval_ms,
            trail_size: cfg.trail_size_range.into(),
            trail_flower_chance: cfg.trail_flower_chance.clamp(0.0, 1.0),
            trail_flower_size: cfg.trail_flower_size_range.into(),
        }
    }

    pub fn max_particles(&self) -> usize {
        if self.performance_mode {
            MAX_PARTICLES_PERF
        } else {
            MAX_PARTICLES
        }
    }

    pub fn draw_cap(&self) -> usize {
        if self.performance_mode {
            DRAW_CAP_PERF
        } else {
            DRAW_CAP
        }
    }

    pub fn burst_density(&self) -> usize {
        let cap = if self.performance_mode {
            BURST_DENSITY_CAP_PERF
        } else {
            BURST_DENSITY_CAP
        };
        self.density.min(cap)
    }

    /// Always at least one glow per emission.
    pub fn trail_density(&self) -> usize {
        let cap = if self.performance_mode {
            TRAIL_DENSITY_CAP_PERF
        } else {
            TRAIL_DENSITY_CAP
        };
        self.trail_density.clamp(1, cap)
    }

    pub fn trail_interval(&self) -> Duration {
        let mut ms = self.trail_min_interval_ms;
        if self.performance_mode {
            ms = ms.max(TRAIL_INTERVAL_FLOOR_PERF_MS);
        }
        Duration::from_millis(ms.max(1))
    }
}

fn resolve_palette(colors: &[String]) -> Vec<Rgba> {
    let parsed: Vec<Rgba> = colors
        .iter()
        .filter_map(|c| match Rgba::parse(c) {
            Ok(rgba) => Some(rgba),
            Err(e) => {
                warn!("{e}; dropping from palette");
                None
            }
        })
        .collect();
    if !parsed.is_empty() {
        return parsed;
    }
    DEFAULT_COLORS
        .iter()
        .filter_map(|c| Rgba::parse(c).ok())
        .collect()
}
