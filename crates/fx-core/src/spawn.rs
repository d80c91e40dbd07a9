//! Spawn-pattern generators for click bursts and drag trails.

use crate::color::Rgba;
use crate::constants::*;
use crate::particle::{Particle, Shape};
use crate::settings::{EffectSettings, Range};
use glam::Vec2;
use rand::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BurstKind {
    Heart,
    Star,
    Ripple,
    Confetti,
    Coin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown effect type `{0}`")]
pub struct UnknownBurstKind(pub String);

impl FromStr for BurstKind {
    type Err = UnknownBurstKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heart" => Ok(Self::Heart),
            "star" => Ok(Self::Star),
            "ripple" => Ok(Self::Ripple),
            "confetti" => Ok(Self::Confetti),
            "coin" => Ok(Self::Coin),
            _ => Err(UnknownBurstKind(s.to_string())),
        }
    }
}

impl fmt::Display for BurstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Ripple => "ripple",
            Self::Confetti => "confetti",
            Self::Coin => "coin",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountRule {
    Density,
    AtLeast(usize),
    /// `floor(density * k)`
    Scaled(f32),
}

impl CountRule {
    pub fn count(self, density: usize) -> usize {
        match self {
            Self::Density => density,
            Self::AtLeast(floor) => density.max(floor),
            Self::Scaled(k) => (density as f32 * k) as usize,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphRule {
    None,
    Fixed(char),
    Currency,
}

/// Per-kind scaling applied to the configured ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstPattern {
    pub count: CountRule,
    pub life_scale: f32,
    pub size_scale: (f32, f32),
    pub speed_scale: (f32, f32),
    pub shape: Shape,
    pub glyph: GlyphRule,
    pub opacity: f32,
    pub spin_range: Option<f32>,
}

impl BurstKind {
    pub const ALL: [BurstKind; 5] = [
        BurstKind::Heart,
        BurstKind::Star,
        BurstKind::Ripple,
        BurstKind::Confetti,
        BurstKind::Coin,
    ];

    pub const fn pattern(self) -> BurstPattern {
        match self {
            Self::Heart => BurstPattern {
                count: CountRule::Density,
                life_scale: 1.0,
                size_scale: (1.0, 1.0),
                speed_scale: (1.0, 1.0),
                shape: Shape::Text,
                glyph: GlyphRule::Fixed(HEART_GLYPH),
                opacity: 1.0,
                spin_range: None,
            },
            Self::Star => BurstPattern {
                count: CountRule::Density,
                life_scale: 1.0,
                size_scale: (1.0, 1.0),
                speed_scale: (1.0, 1.0),
                shape: Shape::Star,
                glyph: GlyphRule::None,
                opacity: 1.0,
                spin_range: None,
            },
            Self::Ripple => BurstPattern {
                count: CountRule::AtLeast(MIN_PATTERN_COUNT),
                life_scale: 1.1,
                size_scale: (1.1, 1.6),
                speed_scale: (0.6, 0.9),
                shape: Shape::Flower,
                glyph: GlyphRule::None,
                opacity: 0.9,
                spin_range: None,
            },
            Self::Confetti => BurstPattern {
                count: CountRule::Scaled(1.5),
                life_scale: 1.1,
                size_scale: (0.8, 1.2),
                speed_scale: (1.0, 1.2),
                shape: Shape::Rect,
                glyph: GlyphRule::None,
                opacity: 1.0,
                spin_range: None,
            },
            Self::Coin => BurstPattern {
                count: CountRule::AtLeast(MIN_PATTERN_COUNT),
                life_scale: 1.2,
                size_scale: (1.1, 1.6),
                speed_scale: (0.7, 0.9),
                shape: Shape::Text,
                glyph: GlyphRule::Currency,
                opacity: 0.95,
                spin_range: Some(COIN_SPIN_RANGE_DEG),
            },
        }
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f32 {
    if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    }
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgba]) -> Rgba {
    palette.choose(rng).copied().unwrap_or_default()
}

/// Random direction, random speed in `speed`, nudged upward by a fraction of
/// the speed so bursts arc up before gravity takes over.
pub fn launch_velocity<R: Rng + ?Sized>(rng: &mut R, speed: Range) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let spd = uniform(rng, speed);
    Vec2::new(angle.cos() * spd, angle.sin() * spd - spd * UPWARD_BIAS)
}

/// Append one burst of `kind` at `origin` to `out`; returns how many were added.
pub fn burst<R: Rng + ?Sized>(
    rng: &mut R,
    kind: BurstKind,
    origin: Vec2,
    density: usize,
    settings: &EffectSettings,
    out: &mut Vec<Particle>,
) -> usize {
    let pattern = kind.pattern();
    let count = pattern.count.count(density);
    let speed = settings
        .speed
        .scaled(pattern.speed_scale.0, pattern.speed_scale.1);
    let size = settings
        .size
        .scaled(pattern.size_scale.0, pattern.size_scale.1);
    let life = settings.duration * pattern.life_scale;
    out.reserve(count);
    for _ in 0..count {
        let vel = launch_velocity(rng, speed);
        let sz = uniform(rng, size);
        let color = pick_color(rng, &settings.palette);
        let mut p = Particle::new(rng, origin, vel, life, color, sz, pattern.shape)
            .with_opacity(pattern.opacity);
        match pattern.glyph {
            GlyphRule::None => {}
            GlyphRule::Fixed(c) => p = p.with_glyph(c),
            GlyphRule::Currency => {
                let c = *CURRENCY_GLYPHS.choose(rng).unwrap_or(&'$');
                p = p.with_glyph(c);
            }
        }
        if let Some(spin) = pattern.spin_range {
            p = p.with_spin(rng.gen_range(-spin..=spin));
        }
        out.push(p);
    }
    count
}

/// Append one trail emission at `origin`: stationary glows plus, by chance,
/// one drifting flower. Returns how many particles were added.
pub fn trail<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Vec2,
    settings: &EffectSettings,
    out: &mut Vec<Particle>,
) -> usize {
    let density = settings.trail_density();
    let jitter = Range::new(-TRAIL_JITTER_PX, TRAIL_JITTER_PX);
    for _ in 0..density {
        let color = pick_color(rng, &settings.palette);
        let size = uniform(rng, settings.trail_size);
        let offset = Vec2::new(uniform(rng, jitter), uniform(rng, jitter));
        let p = Particle::new(
            rng,
            origin + offset,
            Vec2::ZERO,
            settings.trail_life,
            color,
            size,
            Shape::Trail,
        )
        .with_opacity(TRAIL_OPACITY);
        out.push(p);
    }
    let mut added = density;
    if rng.gen::<f32>() < settings.trail_flower_chance {
        let color = pick_color(rng, &settings.palette);
        let size = uniform(rng, settings.trail_flower_size);
        let vel = Vec2::new(
            uniform(rng, Range::new(-TRAIL_FLOWER_VX, TRAIL_FLOWER_VX)),
            uniform(rng, TRAIL_FLOWER_VY.into()),
        );
        let p = Particle::new(
            rng,
            origin,
            vel,
            TRAIL_FLOWER_LIFE_SEC,
            color,
            size,
            Shape::Flower,
        )
        .with_opacity(TRAIL_FLOWER_OPACITY);
        out.push(p);
        added += 1;
    }
    added
}
