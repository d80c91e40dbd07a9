use crate::color::Rgba;
use crate::constants::{DEATH_OPACITY, DRAG_PER_TICK, GRAVITY, SPIN_RANGE_DEG};
use glam::Vec2;
use rand::Rng;

/// Closed set of drawing recipes a particle can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Text,
    Circle,
    Star,
    Flower,
    Trail,
    Rect,
}

/// A single animated visual unit owned by the engine's pool.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub color: Rgba,
    pub glyph: Option<char>,
    pub size: f32,
    pub shape: Shape,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per second.
    pub spin: f32,
    pub opacity: f32,
}

impl Particle {
    /// Create a fresh particle with a random initial rotation in [0, 360)
    /// and spin in [-180, 180] drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        position: Vec2,
        velocity: Vec2,
        lifetime: f32,
        color: Rgba,
        size: f32,
        shape: Shape,
    ) -> Self {
        let rotation = rng.gen_range(0.0..360.0);
        let spin = rng.gen_range(-SPIN_RANGE_DEG..=SPIN_RANGE_DEG);
        Self {
            position,
            velocity,
            age: 0.0,
            lifetime,
            color,
            glyph: None,
            size,
            shape,
            rotation,
            spin,
            opacity: 1.0,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Normalized life progress `age / lifetime`, capped at 1.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        (self.age / self.lifetime).min(1.0)
    }

    /// Explicit Euler step. Drag is applied once per call regardless of `dt`,
    /// so the motion matches the 10ms reference step only approximately at
    /// other rates.
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        let t = self.progress();
        self.velocity.y += GRAVITY * dt;
        self.velocity *= DRAG_PER_TICK;
        self.position += self.velocity * dt;
        self.opacity = (1.0 - t).max(0.0);
        self.rotation += self.spin * dt;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime || self.opacity <= DEATH_OPACITY
    }
}
