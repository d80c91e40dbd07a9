//! Drawing-surface contract and per-shape drawing recipes.
//!
//! Every primitive takes a local-to-screen transform (translation to the
//! particle position, plus rotation where the recipe rotates) and an alpha
//! multiplier. Backends decide how to rasterize; [`DrawList`] just records.

use crate::color::Rgba;
use crate::particle::{Particle, Shape};
use glam::{Affine2, Vec2};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Radial gradient in the primitive's local space.
    Radial {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

impl Paint {
    /// Color at a local-space point.
    pub fn color_at(&self, p: Vec2) -> Rgba {
        match *self {
            Paint::Solid(c) => c,
            Paint::Radial {
                center,
                radius,
                inner,
                outer,
            } => {
                let t = if radius > 0.0 {
                    p.distance(center) / radius
                } else {
                    1.0
                };
                inner.lerp(outer, t)
            }
        }
    }
}

/// Transparent drawing target with alpha-blended 2D primitives.
pub trait Canvas {
    /// Reset the whole surface to fully transparent.
    fn clear(&mut self);

    fn fill_polygon(&mut self, transform: Affine2, points: &[Vec2], paint: Paint, alpha: f32);

    /// Axis-aligned (in local space) ellipse, optionally outlined.
    fn fill_ellipse(
        &mut self,
        transform: Affine2,
        center: Vec2,
        radii: Vec2,
        paint: Paint,
        outline: Option<Rgba>,
        alpha: f32,
    );

    /// A single glyph centered on the local origin, `size` pixels tall.
    fn fill_text(&mut self, transform: Affine2, glyph: char, size: f32, color: Rgba, alpha: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    Polygon {
        transform: Affine2,
        points: SmallVec<[Vec2; 10]>,
        paint: Paint,
        alpha: f32,
    },
    Ellipse {
        transform: Affine2,
        center: Vec2,
        radii: Vec2,
        paint: Paint,
        outline: Option<Rgba>,
        alpha: f32,
    },
    Text {
        transform: Affine2,
        glyph: char,
        size: f32,
        color: Rgba,
        alpha: f32,
    },
}

/// Recording canvas.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_polygon(&mut self, transform: Affine2, points: &[Vec2], paint: Paint, alpha: f32) {
        self.commands.push(DrawCmd::Polygon {
            transform,
            points: points.iter().copied().collect(),
            paint,
            alpha,
        });
    }

    fn fill_ellipse(
        &mut self,
        transform: Affine2,
        center: Vec2,
        radii: Vec2,
        paint: Paint,
        outline: Option<Rgba>,
        alpha: f32,
    ) {
        self.commands.push(DrawCmd::Ellipse {
            transform,
            center,
            radii,
            paint,
            outline,
            alpha,
        });
    }

    fn fill_text(&mut self, transform: Affine2, glyph: char, size: f32, color: Rgba, alpha: f32) {
        self.commands.push(DrawCmd::Text {
            transform,
            glyph,
            size,
            color,
            alpha,
        });
    }
}

const FLOWER_PETALS: usize = 5;

/// Vertices of a five-pointed star: outer radius `r`, inner `r/2`,
/// alternating every 36°.
pub fn star_points(r: f32) -> SmallVec<[Vec2; 10]> {
    (0..FLOWER_PETALS * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { r * 0.5 };
            let a = (i as f32 * 36.0).to_radians();
            Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

#[inline]
fn rotated(p: &Particle) -> Affine2 {
    Affine2::from_angle_translation(p.rotation.to_radians(), p.position)
}

#[inline]
fn translated(p: &Particle) -> Affine2 {
    Affine2::from_translation(p.position)
}

/// Draw one particle with its shape's recipe.
pub fn draw_particle<C: Canvas + ?Sized>(p: &Particle, canvas: &mut C) {
    match p.shape {
        Shape::Text => {
            if let Some(glyph) = p.glyph {
                canvas.fill_text(rotated(p), glyph, p.size, p.color, p.opacity);
            }
        }
        Shape::Star => {
            canvas.fill_polygon(
                rotated(p),
                &star_points(p.size),
                Paint::Solid(p.color),
                p.opacity,
            );
        }
        Shape::Circle => {
            canvas.fill_ellipse(
                translated(p),
                Vec2::ZERO,
                Vec2::splat(p.size),
                Paint::Solid(p.color.lighter(120.0)),
                Some(p.color),
                p.opacity * 0.9,
            );
        }
        Shape::Flower => draw_flower(p, canvas),
        Shape::Trail => {
            canvas.fill_ellipse(
                translated(p),
                Vec2::ZERO,
                Vec2::splat(p.size),
                // The glow fades twice: in the gradient and in the primitive alpha.
                Paint::Radial {
                    center: Vec2::ZERO,
                    radius: p.size,
                    inner: p.color.with_alpha(0.9 * p.opacity),
                    outer: p.color.with_alpha(0.0),
                },
                None,
                p.opacity,
            );
        }
        Shape::Rect => {
            let (w, h) = (p.size, p.size * 0.2);
            let x0 = -p.size * 0.4;
            let y0 = -p.size * 0.1;
            let quad = [
                Vec2::new(x0, y0),
                Vec2::new(x0 + w, y0),
                Vec2::new(x0 + w, y0 + h),
                Vec2::new(x0, y0 + h),
            ];
            canvas.fill_polygon(rotated(p), &quad, Paint::Solid(p.color), p.opacity);
        }
    }
}

fn draw_flower<C: Canvas + ?Sized>(p: &Particle, canvas: &mut C) {
    let base = rotated(p);
    let r = (p.size * 0.6).max(4.0);
    let petal_w = r * 0.9;
    let petal_h = r * 1.2;
    let gradient = Paint::Radial {
        center: Vec2::new(r * 0.2, 0.0),
        radius: petal_h,
        inner: p.color.lighter(150.0),
        outer: p.color.darker(110.0),
    };
    // Petal ellipse spans x in [0.2r, 0.2r + petal_h] along its own axis.
    let petal_center = Vec2::new(r * 0.2 + petal_h * 0.5, 0.0);
    let petal_radii = Vec2::new(petal_h * 0.5, petal_w * 0.5);
    for i in 0..FLOWER_PETALS {
        let angle = (i as f32 * 360.0 / FLOWER_PETALS as f32).to_radians();
        let petal = base * Affine2::from_angle(angle);
        canvas.fill_ellipse(petal, petal_center, petal_radii, gradient, None, p.opacity);
    }
    canvas.fill_ellipse(
        base,
        Vec2::ZERO,
        Vec2::splat(r * 0.25),
        Paint::Solid(p.color.lighter(120.0)),
        None,
        p.opacity,
    );
}
