// Flatten a recorded `DrawList` into colored screen-space triangles.

use crate::glyphs::{glyph_shape, GlyphShape};
use glam::{Affine2, Vec2};
use mousefx_core::{DrawCmd, DrawList, Paint, Rgba};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

const MIN_ELLIPSE_SEGMENTS: usize = 12;
const MAX_ELLIPSE_SEGMENTS: usize = 48;
const OUTLINE_WIDTH: f32 = 1.0;
const JOINT_SEGMENTS: usize = 8;

#[derive(Default)]
pub struct Tessellator {
    pub vertices: Vec<Vertex>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the vertex list for `list`. Commands before the last `Clear`
    /// are discarded, matching a full-surface clear.
    pub fn build(&mut self, list: &DrawList) -> &[Vertex] {
        self.vertices.clear();
        for cmd in list.iter() {
            match cmd {
                DrawCmd::Clear => self.vertices.clear(),
                DrawCmd::Polygon {
                    transform,
                    points,
                    paint,
                    alpha,
                } => self.fan(*transform, points, paint, *alpha),
                DrawCmd::Ellipse {
                    transform,
                    center,
                    radii,
                    paint,
                    outline,
                    alpha,
                } => {
                    self.ellipse(*transform, *center, *radii, paint, *alpha);
                    if let Some(color) = outline {
                        self.ring(*transform, *center, *radii, color.scale_alpha(*alpha));
                    }
                }
                DrawCmd::Text {
                    transform,
                    glyph,
                    size,
                    color,
                    alpha,
                } => self.glyph(*transform, *glyph, *size, color.scale_alpha(*alpha)),
            }
        }
        &self.vertices
    }

    #[inline]
    fn push(&mut self, transform: Affine2, local: Vec2, color: Rgba) {
        self.vertices.push(Vertex {
            pos: transform.transform_point2(local).to_array(),
            color: color.to_array(),
        });
    }

    #[inline]
    fn tri(&mut self, transform: Affine2, pts: [(Vec2, Rgba); 3]) {
        for (p, c) in pts {
            self.push(transform, p, c);
        }
    }

    /// Triangle fan around the vertex centroid; fine for the convex and
    /// star-shaped outlines the recipes produce.
    fn fan(&mut self, transform: Affine2, points: &[Vec2], paint: &Paint, alpha: f32) {
        if points.len() < 3 {
            return;
        }
        let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
        let color = |p: Vec2| paint.color_at(p).scale_alpha(alpha);
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            self.tri(
                transform,
                [(centroid, color(centroid)), (a, color(a)), (b, color(b))],
            );
        }
    }

    fn ellipse_points(center: Vec2, radii: Vec2) -> Vec<Vec2> {
        let segments = (radii.max_element() * 1.5)
            .clamp(MIN_ELLIPSE_SEGMENTS as f32, MAX_ELLIPSE_SEGMENTS as f32)
            as usize;
        (0..segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * std::f32::consts::TAU;
                center + Vec2::new(a.cos() * radii.x, a.sin() * radii.y)
            })
            .collect()
    }

    fn ellipse(&mut self, transform: Affine2, center: Vec2, radii: Vec2, paint: &Paint, alpha: f32) {
        let rim = Self::ellipse_points(center, radii);
        let color = |p: Vec2| paint.color_at(p).scale_alpha(alpha);
        for i in 0..rim.len() {
            let a = rim[i];
            let b = rim[(i + 1) % rim.len()];
            self.tri(
                transform,
                [(center, color(center)), (a, color(a)), (b, color(b))],
            );
        }
    }

    fn ring(&mut self, transform: Affine2, center: Vec2, radii: Vec2, color: Rgba) {
        let inner = Self::ellipse_points(center, radii);
        let outer = Self::ellipse_points(center, radii + Vec2::splat(OUTLINE_WIDTH));
        for i in 0..inner.len() {
            let j = (i + 1) % inner.len();
            self.tri(transform, [(inner[i], color), (outer[i], color), (outer[j], color)]);
            self.tri(transform, [(inner[i], color), (outer[j], color), (inner[j], color)]);
        }
    }

    fn glyph(&mut self, transform: Affine2, glyph: char, size: f32, color: Rgba) {
        let em = Affine2::from_scale(Vec2::splat(size));
        let t = transform * em;
        match glyph_shape(glyph) {
            GlyphShape::Fill(outline) => self.fan(t, &outline, &Paint::Solid(color), 1.0),
            GlyphShape::Strokes { paths, width } => {
                let half = width * 0.5;
                for path in &paths {
                    for seg in path.windows(2) {
                        let (a, b) = (seg[0], seg[1]);
                        let n = (b - a).normalize_or_zero().perp() * half;
                        self.tri(t, [(a + n, color), (b + n, color), (b - n, color)]);
                        self.tri(t, [(a + n, color), (b - n, color), (a - n, color)]);
                    }
                    // round the interior joints so bends don't show notches
                    for &joint in path.iter().skip(1).take(path.len().saturating_sub(2)) {
                        let disk = Self::ellipse_points_n(joint, half, JOINT_SEGMENTS);
                        for i in 0..disk.len() {
                            let j = (i + 1) % disk.len();
                            self.tri(t, [(joint, color), (disk[i], color), (disk[j], color)]);
                        }
                    }
                }
            }
        }
    }

    fn ellipse_points_n(center: Vec2, r: f32, n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                center + Vec2::new(a.cos(), a.sin()) * r
            })
            .collect()
    }
}
