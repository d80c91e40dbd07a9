// Vector outlines for the handful of glyphs the effects use, in em units
// centered on the origin (y down, roughly one unit tall).

use glam::Vec2;

pub enum GlyphShape {
    /// Star-shaped filled outline.
    Fill(Vec<Vec2>),
    /// Open polylines drawn with a constant width.
    Strokes { paths: Vec<Vec<Vec2>>, width: f32 },
}

const ARC_STEPS: usize = 12;
const HEART_STEPS: usize = 48;
const STROKE_WIDTH: f32 = 0.11;

pub fn glyph_shape(c: char) -> GlyphShape {
    match c {
        '❤' | '♥' => GlyphShape::Fill(heart()),
        '$' => strokes(vec![
            // upper bowl: right, over the top, down the left, into the middle
            arc(Vec2::new(0.0, -0.15), 0.15, 10.0, -270.0),
            // lower bowl: middle, down the right, under, up the left
            arc(Vec2::new(0.0, 0.15), 0.15, -90.0, 170.0),
            vec![Vec2::new(0.0, -0.42), Vec2::new(0.0, 0.42)],
        ]),
        '€' => strokes(vec![
            arc(Vec2::new(0.05, 0.0), 0.3, 45.0, 315.0),
            vec![Vec2::new(-0.35, -0.07), Vec2::new(0.1, -0.07)],
            vec![Vec2::new(-0.35, 0.07), Vec2::new(0.1, 0.07)],
        ]),
        '£' => strokes(vec![
            arc(Vec2::new(0.03, -0.2), 0.16, -10.0, -180.0),
            vec![Vec2::new(-0.13, -0.2), Vec2::new(-0.13, 0.3), Vec2::new(-0.25, 0.38)],
            vec![Vec2::new(-0.25, 0.38), Vec2::new(0.28, 0.38)],
            vec![Vec2::new(-0.3, 0.05), Vec2::new(0.08, 0.05)],
        ]),
        '￥' | '¥' => strokes(vec![
            vec![Vec2::new(-0.3, -0.4), Vec2::new(0.0, 0.0), Vec2::new(0.3, -0.4)],
            vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.42)],
            vec![Vec2::new(-0.22, 0.08), Vec2::new(0.22, 0.08)],
            vec![Vec2::new(-0.22, 0.22), Vec2::new(0.22, 0.22)],
        ]),
        // Anything else renders as a dot so a bad glyph is still visible.
        _ => GlyphShape::Fill(arc(Vec2::ZERO, 0.25, 0.0, 360.0)),
    }
}

fn strokes(paths: Vec<Vec<Vec2>>) -> GlyphShape {
    GlyphShape::Strokes {
        paths,
        width: STROKE_WIDTH,
    }
}

fn arc(center: Vec2, r: f32, from_deg: f32, to_deg: f32) -> Vec<Vec2> {
    (0..=ARC_STEPS)
        .map(|i| {
            let a = (from_deg + (to_deg - from_deg) * i as f32 / ARC_STEPS as f32).to_radians();
            center + Vec2::new(a.cos(), a.sin()) * r
        })
        .collect()
}

/// Classic parametric heart, flipped for y-down and normalised to ~1em.
fn heart() -> Vec<Vec2> {
    const SCALE: f32 = 1.0 / 29.0;
    const Y_CENTER: f32 = 2.6;
    (0..HEART_STEPS)
        .map(|i| {
            let t = i as f32 / HEART_STEPS as f32 * std::f32::consts::TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Vec2::new(x, y - Y_CENTER) * SCALE
        })
        .collect()
}
