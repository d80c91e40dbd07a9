use glam::Vec2;
use mousefx_core::{Particle, Rgba, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(lifetime: f32) -> Particle {
    let mut rng = StdRng::seed_from_u64(7);
    Particle::new(
        &mut rng,
        Vec2::ZERO,
        Vec2::ZERO,
        lifetime,
        Rgba::WHITE,
        16.0,
        Shape::Circle,
    )
}

#[test]
fn new_particle_starts_fresh() {
    let p = particle(1.0);
    assert_eq!(p.age, 0.0);
    assert_eq!(p.opacity, 1.0);
    assert!(p.rotation >= 0.0 && p.rotation < 360.0);
    assert!(p.spin >= -180.0 && p.spin <= 180.0);
    assert!(p.glyph.is_none());
    assert!(!p.is_dead());
}

#[test]
fn gravity_then_drag_then_position() {
    let mut p = particle(2.0);
    p.update(0.1);
    // vy = 300 * 0.1 * 0.98, position uses the already-updated velocity
    assert!((p.velocity.y - 29.4).abs() < 1e-4);
    assert!((p.position.y - 2.94).abs() < 1e-4);
    assert_eq!(p.velocity.x, 0.0);
    assert_eq!(p.position.x, 0.0);
    assert!((p.opacity - 0.95).abs() < 1e-5);
}

#[test]
fn drag_applies_once_per_update() {
    let mut p = particle(2.0);
    p.velocity = Vec2::new(100.0, 0.0);
    p.update(0.001);
    assert!((p.velocity.x - 98.0).abs() < 1e-4);
}

#[test]
fn rotation_advances_by_spin() {
    let mut p = particle(2.0).with_spin(90.0);
    let start = p.rotation;
    p.update(0.5);
    assert!((p.rotation - (start + 45.0)).abs() < 1e-4);
}

#[test]
fn opacity_never_increases_for_fixed_dt() {
    for &dt in &[0.001_f32, 0.01, 0.016, 0.033] {
        let mut p = particle(1.3);
        let mut last = p.opacity;
        for _ in 0..2000 {
            p.update(dt);
            assert!(p.opacity <= last, "opacity rose at dt={dt}");
            last = p.opacity;
            if p.is_dead() {
                break;
            }
        }
        assert!(p.is_dead());
    }
}

#[test]
fn dead_by_lifetime_for_any_step_up_to_lifetime() {
    let lifetime = 0.5;
    for &dt in &[0.001_f32, 0.01, 0.033, 0.2, 0.5] {
        let mut p = particle(lifetime);
        while p.age < lifetime {
            p.update(dt);
        }
        assert!(p.is_dead(), "alive at age {} with dt={dt}", p.age);
    }
}

#[test]
fn faded_particle_is_dead_before_lifetime() {
    let mut p = particle(1.0);
    p.age = 0.95;
    p.update(0.01);
    assert!((p.opacity - 0.04).abs() < 1e-4);
    assert!(p.age < p.lifetime);
    assert!(p.is_dead());
}

#[test]
fn progress_is_capped() {
    let mut p = particle(0.2);
    p.update(0.5);
    assert_eq!(p.progress(), 1.0);
    assert_eq!(p.opacity, 0.0);
}
