use crate::engine::EffectEngine;
use glam::Vec2;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
}

impl PointerState {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Physical pixels from an input source to the logical space the overlay
/// draws in. Mismatched scale factors show up as effects drifting away from
/// the cursor on scaled displays.
#[inline]
pub fn to_logical(physical: Vec2, scale_factor: f64) -> Vec2 {
    if scale_factor > 0.0 && scale_factor.is_finite() {
        physical / scale_factor as f32
    } else {
        physical
    }
}

/// Turns raw button/move events into bursts and trails: a left press bursts,
/// moving while the left button is held leaves a trail.
#[derive(Default, Debug)]
pub struct PointerRouter {
    state: PointerState,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn on_button(
        &mut self,
        engine: &mut EffectEngine,
        button: MouseButton,
        pressed: bool,
        pos: Vec2,
    ) {
        self.state.x = pos.x;
        self.state.y = pos.y;
        if button != MouseButton::Left {
            return;
        }
        self.state.left_down = pressed;
        if pressed {
            engine.spawn_burst(pos);
        }
    }

    pub fn on_move(&mut self, engine: &mut EffectEngine, pos: Vec2, now: Instant) {
        self.state.x = pos.x;
        self.state.y = pos.y;
        if self.state.left_down {
            engine.spawn_trail(pos, now);
        }
    }
}
