//! Value-type commands that external collaborators (input capture, hotkey
//! and tray integrations, settings UI) hand to the engine's owning thread.

use crate::config::FxConfig;
use crate::engine::EffectEngine;
use crate::hotkey::{Hotkey, Key, Modifiers};
use crate::input::{MouseButton, PointerRouter, PointerState};
use glam::Vec2;
use instant::Instant;
use log::{info, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum FxCommand {
    Button {
        button: MouseButton,
        pressed: bool,
        x: f32,
        y: f32,
    },
    Move {
        x: f32,
        y: f32,
    },
    Toggle,
    Shutdown,
    UpdateConfig(Box<FxConfig>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
struct Hotkeys {
    toggle: Option<Hotkey>,
    quit: Option<Hotkey>,
}

impl Hotkeys {
    fn from_config(config: &FxConfig) -> Self {
        let parse = |name: &str, s: &str| match Hotkey::parse(s) {
            Ok(hk) => Some(hk),
            Err(e) => {
                warn!("{name} hotkey disabled: {e}");
                None
            }
        };
        Self {
            toggle: parse("toggle", &config.hotkeys.toggle_effects),
            quit: parse("quit", &config.hotkeys.quit),
        }
    }
}

/// Engine plus the small amount of state needed to interpret commands.
pub struct Controller {
    engine: EffectEngine,
    router: PointerRouter,
    hotkeys: Hotkeys,
}

impl Controller {
    pub fn new(config: &FxConfig, engine: EffectEngine) -> Self {
        let mut engine = engine;
        engine.set_visible(config.effects.enabled);
        Self {
            engine,
            router: PointerRouter::new(),
            hotkeys: Hotkeys::from_config(config),
        }
    }

    pub fn engine(&self) -> &EffectEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EffectEngine {
        &mut self.engine
    }

    /// Last pointer position and button state seen by the router.
    pub fn pointer(&self) -> PointerState {
        self.router.state()
    }

    pub fn handle(&mut self, command: FxCommand, now: Instant) -> Flow {
        match command {
            FxCommand::Button {
                button,
                pressed,
                x,
                y,
            } => {
                self.router
                    .on_button(&mut self.engine, button, pressed, Vec2::new(x, y));
            }
            FxCommand::Move { x, y } => {
                self.router.on_move(&mut self.engine, Vec2::new(x, y), now);
            }
            FxCommand::Toggle => self.engine.toggle(),
            FxCommand::Shutdown => {
                info!("shutdown requested");
                return Flow::Exit;
            }
            FxCommand::UpdateConfig(config) => {
                self.engine.update_config(&config.effects);
                self.engine.set_visible(config.effects.enabled);
                self.hotkeys = Hotkeys::from_config(&config);
            }
        }
        Flow::Continue
    }

    /// Map a key press to the configured toggle/quit actions.
    pub fn command_for_key(&self, modifiers: Modifiers, key: Key) -> Option<FxCommand> {
        if self.hotkeys.toggle.is_some_and(|hk| hk.matches(modifiers, key)) {
            Some(FxCommand::Toggle)
        } else if self.hotkeys.quit.is_some_and(|hk| hk.matches(modifiers, key)) {
            Some(FxCommand::Shutdown)
        } else {
            None
        }
    }
}
