use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use glam::Vec2;
use mousefx_core::{
    to_logical, Controller, DrawList, EffectEngine, Flow, FxCommand, FxConfig, TICK_INTERVAL,
};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};

mod bridge;
mod events;
mod glyphs;
mod overlay;
mod render;
mod tessellate;

use render::GpuState;
use tessellate::Tessellator;

/// Click bursts and drag trails on a transparent, always-on-top overlay.
#[derive(Parser, Debug)]
#[command(name = "mousefx", version, about)]
struct Args {
    /// Settings document (defaults to config.json next to the binary or in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed for reproducible effects
    #[arg(long)]
    seed: Option<u64>,
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
    /// Let mouse input pass through the overlay; drive it with --stdin-bridge
    #[arg(long)]
    click_through: bool,
    /// Read commands (down/up/move/toggle/reload/quit) from stdin
    #[arg(long)]
    stdin_bridge: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_path = FxConfig::locate(args.config.as_deref());
    let config = config_path
        .as_deref()
        .map(FxConfig::load_from)
        .unwrap_or_default();

    let level = if args.debug || config.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();
    match &config_path {
        Some(p) => log::info!("using settings from {}", p.display()),
        None => log::info!("no settings file found, using defaults"),
    }

    let engine = match args.seed {
        Some(seed) => EffectEngine::new(&config.effects, seed),
        None => EffectEngine::from_entropy(&config.effects),
    };
    let mut controller = Controller::new(&config, engine);

    let event_loop = EventLoopBuilder::<FxCommand>::with_user_event().build()?;
    if args.stdin_bridge {
        bridge::spawn_stdin_bridge(event_loop.create_proxy(), config_path.clone())?;
    }
    let window = overlay::build_window(&event_loop, &config.app.name, args.click_through)?;
    let mut gpu = pollster::block_on(GpuState::new(&window))?;

    let mut draw_list = DrawList::new();
    let mut tessellator = Tessellator::new();
    let mut modifiers = mousefx_core::Modifiers::default();
    let mut next_tick = Instant::now();

    event_loop.run(move |event, elwt| {
        let flow = match event {
            Event::UserEvent(cmd) => controller.handle(cmd, Instant::now()),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    gpu.resize(size);
                    Flow::Continue
                }
                WindowEvent::CloseRequested => Flow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    let pos = to_logical(
                        Vec2::new(position.x as f32, position.y as f32),
                        gpu.window.scale_factor(),
                    );
                    controller.handle(FxCommand::Move { x: pos.x, y: pos.y }, Instant::now())
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let pos = controller.pointer().pos();
                    controller.handle(
                        FxCommand::Button {
                            button: events::map_button(button),
                            pressed: state == ElementState::Pressed,
                            x: pos.x,
                            y: pos.y,
                        },
                        Instant::now(),
                    )
                }
                WindowEvent::ModifiersChanged(m) => {
                    modifiers = events::map_modifiers(m.state());
                    Flow::Continue
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => events::map_key(&logical_key)
                    .and_then(|key| controller.command_for_key(modifiers, key))
                    .map(|cmd| controller.handle(cmd, Instant::now()))
                    .unwrap_or(Flow::Continue),
                WindowEvent::RedrawRequested => {
                    controller.engine().render(&mut draw_list);
                    let vertices = tessellator.build(&draw_list);
                    match gpu.render(vertices) {
                        Ok(()) => Flow::Continue,
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(gpu.window.inner_size());
                            Flow::Continue
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            Flow::Exit
                        }
                        Err(e) => {
                            log::debug!("frame skipped: {e}");
                            Flow::Continue
                        }
                    }
                }
                _ => Flow::Continue,
            },
            Event::AboutToWait => {
                let now = Instant::now();
                if now >= next_tick {
                    controller.engine_mut().tick(now);
                    next_tick = now + TICK_INTERVAL;
                    gpu.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
                Flow::Continue
            }
            _ => Flow::Continue,
        };
        if flow == Flow::Exit {
            elwt.exit();
        }
    })?;
    Ok(())
}
