use mousefx_core::FxCommand;
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window, WindowBuilder, WindowLevel};

/// Fullscreen, borderless, transparent, always-on-top drawing target.
pub fn build_window(
    event_loop: &EventLoop<FxCommand>,
    title: &str,
    click_through: bool,
) -> anyhow::Result<Window> {
    let window = WindowBuilder::new()
        .with_title(title)
        .with_transparent(true)
        .with_decorations(false)
        .with_resizable(false)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .build(event_loop)?;
    if click_through {
        // Input then has to arrive through the command bridge.
        if let Err(e) = window.set_cursor_hittest(false) {
            log::warn!("click-through unavailable: {e}");
        }
    }
    Ok(window)
}
