// Line-oriented command bridge for external collaborators.
//
// A global input hook, hotkey daemon or settings tool can drive a
// click-through overlay by writing commands to its stdin, one per line:
//
// ```text
// down <x> <y> [left|right|middle]
// up <x> <y> [left|right|middle]
// move <x> <y>
// toggle
// reload
// quit
// ```
//
// Coordinates are logical pixels. Commands are marshaled onto the event-loop
// thread through an `EventLoopProxy`.

use anyhow::{anyhow, bail, Context};
use mousefx_core::{FxCommand, FxConfig, MouseButton};
use std::io::BufRead;
use std::path::PathBuf;
use winit::event_loop::EventLoopProxy;

pub fn parse_line(line: &str, config_path: Option<&std::path::Path>) -> anyhow::Result<Option<FxCommand>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let mut coord = |name: &str| -> anyhow::Result<f32> {
        parts
            .next()
            .ok_or_else(|| anyhow!("`{verb}` needs {name}"))?
            .parse::<f32>()
            .with_context(|| format!("bad {name} in `{line}`"))
    };
    let cmd = match verb.to_ascii_lowercase().as_str() {
        "down" | "up" => {
            let x = coord("x")?;
            let y = coord("y")?;
            let button = match parts.next().map(str::to_ascii_lowercase).as_deref() {
                None | Some("left") => MouseButton::Left,
                Some("right") => MouseButton::Right,
                Some("middle") => MouseButton::Middle,
                Some(other) => bail!("unknown button `{other}`"),
            };
            FxCommand::Button {
                button,
                pressed: verb.eq_ignore_ascii_case("down"),
                x,
                y,
            }
        }
        "move" => {
            let x = coord("x")?;
            let y = coord("y")?;
            FxCommand::Move { x, y }
        }
        "toggle" => FxCommand::Toggle,
        "quit" => FxCommand::Shutdown,
        "reload" => {
            let path = config_path.ok_or_else(|| anyhow!("no config file to reload"))?;
            let config = FxConfig::try_load_from(path)?;
            FxCommand::UpdateConfig(Box::new(config))
        }
        other => bail!("unknown command `{other}`"),
    };
    Ok(Some(cmd))
}

pub fn spawn_stdin_bridge(
    proxy: EventLoopProxy<FxCommand>,
    config_path: Option<PathBuf>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("command-bridge".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("command bridge read failed: {e}");
                        break;
                    }
                };
                match parse_line(&line, config_path.as_deref()) {
                    Ok(Some(cmd)) => {
                        if proxy.send_event(cmd).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("{e:#}"),
                }
            }
            log::debug!("command bridge closed");
        })
}
