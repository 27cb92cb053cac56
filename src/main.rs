//! A terminal front-end for the picker. It reads one command per line from stdin, feeds it to the
//! controller as an edit, and prints every surface the controller writes next to a swatch of the
//! current color.
//!
//! Commands: `wheel N`, `sat N`, `light N`, `hex TEXT`, `rgb TEXT`, `cmyk TEXT`,
//! `scroll up|down [fast]`, `drag X Y`, `copy hex|rgb|cmyk`, `json`, `quit`.
//!
//! Set `TINCT_CONFIG` to the path of a JSON config file to change the defaults; `RUST_LOG`
//! overrides the configured log level.

#[macro_use]
extern crate log;
extern crate env_logger;
extern crate geo;
extern crate serde_json;
extern crate termion;
extern crate tinct;

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use geo::Point;
use termion::color::{Bg, Reset, Rgb};

use tinct::config::{ConfigError, PickerConfig};
use tinct::prelude::*;
use tinct::snapshot::clipboard_text;
use tinct::wheel::ColorWheel;

/// How far one `scroll` command turns the wheel, in the units toolkits report for one notch.
const NOTCH: i32 = 120;

/// Prints each surface as a line, and keeps the wheel widget in step with the model.
struct TerminalView<W: Write> {
    out: W,
    wheel: ColorWheel,
}

impl<W: Write> TerminalView<W> {
    fn swatch_line(&mut self, label: &str, text: &str, rgb: (u8, u8, u8)) {
        let (r, g, b) = rgb;
        let written = writeln!(
            self.out,
            "{}    {} {:>10}  {}",
            Bg(Rgb(r, g, b)),
            Bg(Reset),
            label,
            text
        );
        if let Err(e) = written {
            warn!("could not write to the terminal: {}", e);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show(&mut self, surface: Surface, snapshot: &Snapshot) -> Option<Edit> {
        let text = match surface {
            Surface::Wheel => {
                self.wheel.show_hue(snapshot.hue);
                let indicator = self.wheel.indicator();
                format!(
                    "{} (angle {}, indicator at {}, {})",
                    self.wheel.label(),
                    self.wheel.angle(),
                    indicator.x(),
                    indicator.y()
                )
            }
            Surface::Saturation | Surface::Lightness => {
                format!("{}%", surface.display_text(snapshot))
            }
            _ => surface.display_text(snapshot),
        };
        self.swatch_line(&surface.to_string(), &text, snapshot.rgb);
        // plain terminal output never echoes
        None
    }
}

enum Command {
    Apply(Edit),
    Scroll { delta: i32, fast: bool },
    Drag(Point<i32>),
    Copy(CopyFormat),
    Json,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.splitn(2, char::is_whitespace);
    let name = words.next().unwrap_or("");
    let rest = words.next().unwrap_or("").trim();
    let number = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| format!("`{}` is not a whole number", s))
    };
    match name {
        "wheel" => Ok(Command::Apply(Edit::WheelAngle(number(rest)?))),
        "sat" => Ok(Command::Apply(Edit::Saturation(number(rest)?))),
        "light" => Ok(Command::Apply(Edit::Lightness(number(rest)?))),
        "hex" => Ok(Command::Apply(Edit::Hex(rest.to_string()))),
        "rgb" => Ok(Command::Apply(Edit::Rgb(rest.to_string()))),
        "cmyk" => Ok(Command::Apply(Edit::Cmyk(rest.to_string()))),
        "scroll" => {
            let mut args = rest.split_whitespace();
            let delta = match args.next() {
                Some("up") => NOTCH,
                Some("down") => -NOTCH,
                _ => return Err("scroll takes `up` or `down`".to_string()),
            };
            let fast = args.next() == Some("fast");
            Ok(Command::Scroll { delta, fast })
        }
        "drag" => {
            let coords: Vec<&str> = rest.split_whitespace().collect();
            if coords.len() != 2 {
                return Err("drag takes an x and a y".to_string());
            }
            Ok(Command::Drag(Point::new(number(coords[0])?, number(coords[1])?)))
        }
        "copy" => rest.parse().map(Command::Copy).map_err(|e| e.to_string()),
        "json" => Ok(Command::Json),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(format!("unknown command `{}`", name)),
    }
}

fn edit<W: Write>(controller: &mut Controller<TerminalView<W>>, edit: Edit) {
    if let Err(e) = controller.handle(edit) {
        // text fields are forgiving: the user may still be typing
        debug!("ignored: {}", e);
    }
}

fn run<W: Write>(controller: &mut Controller<TerminalView<W>>, command: Command) -> bool {
    match command {
        Command::Apply(e) => {
            // a wheel edit never refreshes the wheel itself, so the widget follows here
            if let Edit::WheelAngle(angle) = e {
                controller.view_mut().wheel.set_angle(angle);
            }
            edit(controller, e)
        }
        Command::Scroll { delta, fast } => {
            let wheel = &mut controller.view_mut().wheel;
            wheel.set_modifier(fast);
            let angle = wheel.scroll(delta);
            wheel.set_modifier(false);
            edit(controller, Edit::WheelAngle(i32::from(angle)));
        }
        Command::Drag(pointer) => {
            let angle = controller.view_mut().wheel.drag_to(pointer);
            edit(controller, Edit::WheelAngle(i32::from(angle)));
        }
        Command::Copy(format) => {
            let text = clipboard_text(format, &controller.model().snapshot());
            println!("copied {}: {}", format, text);
        }
        Command::Json => {
            let snapshot = controller.model().snapshot();
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("could not serialize the snapshot: {}", e),
            }
        }
        Command::Quit => return false,
    }
    true
}

fn load_config() -> Result<PickerConfig, ConfigError> {
    match env::var_os("TINCT_CONFIG") {
        Some(path) => PickerConfig::load(path),
        None => Ok(PickerConfig::default()),
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tinct: {}", e);
            process::exit(1);
        }
    };
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let view = TerminalView {
        out: io::stdout(),
        wheel: ColorWheel::from_config(&config),
    };
    let model = ColorSyncModel::with_color(config.initial_color);
    let mut controller = Controller::new(model, view);
    controller.render_all();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("could not read stdin: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Ok(command) => {
                if !run(&mut controller, command) {
                    break;
                }
            }
            Err(msg) => eprintln!("{}", msg),
        }
    }
    info!("{} echoed updates suppressed this session", controller.suppressed());
}
