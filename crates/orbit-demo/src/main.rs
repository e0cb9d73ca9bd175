//! ORBIT desktop demo.
//!
//! Builds a carousel of plain frames, replays rotary/button events and
//! prints the layout after each one.
//!
//! Usage: `orbit-demo [--config FILE] [--items N] [--json] [EVENT...]`
//! where EVENT is `left`, `right`, `up`, `down`, `confirm`, `cancel` or
//! `quit`. Without EVENT arguments, events are read from stdin.

mod args;
mod report;

use std::io::BufRead;

use anyhow::{Context, Result};

use args::DemoArgs;
use orbit_types::config::CarouselConfig;
use orbit_types::input::InputEvent;
use orbit_ui::{Carousel, EventResult, Frame, WindowId};

/// Size of the expanded (selected) face.
const FRONT_SIZE: (u32, u32) = (140, 60);
/// Size of the collapsed face.
const BACK_SIZE: (u32, u32) = (80, 40);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = DemoArgs::parse(std::env::args().skip(1))?;

    // Resolve config from --config, ORBIT_CONFIG env var, or defaults.
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var_os("ORBIT_CONFIG").map(Into::into));
    let config = match &config_path {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    log::info!(
        "Starting ORBIT demo ({}x{}, {} slots, {:?}, hardware keys: {})",
        config.width,
        config.height,
        config.visible_count,
        config.scroll_mode,
        config.hardware_keys,
    );

    let mut carousel = Carousel::from_config(WindowId(1), &config);
    for _ in 0..args.item_count() {
        carousel
            .body_mut()
            .push(Frame::new(FRONT_SIZE.0, FRONT_SIZE.1), Frame::new(BACK_SIZE.0, BACK_SIZE.1));
    }
    carousel.update();
    print_layout(&carousel, args.json)?;

    if !args.events.is_empty() {
        for event in &args.events {
            if !dispatch(&mut carousel, event, args.json)? {
                break;
            }
        }
    } else {
        let stdin = std::io::stdin();
        'lines: for line in stdin.lock().lines() {
            let line = line.context("reading stdin")?;
            let events = match args::parse_line(&line) {
                Ok(events) => events,
                Err(e) => {
                    log::warn!("{e}");
                    continue;
                },
            };
            for event in &events {
                if !dispatch(&mut carousel, event, args.json)? {
                    break 'lines;
                }
            }
        }
    }

    log::info!("ORBIT demo finished");
    Ok(())
}

/// Feed one event to the carousel. Returns `false` when the demo should stop.
fn dispatch(carousel: &mut Carousel<Frame>, event: &InputEvent, json: bool) -> Result<bool> {
    if *event == InputEvent::Quit {
        return Ok(false);
    }
    match carousel.on_event(event) {
        EventResult::Handled => print_layout(carousel, json)?,
        EventResult::Forwarded => log::info!("{event:?} forwarded to default handler"),
    }
    Ok(true)
}

fn print_layout(carousel: &Carousel<Frame>, json: bool) -> Result<()> {
    let snapshot = carousel.body().snapshot();
    if json {
        println!("{}", report::to_json(&snapshot)?);
    } else {
        log::info!("{}", report::describe(&snapshot));
    }
    Ok(())
}
