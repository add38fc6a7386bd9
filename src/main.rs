//! vjoy-replay - replay recorded pointer sessions through a virtual joystick
//!
//! Loads a joystick configuration (YAML) and a pointer script (CSV), feeds every
//! event through the joystick and prints the resulting input vector and region
//! positions.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use virtual_joystick::replay::{self, Frame, PointerEventKind};
use virtual_joystick::{AxisMode, JoystickConfig, JoystickMode};

/// Replay pointer scripts through a virtual joystick
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to joystick configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pointer script to replay (CSV with an event,x,y header)
    #[arg(short, long, required_unless_present = "print_schema")]
    script: Option<PathBuf>,

    /// Override the joystick mode (fixed, floating, dynamic)
    #[arg(long)]
    mode: Option<JoystickMode>,

    /// Override the axis mode (both, horizontal, vertical)
    #[arg(long)]
    axis: Option<AxisMode>,

    /// Emit one JSON object per event instead of a table
    #[arg(long)]
    json: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    print_schema: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    if args.print_schema {
        println!("{}", JoystickConfig::json_schema()?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => JoystickConfig::load(path)?,
        None => JoystickConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.joystick.mode = mode;
    }
    if let Some(axis) = args.axis {
        config.joystick.axis_mode = axis;
    }
    config.validate().context("Invalid configuration after overrides")?;

    let script_path = args
        .script
        .as_ref()
        .context("A pointer script is required")?;
    let events = replay::load_script(script_path)?;
    info!("Replaying {} events from {}", events.len(), script_path.display());

    let mut joystick = config.build();
    let frames = replay::replay(&mut joystick, &events);

    if args.json {
        for frame in &frames {
            println!("{}", serde_json::to_string(frame)?);
        }
    } else {
        print_table(&config, &frames);
    }

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}

fn print_table(config: &JoystickConfig, frames: &[Frame]) {
    let settings = &config.joystick;

    println!("\n{}", "=== Joystick Replay ===".bold().cyan());
    println!(
        "  Mode: {}  Axes: {}  Range: {}  Dead zone: {}",
        settings.mode.to_string().green(),
        settings.axis_mode.to_string().green(),
        settings.handle_range.to_string().green(),
        settings.dead_zone.to_string().green()
    );
    println!(
        "  Canvas: {} (scale {})\n",
        config.canvas.render_mode.to_string().green(),
        config.canvas.scale_factor
    );

    println!(
        "{:>5}  {:<5}  {:>17}  {:>15}  {:>17}  {:>17}",
        "#".bold(),
        "event".bold(),
        "pointer".bold(),
        "input".bold(),
        "base".bold(),
        "handle".bold()
    );

    for frame in frames {
        let event = match frame.event {
            PointerEventKind::Down => "down".yellow(),
            PointerEventKind::Drag => "drag".normal(),
            PointerEventKind::Up => "up".blue(),
        };
        let pointer = if frame.event == PointerEventKind::Up {
            "-".to_string()
        } else {
            format!("({:.1}, {:.1})", frame.pointer.x, frame.pointer.y)
        };
        let input = format!("({:.3}, {:.3})", frame.input.x, frame.input.y);
        let input = if frame.input.length() >= 0.999 {
            input.red()
        } else if frame.input == glam::Vec2::ZERO {
            input.dimmed()
        } else {
            input.green()
        };
        let base = format!("({:.1}, {:.1})", frame.base_position.x, frame.base_position.y);
        let base = if frame.base_visible { base.normal() } else { base.dimmed() };

        println!(
            "{:>5}  {:<5}  {:>17}  {:>15}  {:>17}  {:>17}",
            frame.index,
            event,
            pointer,
            input,
            base,
            format!("({:.1}, {:.1})", frame.handle_position.x, frame.handle_position.y)
        );
    }

    println!(
        "\n  {} events, final input ({:.3}, {:.3})",
        frames.len().to_string().green(),
        frames.last().map(|f| f.input.x).unwrap_or(0.0),
        frames.last().map(|f| f.input.y).unwrap_or(0.0)
    );
}
