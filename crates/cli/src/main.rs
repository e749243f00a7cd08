use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    AxialPoint, HexConfig, HexLayout, HighlightTracker, PixelPoint,
    TileOrientation,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// CLI for playing with hex grid coordinates. Stands in for a game host:
/// feed it pointer positions and it tells you which tile to highlight.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the grid and screen. Supported
    /// formats: JSON, TOML. If not given, the defaults are used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the tile orientation from the config. Options: pointy_top,
    /// flat_top
    #[structopt(long)]
    orientation: Option<TileOrientation>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Read raw pointer positions from stdin, one frame per line, and print
    /// the highlight shader value for each frame as JSON. Positions are in
    /// screen space (origin top-left, y down), written as `x y` or `x,y`.
    /// Blank lines and lines starting with `#` are skipped
    Track,

    /// Print the hex point and tile under a world-space pixel
    Locate { x: f64, y: f64 },

    /// Print the world-space pixel at the center of a hex point
    Center { q: f64, r: f64 },

    /// Print the full config being used, in TOML format
    Config,
}

/// One line of `track` output
#[derive(Debug, Serialize)]
struct Frame {
    frame: usize,
    pointer: PixelPoint,
    highlight: [f64; 3],
    changed: bool,
}

fn load_config(config_path: &Path) -> anyhow::Result<HexConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Parse one line of pointer input. Returns `None` for lines that should be
/// skipped.
fn parse_pointer(line: &str) -> anyhow::Result<Option<PixelPoint>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let components = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| -> anyhow::Result<f64> {
            let value = s
                .parse::<f64>()
                .with_context(|| format!("invalid coordinate {:?}", s))?;
            // Hex math is only defined for finite points
            if value.is_finite() {
                Ok(value)
            } else {
                Err(anyhow!("coordinate {:?} must be finite", s))
            }
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    match components.as_slice() {
        [x, y] => Ok(Some(PixelPoint::new(*x, *y))),
        _ => Err(anyhow!(
            "expected 2 coordinates, got {}",
            components.len()
        )),
    }
}

/// Run the pointer through the tracker one frame at a time, logging each
/// tile change and writing one JSON line per frame.
fn track(
    config: &HexConfig,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    let mut tracker = HighlightTracker::new(config)?;
    let mut frame = 0;

    for (i, line) in input.lines().enumerate() {
        let line = line.context("error reading input")?;
        let raw_pointer = match parse_pointer(&line)
            .with_context(|| format!("error on line {}", i + 1))?
        {
            Some(pointer) => pointer,
            None => continue,
        };

        let change = tracker.update(raw_pointer);
        if let Some(change) = change {
            info!(
                "TILE: {}, {} FOR SHADER: {}, {}.",
                change.current.q,
                change.current.r,
                change.pointer.x,
                change.pointer.y
            );
        }

        let frame_output = Frame {
            frame,
            pointer: tracker.pointer(),
            highlight: tracker
                .shader_param(&config.shader.highlight_param)
                .unwrap_or_default(),
            changed: change.is_some(),
        };
        serde_json::to_writer(&mut output, &frame_output)?;
        writeln!(output)?;
        frame += 1;
    }

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded config from {:?}", config_path);
            config
        }
        None => HexConfig::default(),
    };
    if let Some(orientation) = opt.orientation {
        config.shader.orientation = orientation;
    }

    match opt.command {
        Command::Track => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            track(&config, stdin.lock(), stdout.lock())?;
        }
        Command::Locate { x, y } => {
            let layout = HexLayout::new(&config.shader)
                .context("invalid shader config")?;
            let hex = layout.pixel_to_hex(PixelPoint::new(x, y));
            println!("hex: {}", hex);
            println!("tile: {}", hex.round());
        }
        Command::Center { q, r } => {
            let layout = HexLayout::new(&config.shader)
                .context("invalid shader config")?;
            println!("{}", layout.hex_to_pixel(AxialPoint::new(q, r)));
        }
        Command::Config => {
            // Make sure it's valid before printing
            HighlightTracker::new(&config).context("invalid config")?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
