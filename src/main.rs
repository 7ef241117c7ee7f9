use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use escape_viewport::{screen, Config, NavEvent, Params, PassOutcome, Rgba, Session};
use log::{debug, info};

/// Run the escape-time animation headlessly for a number of frames.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Iteration budget per pixel.
    #[arg(long, default_value_t = 100)]
    steps: u32,

    /// Escape magnitude.
    #[arg(long, default_value_t = 1000.0)]
    threshold: f64,

    /// Magnification per zoom step.
    #[arg(long, default_value_t = 1.2)]
    zoom_scale: f64,

    /// Smallest viewport extent reachable by zooming in.
    #[arg(long, default_value_t = 1e-13)]
    min_extent: f64,

    /// Largest viewport extent reachable by zooming out.
    #[arg(long, default_value_t = 1e6)]
    max_extent: f64,

    /// Length of the colour cycle in frames.
    #[arg(long, default_value_t = 100)]
    tick_max: u32,

    /// Worker threads (defaults to one per logical CPU).
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = 100)]
    frames: u32,

    /// Time between frames.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Scroll in at this grid position (proportions in [0, 1]) every `zoom_every` frames.
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    zoom_at: Option<Vec<f64>>,

    #[arg(long, default_value_t = 10)]
    zoom_every: u32,

    /// Write the last frame to this path as a binary PPM.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            tick_max: self.tick_max,
            threads: self.threads,
            params: Params {
                steps: self.steps,
                threshold: self.threshold,
                zoom_scale: self.zoom_scale,
                min_extent: self.min_extent,
                max_extent: self.max_extent,
            },
        }
    }
}

fn write_ppm(path: &Path, size: screen::Size, pixels: &[Rgba]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "P6\n{} {}\n255\n", size.width, size.height)?;
    for pixel in pixels {
        writer.write_all(&[pixel.r, pixel.g, pixel.b])?;
    }
    writer.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config();

    let mut session =
        Session::with_default_palette(&config).context("invalid configuration")?;
    let controller = session.controller();
    let mut pixels = session.pixel_buffer();
    let interval = Duration::from_millis(args.interval_ms);
    let zoom_every = args.zoom_every.max(1);

    info!(
        "rendering {} frames at {}x{}",
        args.frames, config.width, config.height
    );

    for frame in 0..args.frames {
        let start = Instant::now();

        if let Some(at) = &args.zoom_at {
            if frame > 0 && frame % zoom_every == 0 {
                controller.send(NavEvent::Scroll {
                    x: at[0],
                    y: at[1],
                    dy: 1.0,
                });
            }
        }

        let report = session.frame(&mut pixels)?;
        let elapsed = start.elapsed();
        debug!(
            "frame {} tick {} {:?} in {:?}",
            frame, report.tick, report.outcome, elapsed
        );
        if report.outcome == PassOutcome::Cancelled {
            info!("frame {} showed the previous field", frame);
        }

        if let Some(remaining) = interval.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    info!("final view {:?}", session.model().viewport());

    if let Some(path) = &args.output {
        write_ppm(path, session.size(), &pixels)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
