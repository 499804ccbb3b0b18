mod scene;
mod svg;

use scene::SceneConfig;
use svg::SvgCanvas;

use squishy::render::render_world;
use squishy::{FixedStep, FrameClock, MeshStyle};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Host polling granularity for the cooperative loop.
const POLL: Duration = Duration::from_millis(1);

#[derive(Parser, Debug)]
struct Args {
    /// Scene file, either a path or a name under `scenarios/`
    #[arg(short, long, default_value = "default.yaml")]
    scene: String,

    /// Override the scene duration in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Where to write the last rendered frame
    #[arg(short, long, default_value = "frame.svg")]
    output: PathBuf,

    /// Pace the loop against the wall clock instead of a virtual one
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scene = SceneConfig::load(&args.scene)?;
    let mut world = scene.build_world()?;
    let viewport = scene.build_viewport()?;
    let duration = args.duration.unwrap_or(scene.duration);
    info!(
        "scene {}: {} balls, dt {} every {} ms, frame every {} ms, {} s",
        args.scene,
        world.len(),
        scene.dt,
        scene.tick_ms,
        scene.frame_ms,
        duration
    );

    let mut physics = FixedStep::new(scene.tick_ms / 1000.0).context("tick_ms")?;
    let mut frames = FrameClock::new(scene.frame_ms / 1000.0).context("frame_ms")?;
    let mut canvas = SvgCanvas::new(scene.viewport.width, scene.viewport.height);
    let style = MeshStyle::default();

    // Single thread: ticks and frames alternate, never interleave.
    let mut clock = 0.0;
    let mut drawn = 0u64;
    let mut last = Instant::now();
    while clock < duration {
        let elapsed = if args.realtime {
            std::thread::sleep(POLL);
            let now = Instant::now();
            let e = now.duration_since(last).as_secs_f64();
            last = now;
            e
        } else {
            POLL.as_secs_f64()
        };
        clock += elapsed;

        for _ in 0..physics.advance(elapsed) {
            world.step(scene.dt);
        }
        if frames.tick(elapsed) {
            render_world(&mut canvas, &viewport, &world, &style);
            drawn += 1;
        }
    }

    render_world(&mut canvas, &viewport, &world, &style);
    std::fs::write(&args.output, canvas.document())
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(
        "done: {} ticks, {} frames, {} ticks dropped, final frame at {}",
        world.ticks(),
        drawn,
        physics.dropped(),
        args.output.display()
    );
    for (i, ball) in world.balls().iter().enumerate() {
        let c = ball.center();
        println!("ball {}: center ({:.4}, {:.4}), area {:.4}", i, c.x, c.y, ball.area());
    }

    Ok(())
}
