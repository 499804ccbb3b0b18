//! Scene files for the headless driver.
//!
//! A scene is a YAML document describing timing, the viewport and the balls
//! to simulate:
//!
//! ```yaml
//! dt: 0.05            # simulated seconds per physics tick
//! tick_ms: 10.0       # wall-clock interval between physics ticks
//! frame_ms: 16.0      # wall-clock interval between frames
//! duration: 5.0       # wall-clock seconds to run
//! viewport:
//!   width: 800.0
//!   height: 600.0
//!   zoom: 5.0
//! balls:
//!   - config:
//!       radius: 15.0
//!       point_count: 30
//!       center_stiffness: 0.25
//!     kicks:
//!       - { point: 0, velocity: { x: 10.0, y: 0.0 } }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use squishy::{Ball, BallConfig, PointRef, Vec2, Viewport, World};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Initial velocity for one edge point.
#[derive(Deserialize, Debug, Clone)]
pub struct Kick {
    pub point: usize,
    pub velocity: Vec2<f64>,
}

/// One ball and the kicks applied before the first tick.
#[derive(Deserialize, Debug, Clone)]
pub struct BallEntry {
    #[serde(default)]
    pub config: BallConfig<f64>,
    #[serde(default)]
    pub kicks: Vec<Kick>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default = "one")]
    pub zoom: f64,
    #[serde(default)]
    pub center: Vec2<f64>,
}

fn one() -> f64 {
    1.0
}

/// Top-level scene loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct SceneConfig {
    pub dt: f64,
    pub tick_ms: f64,
    pub frame_ms: f64,
    pub duration: f64,
    pub viewport: ViewportConfig,
    pub balls: Vec<BallEntry>,
}

impl SceneConfig {
    /// Load `name` as given, or from the crate's `scenarios/` directory.
    pub fn load(name: &str) -> Result<Self> {
        let path = resolve(name);
        let file = File::open(&path).with_context(|| format!("opening scene {}", path.display()))?;
        let scene: SceneConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing scene {}", path.display()))?;
        Ok(scene)
    }

    pub fn build_world(&self) -> Result<World<f64>> {
        let mut world = World::new();
        for (i, entry) in self.balls.iter().enumerate() {
            let mut ball = Ball::new(&entry.config);
            for kick in &entry.kicks {
                ball.set_velocity(PointRef::Edge(kick.point), kick.velocity)
                    .with_context(|| format!("kick on ball {}", i))?;
            }
            world.add_ball(ball);
        }
        Ok(world)
    }

    pub fn build_viewport(&self) -> Result<Viewport<f64>> {
        let vp = &self.viewport;
        let mut viewport = Viewport::new(Vec2::new(vp.width, vp.height)).with_zoom(vp.zoom)?;
        viewport.set_center(vp.center);
        Ok(viewport)
    }
}

fn resolve(name: &str) -> PathBuf {
    let direct = Path::new(name);
    if direct.exists() {
        return direct.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenes_load() {
        for name in ["default.yaml", "averaged.yaml"] {
            let scene = SceneConfig::load(name).unwrap();
            let world = scene.build_world().unwrap();
            assert_eq!(world.len(), scene.balls.len());
            scene.build_viewport().unwrap();
        }
    }

    #[test]
    fn kick_outside_ring_is_an_error() {
        let yaml = r#"
dt: 0.01
tick_ms: 10.0
frame_ms: 16.0
duration: 1.0
viewport: { width: 10.0, height: 10.0 }
balls:
  - config: { point_count: 4 }
    kicks:
      - { point: 4, velocity: { x: 1.0, y: 0.0 } }
"#;
        let scene: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        let err = scene.build_world().unwrap_err();
        assert!(format!("{:#}", err).contains("out of bounds"), "{:#}", err);
    }
}
