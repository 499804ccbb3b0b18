use squishy::render::{draw_mesh, fill_body};
use squishy::{
    Ball, BallConfig, Canvas, Color, FixedStep, PointRef, Vec2, Viewport, World,
};
use wasm_bindgen::prelude::*;

/// Physics tick used by the page's `setInterval` loop.
const TICK: f32 = 0.05;

// ---- Draw buffer ----

/// Collects screen-space geometry so JS can replay it on a 2D context.
#[derive(Default)]
struct DrawBuffer {
    /// Flat `[x0, y0, x1, y1, r, g, b, ...]` per segment.
    lines: Vec<f32>,
    /// Flat `[x0, y0, x1, y1, ...]` per polygon, last one wins.
    polygon: Vec<f32>,
}

impl DrawBuffer {
    fn push_polygon(&mut self, points: &[Vec2<f32>]) {
        self.polygon.clear();
        for p in points {
            self.polygon.push(p.x);
            self.polygon.push(p.y);
        }
    }
}

impl Canvas<f32> for DrawBuffer {
    fn clear(&mut self) {
        self.lines.clear();
        self.polygon.clear();
    }

    fn stroke_polygon(&mut self, points: &[Vec2<f32>], _color: Color) {
        self.push_polygon(points);
    }

    fn fill_polygon(&mut self, points: &[Vec2<f32>], _color: Color) {
        self.push_polygon(points);
    }

    fn line(&mut self, from: Vec2<f32>, to: Vec2<f32>, color: Color) {
        self.lines.extend_from_slice(&[
            from.x,
            from.y,
            to.x,
            to.y,
            color.r as f32,
            color.g as f32,
            color.b as f32,
        ]);
    }
}

// ---- Squishy Demo ----

#[wasm_bindgen]
pub struct SquishyDemo {
    world: World<f32>,
    viewport: Viewport<f32>,
    stepper: FixedStep<f32>,
}

#[wasm_bindgen]
impl SquishyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<SquishyDemo, JsValue> {
        let config = BallConfig::new()
            .with_radius(15.0f32)
            .with_point_count(30)
            .with_stiffness(1.0, 0.25)
            .with_damping(0.0, 0.0);
        let mut ball = Ball::new(&config);
        ball.set_velocity(PointRef::Edge(0), Vec2::new(10.0, 0.0)).map_err(to_js)?;
        ball.set_velocity(PointRef::Edge(2), Vec2::new(-10.0, 0.0)).map_err(to_js)?;

        let mut world = World::new();
        world.add_ball(ball);

        Ok(SquishyDemo {
            world,
            viewport: Viewport::new(Vec2::new(width, height)).with_zoom(5.0).map_err(to_js)?,
            stepper: FixedStep::new(TICK).map_err(to_js)?,
        })
    }

    /// One physics tick. Call from `setInterval`.
    pub fn update(&mut self) {
        self.world.step(TICK);
    }

    /// Bank wall-clock seconds and run the ticks now due.
    pub fn advance(&mut self, elapsed: f32) -> usize {
        self.stepper.step_world(&mut self.world, elapsed)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(Vec2::new(width, height));
    }

    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), JsValue> {
        self.viewport.set_zoom(zoom).map_err(to_js)
    }

    pub fn add_ball(&mut self, x: f32, y: f32, radius: f32, points: usize) -> usize {
        let config = BallConfig::new()
            .with_position(Vec2::new(x, y))
            .with_radius(radius)
            .with_point_count(points);
        self.world.add_ball(Ball::new(&config))
    }

    pub fn set_point_velocity(&mut self, ball: usize, point: usize, vx: f32, vy: f32) -> Result<(), JsValue> {
        let ball = self
            .world
            .ball_mut(ball)
            .ok_or_else(|| JsValue::from_str("no such ball"))?;
        ball.set_velocity(PointRef::Edge(point), Vec2::new(vx, vy)).map_err(to_js)
    }

    pub fn ball_count(&self) -> usize {
        self.world.len()
    }

    /// Returns the ball outline in screen space as flat [x0, y0, x1, y1, ...]
    pub fn ball_outline(&self, index: usize) -> Vec<f32> {
        let mut buf = DrawBuffer::default();
        if let Some(ball) = self.world.ball(index) {
            fill_body(&mut buf, &self.viewport, ball, Color::WHITE);
        }
        buf.polygon
    }

    /// Returns mesh segments as flat [x0, y0, x1, y1, r, g, b, ...]
    pub fn ball_mesh(&self, index: usize) -> Vec<f32> {
        let mut buf = DrawBuffer::default();
        if let Some(ball) = self.world.ball(index) {
            draw_mesh(&mut buf, &self.viewport, ball, Color::RED, Color::GREEN);
        }
        buf.lines
    }
}

fn to_js(err: squishy::PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
