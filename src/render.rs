//! Viewport mapping and the drawing interface used by front-ends.
//!
//! Rendering only reads committed point positions; nothing here mutates a
//! ball.

use crate::body::Ball;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};
use crate::world::World;
use alloc::vec::Vec as AllocVec;

/// An RGBA colour passed through to the canvas untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Drawing back-end. All coordinates are screen space.
pub trait Canvas<F: Float> {
    fn clear(&mut self);
    fn stroke_polygon(&mut self, points: &[Vec2<F>], color: Color);
    fn fill_polygon(&mut self, points: &[Vec2<F>], color: Color);
    fn line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Color);
}

/// Maps game coordinates (y up) onto a screen (y down).
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    zoom: F,
    game_center: Vec2<F>,
    screen_size: Vec2<F>,
}

impl<F: Float> Viewport<F> {
    /// Unit zoom, game origin at the middle of the screen.
    pub fn new(screen_size: Vec2<F>) -> Self {
        Viewport { zoom: F::one(), game_center: Vec2::zero(), screen_size }
    }

    pub fn with_zoom(mut self, zoom: F) -> Result<Self, PhysicsError> {
        self.set_zoom(zoom)?;
        Ok(self)
    }

    pub fn set_zoom(&mut self, zoom: F) -> Result<(), PhysicsError> {
        if !(zoom > F::zero()) {
            return Err(PhysicsError::InvalidArgument("zoom must be positive"));
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Game coordinate shown at the middle of the screen.
    pub fn set_center(&mut self, center: Vec2<F>) {
        self.game_center = center;
    }

    pub fn resize(&mut self, screen_size: Vec2<F>) {
        self.screen_size = screen_size;
    }

    pub fn zoom(&self) -> F {
        self.zoom
    }

    pub fn screen_size(&self) -> Vec2<F> {
        self.screen_size
    }

    fn screen_center(&self) -> Vec2<F> {
        self.screen_size.scale(F::half())
    }

    fn flip() -> Vec2<F> {
        Vec2::new(F::one(), -F::one())
    }

    pub fn game_to_screen(&self, v: Vec2<F>) -> Vec2<F> {
        (v - self.game_center).component_mul(Self::flip()).scale(self.zoom) + self.screen_center()
    }

    pub fn screen_to_game(&self, v: Vec2<F>) -> Vec2<F> {
        (v - self.screen_center()).scale(F::one() / self.zoom).component_mul(Self::flip())
            + self.game_center
    }

    /// Visible game rectangle as `(min, max)`.
    pub fn game_bounds(&self) -> (Vec2<F>, Vec2<F>) {
        let a = self.screen_to_game(Vec2::zero());
        let b = self.screen_to_game(self.screen_size);
        (
            Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    fn map_points(&self, points: &[Vec2<F>]) -> AllocVec<Vec2<F>> {
        points.iter().map(|&p| self.game_to_screen(p)).collect()
    }
}

/// Colours for [`render_world`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshStyle {
    pub edge: Color,
    pub spoke: Color,
    pub fill: Option<Color>,
}

impl Default for MeshStyle {
    fn default() -> Self {
        MeshStyle { edge: Color::RED, spoke: Color::GREEN, fill: None }
    }
}

/// Stroke the edge ring as a closed polygon.
pub fn draw_outline<F: Float, C: Canvas<F>>(canvas: &mut C, viewport: &Viewport<F>, ball: &Ball<F>, color: Color) {
    let points = viewport.map_points(&ball.points());
    canvas.stroke_polygon(&points, color);
}

/// Fill the edge ring.
pub fn fill_body<F: Float, C: Canvas<F>>(canvas: &mut C, viewport: &Viewport<F>, ball: &Ball<F>, color: Color) {
    let points = viewport.map_points(&ball.points());
    canvas.fill_polygon(&points, color);
}

/// Draw every ring segment plus a spoke from each edge point to the center.
pub fn draw_mesh<F: Float, C: Canvas<F>>(
    canvas: &mut C,
    viewport: &Viewport<F>,
    ball: &Ball<F>,
    edge: Color,
    spoke: Color,
) {
    let points = viewport.map_points(&ball.points());
    let center = viewport.game_to_screen(ball.center());
    let n = points.len();
    for i in 0..n {
        canvas.line(points[i], points[(i + 1) % n], edge);
        canvas.line(points[i], center, spoke);
    }
}

/// Clear and draw a whole frame.
pub fn render_world<F: Float, C: Canvas<F>>(
    canvas: &mut C,
    viewport: &Viewport<F>,
    world: &World<F>,
    style: &MeshStyle,
) {
    canvas.clear();
    for ball in world.balls() {
        if let Some(fill) = style.fill {
            fill_body(canvas, viewport, ball, fill);
        }
        draw_mesh(canvas, viewport, ball, style.edge, style.spoke);
    }
}
