//! Minimal SVG canvas for dumping frames to disk.

use squishy::{Canvas, Color, Vec2};
use std::fmt::Write;

pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

fn rgb(c: Color) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

fn path(points: &[Vec2<f64>]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.3},{:.3} ", cmd, p.x, p.y);
    }
    d.push('Z');
    d
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        SvgCanvas { width, height, body: String::new() }
    }

    /// The whole document for the current frame.
    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas<f64> for SvgCanvas {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_polygon(&mut self, points: &[Vec2<f64>], color: Color) {
        if points.is_empty() {
            return;
        }
        let _ = writeln!(self.body, "<path d=\"{}\" fill=\"none\" stroke=\"{}\"/>", path(points), rgb(color));
    }

    fn fill_polygon(&mut self, points: &[Vec2<f64>], color: Color) {
        if points.is_empty() {
            return;
        }
        let _ = writeln!(self.body, "<path d=\"{}\" fill=\"{}\"/>", path(points), rgb(color));
    }

    fn line(&mut self, from: Vec2<f64>, to: Vec2<f64>, color: Color) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            rgb(color)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_frame() {
        let mut c = SvgCanvas::new(10.0, 10.0);
        c.line(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Color::RED);
        assert!(c.document().contains("<line"));
        c.clear();
        assert!(!c.document().contains("<line"));
    }

    #[test]
    fn polygon_path_is_closed() {
        let mut c = SvgCanvas::new(10.0, 10.0);
        c.fill_polygon(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)], Color::WHITE);
        assert!(c.document().contains("M0.000,0.000 L1.000,0.000 L0.000,1.000 Z"));
    }
}
