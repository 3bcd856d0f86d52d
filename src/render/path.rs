use egui::{Pos2, Vec2, pos2};
use std::f32::consts::TAU;
use tiny_skia::PathBuilder;

/// Largest distance allowed between a flattened arc segment and the true arc
const ARC_TOLERANCE: f32 = 0.25;

#[derive(Debug, Clone, Default, PartialEq)]
struct SubPath {
    points: Vec<Pos2>,
    closed: bool,
}

/// Canvas-style path on top of `tiny_skia::PathBuilder`.
///
/// Keeps the canvas path rules that the builder does not have: `line_to` with
/// no current point starts a subpath, `close_path` leaves a fresh subpath at
/// the start point, and arcs are flattened into line segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    fn current_point(&self) -> Option<Pos2> {
        self.subpaths.last().and_then(|s| s.points.last().copied())
    }

    pub fn move_to(&mut self, p: Pos2) {
        self.subpaths.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    pub fn line_to(&mut self, p: Pos2) {
        match self.subpaths.last_mut() {
            Some(sub) if !sub.points.is_empty() => sub.points.push(p),
            _ => self.move_to(p),
        }
    }

    pub fn close(&mut self) {
        let start = match self.subpaths.last_mut() {
            Some(sub) if !sub.points.is_empty() => {
                sub.closed = true;
                sub.points[0]
            }
            _ => return,
        };
        self.move_to(start);
    }

    pub fn rect(&mut self, origin: Pos2, size: Vec2) {
        self.move_to(origin);
        self.line_to(pos2(origin.x + size.x, origin.y));
        self.line_to(origin + size);
        self.line_to(pos2(origin.x, origin.y + size.y));
        self.close();
    }

    /// Append a flattened clockwise arc. Sweeps beyond a full turn are clamped.
    pub fn arc(&mut self, center: Pos2, radius: f32, start_angle: f32, end_angle: f32) {
        let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
        let point_at = |angle: f32| center + radius * Vec2::angled(angle);

        let start = point_at(start_angle);
        if self.current_point().is_some() {
            self.line_to(start);
        } else {
            self.move_to(start);
        }

        let steps = arc_steps(radius, sweep);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.line_to(point_at(start_angle + sweep * t));
        }
    }

    /// Build the renderable path. Single-point subpaths draw nothing and are
    /// skipped; `None` when nothing is left.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for sub in self.subpaths.iter().filter(|s| s.points.len() > 1) {
            let first = sub.points[0];
            builder.move_to(first.x, first.y);
            for p in &sub.points[1..] {
                builder.line_to(p.x, p.y);
            }
            if sub.closed {
                builder.close();
            }
        }
        builder.finish()
    }
}

fn arc_steps(radius: f32, sweep: f32) -> usize {
    if radius <= 0.0 || sweep == 0.0 {
        return 0;
    }
    // Chord error for a step angle a is r * (1 - cos(a / 2)).
    let max_step = 2.0 * (1.0 - (ARC_TOLERANCE / radius).min(1.0)).acos();
    let steps = (sweep.abs() / max_step.max(f32::EPSILON)).ceil() as usize;
    steps.clamp(8, 1024)
}
