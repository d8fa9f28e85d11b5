//! Render sink abstraction
//!
//! The simulation does not know how it is displayed. Anything that can
//! draw a disk, draw a polyline and finish a frame can show it: the bevy
//! viewer implements this with gizmos, headless runs with [`ConsoleSink`].

use std::io::Write;

use crate::simulation::states::{NVec2, Rgb};

pub trait RenderSink {
    /// Draw one particle centered at `position`
    fn draw_particle(&mut self, position: NVec2, color: Rgb, radius: f64);

    /// Draw a trail, points ordered oldest to newest
    fn draw_trail(&mut self, points: &[NVec2], color: Rgb);

    /// Finish the current frame
    fn present(&mut self);
}

/// Writes one line per particle and a separator per frame.
/// Trails are summarized by their length.
pub struct ConsoleSink<W: Write> {
    out: W,
    frame: u64,
    drawn: usize,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, frame: 0, drawn: 0 }
    }

    /// Write a free-form line, e.g. a per-frame header
    pub fn note(&mut self, line: impl std::fmt::Display) {
        // Console output is best effort; a closed pipe must not stop the run
        let _ = writeln!(self.out, "{}", line);
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for ConsoleSink<W> {
    fn draw_particle(&mut self, position: NVec2, color: Rgb, _radius: f64) {
        let Rgb(r, g, b) = color;
        let _ = writeln!(
            self.out,
            "  #{:<3} pos[{:>8.2}|{:>8.2}] rgb({:>3},{:>3},{:>3})",
            self.drawn, position.x, position.y, r, g, b
        );
        self.drawn += 1;
    }

    fn draw_trail(&mut self, points: &[NVec2], _color: Rgb) {
        let _ = writeln!(self.out, "       trail: {} points", points.len());
    }

    fn present(&mut self) {
        let _ = writeln!(self.out, "-- frame {} ({} particles)", self.frame, self.drawn);
        let _ = self.out.flush();
        self.frame += 1;
        self.drawn = 0;
    }
}
