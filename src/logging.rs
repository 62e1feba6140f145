//! Per-tick position logging
//!
//! Optional collaborator fed by the owning caller after each update. The
//! core guarantees only the data handed over: entity id plus continuous
//! position. Format and destination belong to the sink.

use glam::DVec2;
use std::io::Write;

/// Append-only receiver for per-tick positions
pub trait PositionSink {
    fn record(&mut self, id: u32, pos: DVec2);
}

/// Human-readable text sink over any writer. Writes are best-effort; a full
/// or broken sink must never stall the simulation.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PositionSink for TextSink<W> {
    fn record(&mut self, id: u32, pos: DVec2) {
        if writeln!(self.out, "ball {id:3} \t ({:.3}, {:.3})", pos.x, pos.y).is_err() {
            log::warn!("position sink write failed for projectile {id}");
        }
    }
}
