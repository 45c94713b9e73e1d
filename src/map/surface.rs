//! Map rendering surface contract.

use super::points::SightingPoint;
use std::io::Write;

/// External collaborator that renders sighting points.
///
/// The contract is deliberately minimal: render a point at `(lat, lon)` with
/// an associated popup. Tile rendering, clustering, and styling live behind
/// this trait and are out of scope here.
pub trait MapSurface {
    /// Render a single sighting point.
    fn render_point(&mut self, point: &SightingPoint);
}

/// Plain-text surface writing one line per sighting.
pub struct TextMapSurface<W: Write> {
    writer: W,
    rendered: usize,
}

impl<W: Write> TextMapSurface<W> {
    /// Create a surface over any writer (typically stdout).
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rendered: 0,
        }
    }

    /// Number of points rendered so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl<W: Write> MapSurface for TextMapSurface<W> {
    fn render_point(&mut self, point: &SightingPoint) {
        // Broken-pipe on stdout is not worth failing the command over.
        let _ = writeln!(
            self.writer,
            "  {:>9.4}, {:>9.4}  {}",
            point.latitude, point.longitude, point.popup
        );
        self.rendered += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_surface_renders_lines() {
        let mut surface = TextMapSurface::new(Vec::new());
        surface.render_point(&SightingPoint {
            latitude: 23.4697,
            longitude: 120.9525,
            popup: "Yushan sighting".to_string(),
        });
        surface.render_point(&SightingPoint {
            latitude: 24.1,
            longitude: 121.2,
            popup: String::new(),
        });

        assert_eq!(surface.rendered(), 2);
        let output = String::from_utf8(surface.writer).unwrap();
        assert!(output.contains("23.4697"));
        assert!(output.contains("Yushan sighting"));
        assert_eq!(output.lines().count(), 2);
    }
}
