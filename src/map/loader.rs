//! Map data loading.

use super::points::SightingPoint;
use super::surface::MapSurface;
use crate::api::{DateRange, DetectionApi};
use tracing::{debug, warn};

/// Fetches sighting points once per invocation and feeds them to a
/// rendering surface.
///
/// Map failures are soft: the loader logs a diagnostic and settles on an
/// empty collection rather than surfacing a blocking error, since the map is
/// supplementary to the detection workflow.
#[derive(Debug)]
pub struct MapLoader {
    points: Vec<SightingPoint>,
    loading: bool,
}

impl MapLoader {
    /// Create a loader in the loading state.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            loading: true,
        }
    }

    /// Loaded sighting points.
    pub fn points(&self) -> &[SightingPoint] {
        &self.points
    }

    /// Whether the initial load has not yet settled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch sighting points from the backend.
    ///
    /// Always settles: on any failure the collection is empty and the
    /// loading flag still drops to `false`.
    pub async fn load_points(
        &mut self,
        api: &(impl DetectionApi + ?Sized),
        range: Option<&DateRange>,
    ) {
        self.points = match api.map_points(range).await {
            Ok(payload) => {
                debug!("loaded {} sighting point(s)", payload.locations.len());
                payload
                    .locations
                    .into_iter()
                    .map(SightingPoint::from_wire)
                    .collect()
            }
            Err(e) => {
                warn!("failed to load sighting points, showing empty map: {e}");
                Vec::new()
            }
        };
        self.loading = false;
    }

    /// Hand all loaded points to a rendering surface.
    pub fn render_to(&self, surface: &mut impl MapSurface) {
        for point in &self.points {
            surface.render_point(point);
        }
    }
}

impl Default for MapLoader {
    fn default() -> Self {
        Self::new()
    }
}
