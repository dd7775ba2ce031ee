use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

/// Resolves a geographic coordinate to an IANA timezone.
///
/// Production uses the boundary-index-backed [`GeoTimezoneLocator`]; tests
/// substitute deterministic implementations.
pub trait TimezoneLocator: Send + Sync {
    /// Returns the timezone containing the coordinate, or `None` when the
    /// point belongs to no civil timezone.
    fn locate(&self, lat: f64, lon: f64) -> Option<Tz>;
}

/// Point-in-polygon locator backed by the embedded tzf boundary data.
///
/// Construction deserializes the full index; build it once at startup and
/// share it behind an `Arc`.
pub struct GeoTimezoneLocator {
    finder: DefaultFinder,
}

impl GeoTimezoneLocator {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for GeoTimezoneLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLocator for GeoTimezoneLocator {
    fn locate(&self, lat: f64, lon: f64) -> Option<Tz> {
        let name = self.finder.get_tz_name(lon, lat);

        // The boundary data labels open ocean with Etc/GMT fallback zones;
        // the API treats those coordinates as having no timezone.
        if name.is_empty() || name.starts_with("Etc/GMT") {
            return None;
        }

        name.parse().ok()
    }
}
