use std::sync::OnceLock;

use regex::Regex;

/// Accepted manual input: optional brackets, latitude and longitude each with
/// 1-2 integer digits and exactly 5 fractional digits, comma with optional
/// space between them.
const COORDS_PATTERN: &str = r"\[?(-?\d{1,2}\.\d{5}),\s?(-?\d{1,2}\.\d{5})\]?";

static COORDS_RE: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn coords_re() -> &'static Regex {
    COORDS_RE.get_or_init(|| Regex::new(COORDS_PATTERN).expect("coordinate pattern is valid"))
}

/// A latitude/longitude pair attached to a post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a pair from already-validated values.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate manually entered coordinates.
    ///
    /// The pattern is unanchored: a valid pair embedded in surrounding text
    /// is accepted, matching the original input contract. Returns `None` for
    /// anything that does not contain a valid pair.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = coords_re().captures(input)?;
        let latitude = caps.get(1)?.as_str().parse().ok()?;
        let longitude = caps.get(2)?.as_str().parse().ok()?;
        Some(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    /// The on-post rendering: `[lat, lon]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}
