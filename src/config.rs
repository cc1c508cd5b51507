use crate::data::Source;
use crate::data::stars::MAX_STAR_MAGNITUDE;

#[derive(Debug, Clone)]
pub struct SkyConfig {
    pub stars: Source,
    pub names: Source,
    /// Pick tolerance in degrees; `None` uses the catalog default.
    pub pick_radius_deg: Option<f64>,
    pub limit_star_mag: f32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            stars: Source::Bundled,
            names: Source::Bundled,
            pick_radius_deg: None,
            limit_star_mag: MAX_STAR_MAGNITUDE,
            log_filter: "info".to_string(),
        }
    }
}
