use crate::config::SkyConfig;
use crate::data::{Loaded, StarCatalog, load_nebulae};
use crate::types::SkyObject;

/// Everything the renderer draws, loaded once at startup and read-only after.
#[derive(Debug)]
pub struct Sky {
    stars: StarCatalog,
    nebulae: Vec<SkyObject>,
    pick_radius_deg: Option<f64>,
}

impl Sky {
    pub fn load(cfg: &SkyConfig) -> Loaded<Self> {
        StarCatalog::load(&cfg.stars, &cfg.names).map(|stars| Self::new(stars, cfg))
    }

    pub fn new(stars: StarCatalog, cfg: &SkyConfig) -> Self {
        let mut nebulae = Vec::new();
        load_nebulae(&mut nebulae);
        Self {
            stars,
            nebulae,
            pick_radius_deg: cfg.pick_radius_deg,
        }
    }

    pub fn stars(&self) -> &StarCatalog {
        &self.stars
    }

    pub fn nebulae(&self) -> &[SkyObject] {
        &self.nebulae
    }

    /// Nebulae first, then stars in RA order.
    pub fn objects(&self) -> impl Iterator<Item = &SkyObject> + '_ {
        self.nebulae.iter().chain(self.stars.stars())
    }

    pub fn pick_star(&self, ra: f64, dec: f64) -> Option<&SkyObject> {
        match self.pick_radius_deg {
            Some(radius) => self.stars.pick_star_within(ra, dec, radius),
            None => self.stars.pick_star(ra, dec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Source;
    use crate::test_utils::{SAMPLE_NAMES, SAMPLE_STARS, catalog_from_str};
    use crate::types::ObjectType;
    use std::path::PathBuf;

    fn sample_sky(radius: Option<f64>) -> Sky {
        let cfg = SkyConfig {
            pick_radius_deg: radius,
            ..SkyConfig::default()
        };
        Sky::new(catalog_from_str(SAMPLE_STARS, SAMPLE_NAMES), &cfg)
    }

    #[test]
    fn objects_lists_nebulae_then_stars() {
        let sky = sample_sky(None);
        let kinds: Vec<ObjectType> = sky.objects().map(|o| o.object_type()).collect();
        assert_eq!(kinds.len(), 9 + 5);
        assert!(kinds[..9].iter().all(|k| *k == ObjectType::Nebula));
        assert!(kinds[9..].iter().all(|k| *k == ObjectType::Star));
        assert_eq!(sky.nebulae().len(), 9);
        assert_eq!(sky.stars().len(), 5);
    }

    #[test]
    fn pick_uses_configured_radius() {
        // Sirius sits at 101.28715, -16.71612
        let default = sample_sky(None);
        assert!(default.pick_star(102.0, -16.7).is_none());
        assert_eq!(default.pick_star(101.5, -16.5).unwrap().name, "Sirius");

        let wide = sample_sky(Some(1.0));
        assert_eq!(wide.pick_star(102.0, -16.7).unwrap().name, "Sirius");
    }

    #[test]
    fn missing_catalog_still_has_nebulae() {
        let missing = Source::Path(PathBuf::from("/no/such/stars.txt"));
        let cfg = SkyConfig {
            stars: missing.clone(),
            names: missing,
            ..SkyConfig::default()
        };
        let loaded = Sky::load(&cfg);
        assert_eq!(loaded.issues.len(), 2);
        assert!(loaded.value.stars().is_empty());
        assert_eq!(loaded.value.nebulae().len(), 9);
        assert!(loaded.value.pick_star(83.8, -5.4).is_none());
    }

    #[test]
    fn bundled_sky_loads() {
        let loaded = Sky::load(&SkyConfig::default());
        assert!(loaded.is_complete());
        let sky = loaded.value;
        assert_eq!(sky.objects().count(), 9 + sky.stars().len());
        assert_eq!(sky.pick_star(279.2, 38.8).unwrap().name, "Vega");
    }
}
