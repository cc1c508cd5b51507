use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EQPoint {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

/// Flat discriminant of a [`SkyObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Star,
    Nebula,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Star {
        hip: u32,
        magnitude: f32,
        class_name: String,
    },
    Nebula {
        texture: &'static str,
        initial_scale: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkyObject {
    pub kind: ObjectKind,
    pub name: String,
    pub coords: EQPoint,
    pub dist: f64,
}

impl SkyObject {
    pub fn object_type(&self) -> ObjectType {
        match self.kind {
            ObjectKind::Star { .. } => ObjectType::Star,
            ObjectKind::Nebula { .. } => ObjectType::Nebula,
        }
    }

    pub fn hip(&self) -> Option<u32> {
        match self.kind {
            ObjectKind::Star { hip, .. } => Some(hip),
            _ => None,
        }
    }

    pub fn magnitude(&self) -> Option<f32> {
        match self.kind {
            ObjectKind::Star { magnitude, .. } => Some(magnitude),
            _ => None,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        match &self.kind {
            ObjectKind::Star { class_name, .. } => Some(class_name),
            _ => None,
        }
    }

    pub fn texture(&self) -> Option<&'static str> {
        match self.kind {
            ObjectKind::Nebula { texture, .. } => Some(texture),
            _ => None,
        }
    }

    pub fn initial_scale(&self) -> Option<f32> {
        match self.kind {
            ObjectKind::Nebula { initial_scale, .. } => Some(initial_scale),
            _ => None,
        }
    }
}

impl fmt::Display for SkyObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (RA {:.4}°, Dec {:+.4}°, dist {})",
            self.name, self.coords.ra_deg, self.coords.dec_deg, self.dist
        )?;
        match &self.kind {
            ObjectKind::Star {
                hip,
                magnitude,
                class_name,
            } => write!(f, " HIP {hip}, mag {magnitude:.2}, {class_name}"),
            ObjectKind::Nebula { texture, .. } => write!(f, " texture {texture}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Declination in sexagesimal form with an explicit sign, so that values
/// between 0° and -1° (e.g. -0° 30') keep their sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub sign: Sign,
    pub d: f64,
    pub m: f64,
    pub s: f64,
}

impl Dms {
    pub const fn new(sign: Sign, d: f64, m: f64, s: f64) -> Self {
        Self { sign, d, m, s }
    }

    pub fn to_degrees(self) -> f64 {
        let magnitude = self.d.abs() + (self.m * 60.0 + self.s) / 3600.0;
        match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }
}

/// Right ascension given as hours, minutes, seconds, in decimal degrees.
pub fn hms_to_degrees(h: f64, m: f64, s: f64) -> f64 {
    (h + (m * 60.0 + s) / 3600.0) * 15.0
}

/// Declination given as degrees, minutes, seconds, in decimal degrees.
///
/// The sign is taken from the sign bit of `d`, so `-0.0` is negative. Callers
/// holding an unsigned zero should use [`Dms`] instead.
pub fn dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    let sign = if d.is_sign_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    Dms::new(sign, d, m, s).to_degrees()
}

fn split_sexagesimal(s: &str) -> Option<(&str, f64, f64)> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let m = parts[1].trim().parse().ok()?;
    let sec = parts[2].trim().parse().ok()?;
    Some((parts[0].trim(), m, sec))
}

/// Parse `"h:m:s"` into decimal degrees of right ascension.
pub fn parse_hms(s: &str) -> Option<f64> {
    let (h, m, sec) = split_sexagesimal(s)?;
    let h: f64 = h.parse().ok()?;
    Some(hms_to_degrees(h, m, sec))
}

/// Parse `"±d:m:s"` into decimal degrees of declination.
pub fn parse_dms(s: &str) -> Option<f64> {
    let (d, m, sec) = split_sexagesimal(s)?;
    // "-00" parses to -0.0, which keeps the sign
    let d: f64 = d.parse().ok()?;
    Some(dms_to_degrees(d, m, sec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    fn star(hip: u32) -> SkyObject {
        SkyObject {
            kind: ObjectKind::Star {
                hip,
                magnitude: 1.5,
                class_name: "B8V".to_string(),
            },
            name: format!("HIP {hip}"),
            coords: EQPoint {
                ra_deg: 10.0,
                dec_deg: -5.0,
            },
            dist: 42.0,
        }
    }

    #[test]
    fn hms_converts_reference_values() {
        assert!(approx(hms_to_degrees(5.0, 34.0, 31.94), 83.63308, 1e-4));
        assert!(approx(hms_to_degrees(0.0, 0.0, 0.0), 0.0, 1e-12));
        assert!(approx(hms_to_degrees(1.0, 0.0, 0.0), 15.0, 1e-12));
        // 23h 59m 59.9s stays below 360
        let v = hms_to_degrees(23.0, 59.0, 59.9);
        assert!(v < 360.0 && v > 359.99);
    }

    #[test]
    fn dms_preserves_sign() {
        assert!(approx(dms_to_degrees(22.0, 0.0, 52.2), 22.0145, 1e-4));
        assert!(approx(dms_to_degrees(-59.0, 41.0, 4.26), -59.68452, 1e-4));
        assert!(approx(dms_to_degrees(-10.0, 30.0, 0.0), -10.5, 1e-12));
    }

    #[test]
    fn dms_negative_zero_degrees_stays_negative() {
        assert!(approx(dms_to_degrees(-0.0, 30.0, 0.0), -0.5, 1e-12));
        assert!(approx(dms_to_degrees(0.0, 30.0, 0.0), 0.5, 1e-12));
        let explicit = Dms::new(Sign::Minus, 0.0, 17.0, 57.8);
        assert!(approx(explicit.to_degrees(), -0.29939, 1e-4));
    }

    #[test]
    fn parse_hms_and_dms_strings() {
        assert!(approx(parse_hms("5:35:17.3").unwrap(), 83.82208, 1e-4));
        assert!(approx(parse_dms("-5:23:28").unwrap(), -5.39111, 1e-4));
        assert!(approx(parse_dms("+10:00:00").unwrap(), 10.0, 1e-12));
        assert!(approx(parse_dms("-00:30:00").unwrap(), -0.5, 1e-12));
    }

    #[test]
    fn parse_rejects_wrong_arity_and_garbage() {
        assert!(parse_hms("12:34").is_none());
        assert!(parse_hms("12:34:56:78").is_none());
        assert!(parse_hms("aa:bb:cc").is_none());
        assert!(parse_dms("").is_none());
        assert!(parse_dms("10:xx:00").is_none());
    }

    #[test]
    fn kind_accessors_match_variant() {
        let s = star(32349);
        assert_eq!(s.object_type(), ObjectType::Star);
        assert_eq!(s.hip(), Some(32349));
        assert_eq!(s.magnitude(), Some(1.5));
        assert_eq!(s.class_name(), Some("B8V"));
        assert_eq!(s.texture(), None);
        assert_eq!(s.initial_scale(), None);

        let n = SkyObject {
            kind: ObjectKind::Nebula {
                texture: "m42",
                initial_scale: 5.0,
            },
            name: "Orion Nebula".to_string(),
            coords: EQPoint {
                ra_deg: 83.8,
                dec_deg: -5.4,
            },
            dist: 550.0,
        };
        assert_eq!(n.object_type(), ObjectType::Nebula);
        assert_eq!(n.hip(), None);
        assert_eq!(n.texture(), Some("m42"));
        assert_eq!(n.initial_scale(), Some(5.0));
    }

    #[test]
    fn display_includes_star_details() {
        let text = star(7).to_string();
        assert!(text.starts_with("HIP 7 (RA 10.0000°, Dec -5.0000°"));
        assert!(text.contains("mag 1.50"));
        assert!(text.contains("B8V"));
    }
}
