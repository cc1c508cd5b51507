use std::collections::HashMap;
use std::io::{BufRead, Read};

use csv::StringRecord;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::data::names::parse_names;
use crate::data::{Loaded, Source};
use crate::error::CatalogError;
use crate::types::{EQPoint, ObjectKind, SkyObject};

pub const STARS_RESOURCE: &str = "stars.txt";
pub const NAMES_RESOURCE: &str = "starnames.txt";

/// Half-width, in degrees of RA and of Dec, of the box searched by
/// [`StarCatalog::pick_star`].
pub const STAR_PICK_RADIUS: f64 = 0.5;

/// Faintest magnitude the renderer shows by default.
pub const MAX_STAR_MAGNITUDE: f32 = 7.0;

/// Distance the renderer places a star at when it has none of its own. The
/// loader keeps catalog distances as they are.
#[allow(dead_code)]
pub const DEFAULT_DISTANCE_STAR: f64 = 500.0;

const STAR_COLUMNS: [&str; 6] = ["hip", "ra", "dec", "dist", "mag", "class"];

#[derive(Debug, Deserialize)]
struct StarRow {
    hip: u32,
    ra: f64,
    dec: f64,
    dist: f64,
    mag: f32,
    class_name: String,
}

/// Stars sorted by ascending right ascension.
#[derive(Debug, Default)]
pub struct StarCatalog {
    stars: Vec<SkyObject>,
}

// Parse the leading columns of a catalog line; on failure, return the name of
// the offending column.
fn parse_star_fields(fields: &[&str]) -> Result<StarRow, &'static str> {
    let record = StringRecord::from(fields[..STAR_COLUMNS.len()].to_vec());
    let row: StarRow = record.deserialize(None).map_err(|err| match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|i| STAR_COLUMNS.get(i as usize))
            .copied()
            .unwrap_or("row"),
        _ => "row",
    })?;

    if !row.ra.is_finite() {
        return Err("ra");
    }
    if !row.dec.is_finite() {
        return Err("dec");
    }
    if !row.dist.is_finite() {
        return Err("dist");
    }
    Ok(row)
}

fn read_stars<R: BufRead>(
    mut reader: R,
    resource: &str,
    issues: &mut Vec<CatalogError>,
) -> Vec<SkyObject> {
    let mut out = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0u64;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(source) => {
                error!(resource, error = %source, "failed to read star database");
                issues.push(CatalogError::Read {
                    resource: resource.to_string(),
                    source,
                });
                break;
            }
        }
        // line 1 is the header
        if line_no == 1 {
            continue;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(l) => l,
            Err(_) => {
                warn!(resource, line = line_no, "skipping star line with invalid UTF-8");
                issues.push(CatalogError::Malformed {
                    resource: resource.to_string(),
                    line: line_no,
                    reason: "invalid UTF-8".to_string(),
                });
                continue;
            }
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < STAR_COLUMNS.len() {
            continue;
        }

        match parse_star_fields(&fields) {
            Ok(row) => out.push(SkyObject {
                name: format!("HIP {}", row.hip),
                kind: ObjectKind::Star {
                    hip: row.hip,
                    magnitude: row.mag,
                    class_name: row.class_name,
                },
                coords: EQPoint {
                    ra_deg: row.ra,
                    dec_deg: row.dec,
                },
                dist: row.dist,
            }),
            Err(field) => {
                let value = STAR_COLUMNS
                    .iter()
                    .position(|c| *c == field)
                    .map_or(line.trim_end(), |i| fields[i])
                    .to_string();
                warn!(resource, line = line_no, field, %value, "skipping star line");
                issues.push(CatalogError::InvalidField {
                    resource: resource.to_string(),
                    line: line_no,
                    field,
                    value,
                });
            }
        }
    }
    out
}

impl StarCatalog {
    /// Load the catalog and name overrides, best effort. Unreadable resources
    /// and bad lines end up in [`Loaded::issues`]; the catalog holds whatever
    /// was read.
    pub fn load(stars: &Source, names: &Source) -> Loaded<Self> {
        Self::build(
            stars.open_stars(),
            &stars.describe(STARS_RESOURCE),
            names.open_names(),
            &names.describe(NAMES_RESOURCE),
        )
    }

    pub fn from_readers<S: BufRead, N: Read>(stars: S, names: N) -> Loaded<Self> {
        Self::build(Ok(stars), STARS_RESOURCE, Ok(names), NAMES_RESOURCE)
    }

    fn build<S: BufRead, N: Read>(
        stars: Result<S, CatalogError>,
        stars_resource: &str,
        names: Result<N, CatalogError>,
        names_resource: &str,
    ) -> Loaded<Self> {
        let mut issues = Vec::new();

        debug!(resource = stars_resource, "loading stars");
        let mut list = match stars {
            Ok(reader) => read_stars(reader, stars_resource, &mut issues),
            Err(e) => {
                error!(error = %e, "failed to read star database");
                issues.push(e);
                Vec::new()
            }
        };

        debug!(resource = names_resource, "loading star names");
        let overrides = match names {
            Ok(reader) => parse_names(reader, names_resource, &mut issues),
            Err(e) => {
                error!(error = %e, "failed to read star names");
                issues.push(e);
                HashMap::new()
            }
        };
        let named = apply_names(&mut list, &overrides);

        list.sort_unstable_by(|a, b| a.coords.ra_deg.total_cmp(&b.coords.ra_deg));

        info!(
            stars = list.len(),
            named,
            issues = issues.len(),
            "star catalog loaded"
        );
        Loaded::new(Self { stars: list }, issues)
    }

    pub fn stars(&self) -> &[SkyObject] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkyObject> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn find_by_hip(&self, hip: u32) -> Option<&SkyObject> {
        self.stars.iter().find(|s| s.hip() == Some(hip))
    }

    /// Stars at or brighter than `limit_mag`, in RA order.
    pub fn brighter_than(&self, limit_mag: f32) -> impl Iterator<Item = &SkyObject> + '_ {
        self.stars
            .iter()
            .filter(move |s| s.magnitude().is_some_and(|m| m <= limit_mag))
    }

    /// Find a star within [`STAR_PICK_RADIUS`] of `(ra, dec)`, both in degrees.
    pub fn pick_star(&self, ra: f64, dec: f64) -> Option<&SkyObject> {
        self.pick_star_within(ra, dec, STAR_PICK_RADIUS)
    }

    /// Find a star whose RA and Dec each lie within `radius` degrees of the
    /// query.
    ///
    /// Seeks to the index the query RA would have if stars were spread evenly
    /// over 0..360, then walks outward in both directions until the RA gap
    /// exceeds `radius`. The first star inside the box is returned, so with
    /// several candidates the result is not necessarily the closest.
    ///
    /// RA does not wrap: a star at 359.9° is never found from a query at 0.1°.
    pub fn pick_star_within(&self, ra: f64, dec: f64, radius: f64) -> Option<&SkyObject> {
        let count = self.stars.len();
        if count == 0 {
            return None;
        }
        // `as usize` saturates, so negative and NaN seeds land on 0
        let j = (((ra / 360.0) * count as f64).floor() as usize).min(count - 1);

        let backward = self.stars[..=j]
            .iter()
            .rev()
            .take_while(|s| ra - s.coords.ra_deg <= radius);
        let forward = self.stars[j..]
            .iter()
            .take_while(|s| s.coords.ra_deg - ra <= radius);

        // the scans stop on one side only, so both axes are checked here
        backward.chain(forward).find(|s| {
            (s.coords.ra_deg - ra).abs() <= radius && (s.coords.dec_deg - dec).abs() <= radius
        })
    }
}

impl<'a> IntoIterator for &'a StarCatalog {
    type Item = &'a SkyObject;
    type IntoIter = std::slice::Iter<'a, SkyObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Give every star with an override its display name; returns how many were renamed.
fn apply_names(stars: &mut [SkyObject], overrides: &HashMap<u32, String>) -> usize {
    let mut named = 0;
    for star in stars.iter_mut() {
        if let Some(name) = star.hip().and_then(|hip| overrides.get(&hip)) {
            star.name = name.clone();
            named += 1;
        }
    }
    named
}
