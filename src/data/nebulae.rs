use crate::types::{Dms, EQPoint, ObjectKind, Sign, SkyObject, hms_to_degrees};

pub const DEFAULT_DISTANCE_NEBULA: f64 = 550.0;

struct NebulaEntry {
    texture: &'static str,
    // right ascension as (h, m, s)
    ra: (f64, f64, f64),
    dec: Dms,
    initial_scale: f32,
    name: &'static str,
}

static NEBULAE: [NebulaEntry; 9] = [
    NebulaEntry {
        texture: "m1",
        ra: (5.0, 34.0, 31.94),
        dec: Dms::new(Sign::Plus, 22.0, 0.0, 52.2),
        initial_scale: 5.0,
        name: "Crab Nebula",
    },
    NebulaEntry {
        texture: "m13",
        ra: (16.0, 41.0, 41.24),
        dec: Dms::new(Sign::Plus, 36.0, 27.0, 35.5),
        initial_scale: 5.0,
        name: "Hercules Cluster",
    },
    NebulaEntry {
        texture: "m16",
        ra: (18.0, 18.0, 48.0),
        dec: Dms::new(Sign::Minus, 13.0, 49.0, 0.0),
        initial_scale: 5.0,
        name: "Eagle Nebula",
    },
    NebulaEntry {
        texture: "m31",
        ra: (0.0, 41.8, 0.0),
        dec: Dms::new(Sign::Plus, 41.0, 16.0, 0.0),
        initial_scale: 10.0,
        name: "Andromeda",
    },
    NebulaEntry {
        texture: "m42",
        ra: (5.0, 35.0, 17.3),
        dec: Dms::new(Sign::Minus, 5.0, 23.0, 28.0),
        initial_scale: 5.0,
        name: "Orion Nebula",
    },
    NebulaEntry {
        texture: "m51",
        ra: (13.0, 30.0, 0.0),
        dec: Dms::new(Sign::Plus, 47.0, 11.0, 0.0),
        initial_scale: 5.0,
        name: "Whirlpool Galaxy",
    },
    NebulaEntry {
        texture: "m57",
        ra: (18.0, 53.6, 0.0),
        dec: Dms::new(Sign::Plus, 33.0, 2.0, 0.0),
        initial_scale: 10.0,
        name: "Ring Nebula",
    },
    NebulaEntry {
        texture: "m101",
        ra: (14.0, 3.2, 0.0),
        dec: Dms::new(Sign::Plus, 54.0, 21.0, 0.0),
        initial_scale: 5.0,
        name: "Pinwheel Galaxy",
    },
    NebulaEntry {
        texture: "etacarinae",
        ra: (10.0, 45.0, 3.591),
        dec: Dms::new(Sign::Minus, 59.0, 41.0, 4.26),
        initial_scale: 5.0,
        name: "Eta Carinae",
    },
];

/// Append the compiled-in nebulae and galaxies to `objects`.
pub fn load_nebulae(objects: &mut Vec<SkyObject>) {
    objects.reserve(NEBULAE.len());
    objects.extend(NEBULAE.iter().map(|entry| {
        let (h, m, s) = entry.ra;
        SkyObject {
            kind: ObjectKind::Nebula {
                texture: entry.texture,
                initial_scale: entry.initial_scale,
            },
            name: entry.name.to_string(),
            coords: EQPoint {
                ra_deg: hms_to_degrees(h, m, s),
                dec_deg: entry.dec.to_degrees(),
            },
            dist: DEFAULT_DISTANCE_NEBULA,
        }
    }));
    tracing::debug!(count = NEBULAE.len(), "loaded nebulae");
}
