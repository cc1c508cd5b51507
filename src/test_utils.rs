use crate::data::stars::StarCatalog;

pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub const SAMPLE_STARS: &str = "\
hip ra dec dist mag spect
32349 101.28715 -16.71612 2.6 -1.44 A0m...
27989 88.79294 7.40706 152.7 0.45 M2Ib
24436 78.63447 -8.20164 264.6 0.18 B8Ia:
91262 279.23474 38.78369 7.7 0.03 A0Vvar
11767 37.95456 89.26411 132.6 1.97 F7:Ib-IIv SB
";

pub const SAMPLE_NAMES: &str = "\
hip:name
32349:Sirius
27989:alf Ori
91262:Vega
";

// Build a catalog from in-memory text, failing the test on any load issue
pub fn catalog_from_str(stars: &str, names: &str) -> StarCatalog {
    let loaded = StarCatalog::from_readers(stars.as_bytes(), names.as_bytes());
    assert!(
        loaded.is_complete(),
        "unexpected load issues: {:?}",
        loaded.issues
    );
    loaded.value
}
