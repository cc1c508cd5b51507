use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, Trim};
use phf::phf_map;
use tracing::{error, warn};

use crate::error::CatalogError;

// Bayer designations as abbreviated in star name tables
static GREEK_LETTERS: phf::Map<&'static str, &'static str> = phf_map! {
    "alf" => "α",
    "bet" => "β",
    "gam" => "γ",
    "del" => "δ",
    "eps" => "ε",
    "zet" => "ζ",
    "eta" => "η",
    "tet" => "θ",
    "iot" => "ι",
    "kap" => "κ",
    "lam" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "ksi" => "ξ",
    "omi" => "ο",
    "pi" => "π",
    "rho" => "ρ",
    "sig" => "σ",
    "tau" => "τ",
    "ups" => "υ",
    "phi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "ome" => "ω",
};

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Expand a leading "alf01"-style token into "α¹". Returns None for anything
/// that is not a Bayer abbreviation.
fn bayer_letter(token: &str) -> Option<String> {
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    let (abbr, digits) = token.split_at(split);
    let letter = GREEK_LETTERS.get(abbr)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut out = letter.to_string();
    for c in digits.trim_start_matches('0').chars() {
        // all ascii digits, checked above
        out.push(SUPERSCRIPT_DIGITS[c as usize - '0' as usize]);
    }
    Some(out)
}

/// Turn a raw star-name table entry into its display form.
///
/// Underscores become spaces, whitespace is collapsed, and a leading Bayer
/// abbreviation followed by a constellation ("alf Ori") becomes its Greek
/// letter ("α Ori"). Proper names pass through.
pub fn transform_name(raw: &str) -> String {
    let cleaned = raw.replace('_', " ");
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    match words.split_first() {
        Some((first, rest)) if !rest.is_empty() => match bayer_letter(first) {
            Some(letter) => {
                let mut out = letter;
                for w in rest {
                    out.push(' ');
                    out.push_str(w);
                }
                out
            }
            None => words.join(" "),
        },
        _ => words.join(" "),
    }
}

/// Read a `hip:name` table (first line is a header) into display names keyed
/// by HIP number. Later entries for the same number win.
pub fn parse_names<R: Read>(
    reader: R,
    resource: &str,
    issues: &mut Vec<CatalogError>,
) -> HashMap<u32, String> {
    let mut out = HashMap::new();

    // The header is the first physical line, even a blank one
    let mut reader = BufReader::new(reader);
    if let Err(source) = reader.read_until(b'\n', &mut Vec::new()) {
        error!(resource, error = %source, "failed to read star names");
        issues.push(CatalogError::Read {
            resource: resource.to_string(),
            source,
        });
        return out;
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b':')
        .quoting(false)
        .flexible(true) // names may be missing or contain further colons
        .trim(Trim::All)
        .from_reader(reader);

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(err) => {
                let reason = err.to_string();
                let line = err.position().map_or(0, |p| p.line() + 1);
                match err.into_kind() {
                    csv::ErrorKind::Io(source) => {
                        error!(resource, error = %source, "failed to read star names");
                        issues.push(CatalogError::Read {
                            resource: resource.to_string(),
                            source,
                        });
                        break;
                    }
                    _ => {
                        warn!(resource, line, %reason, "skipping star name line");
                        issues.push(CatalogError::Malformed {
                            resource: resource.to_string(),
                            line,
                            reason,
                        });
                        continue;
                    }
                }
            }
        };

        let line = rec.position().map_or(0, |p| p.line() + 1);
        let hip = rec.get(0).unwrap_or("");
        let name = match rec.get(1).filter(|n| !n.is_empty()) {
            Some(n) => n,
            None => {
                warn!(resource, line, "star name line without a name");
                issues.push(CatalogError::Malformed {
                    resource: resource.to_string(),
                    line,
                    reason: "expected <hip>:<name>".to_string(),
                });
                continue;
            }
        };
        let Ok(hip) = hip.parse::<u32>() else {
            warn!(resource, line, hip, "star name line with invalid HIP number");
            issues.push(CatalogError::InvalidField {
                resource: resource.to_string(),
                line,
                field: "hip",
                value: hip.to_string(),
            });
            continue;
        };

        out.insert(hip, transform_name(name));
    }
    out
}
