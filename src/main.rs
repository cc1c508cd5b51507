mod config;
mod data;
mod error;
mod logging;
mod sky;
mod types;

use crate::config::SkyConfig;
use crate::data::Source;
use crate::sky::Sky;
use crate::types::{SkyObject, parse_dms, parse_hms};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "planetarium")]
#[command(about = "Star and nebula catalogs with star picking", version)]
struct Args {
    /// RA to pick at, either as hour:minute:second (e.g. "5:55:10.3") or decimal degrees ("88.793")
    #[arg(long, allow_hyphen_values = true)]
    ra: Option<String>,

    /// Dec to pick at, as degree:minute:second (e.g. "+7:24:25") or decimal degrees ("7.407")
    #[arg(long, allow_hyphen_values = true)]
    dec: Option<String>,

    /// Pick tolerance in degrees of RA and Dec (defaults to 0.5)
    #[arg(long)]
    radius: Option<f64>,

    /// Dimmest magnitude counted as visible in the summary
    #[arg(long, default_value_t = data::stars::MAX_STAR_MAGNITUDE)]
    limit_star_mag: f32,

    /// Show the star with this HIP number
    #[arg(long)]
    hip: Option<u32>,

    /// Print every nebula
    #[arg(long)]
    list_nebulae: bool,

    /// Optional path override for the star catalog (plain or .gz)
    #[arg(long)]
    stars_path: Option<String>,

    /// Optional path override for the star name table
    #[arg(long)]
    names_path: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn to_config(&self) -> SkyConfig {
        SkyConfig {
            stars: Source::from_option(self.stars_path.as_deref()),
            names: Source::from_option(self.names_path.as_deref()),
            pick_radius_deg: self.radius,
            limit_star_mag: self.limit_star_mag,
            log_filter: self.log_level.clone(),
        }
    }
}

fn parse_ra_deg(s: &str) -> Result<f64> {
    if s.contains(':') {
        let deg = parse_hms(s).ok_or_else(|| anyhow!("bad RA HMS: {s}"))?;
        Ok(deg.rem_euclid(360.0))
    } else {
        let deg: f64 = s.parse().context("RA must be HMS or degrees")?;
        Ok(deg.rem_euclid(360.0))
    }
}

fn parse_dec_deg(s: &str) -> Result<f64> {
    let deg = if s.contains(':') {
        parse_dms(s).ok_or_else(|| anyhow!("bad Dec DMS: {s}"))?
    } else {
        s.parse().context("Dec must be DMS or degrees")?
    };
    if !(-90.0..=90.0).contains(&deg) {
        bail!("Dec must be within -90..90 degrees, got {deg}");
    }
    Ok(deg)
}

fn parse_target(ra: Option<&str>, dec: Option<&str>) -> Result<Option<(f64, f64)>> {
    match (ra, dec) {
        (Some(ra), Some(dec)) => Ok(Some((parse_ra_deg(ra)?, parse_dec_deg(dec)?))),
        (None, None) => Ok(None),
        _ => bail!("--ra and --dec must be given together"),
    }
}

fn print_nebula(n: &SkyObject) {
    println!(
        "  {:<18} RA {:>8.4}°  Dec {:>+8.4}°  texture {:<10} scale {}",
        n.name,
        n.coords.ra_deg,
        n.coords.dec_deg,
        n.texture().unwrap_or("-"),
        n.initial_scale().unwrap_or(1.0),
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let target = parse_target(args.ra.as_deref(), args.dec.as_deref())?;
    let cfg = args.to_config();
    logging::init_logging(&cfg.log_filter);

    let loaded = Sky::load(&cfg);
    if !loaded.is_complete() {
        let line_issues = loaded.issues.iter().filter(|e| e.is_line_issue()).count();
        eprintln!(
            "catalog loaded with {} issue(s) ({} skipped line(s)):",
            loaded.issues.len(),
            line_issues
        );
        for issue in &loaded.issues {
            eprintln!("  [{}] {issue}", issue.resource());
        }
    }
    let sky = loaded.value;

    let stars = sky.stars();
    if stars.is_empty() {
        eprintln!("no stars loaded; the sky only holds nebulae");
    }
    println!(
        "{} objects: {} stars ({} at magnitude {} or brighter), {} nebulae",
        sky.objects().count(),
        stars.len(),
        stars.brighter_than(cfg.limit_star_mag).count(),
        cfg.limit_star_mag,
        sky.nebulae().len()
    );

    if args.list_nebulae {
        for n in sky.nebulae() {
            print_nebula(n);
        }
    }

    if let Some(hip) = args.hip {
        match stars.find_by_hip(hip) {
            Some(star) => println!("{star}"),
            None => println!("HIP {hip} is not in the catalog"),
        }
    }

    if let Some((ra, dec)) = target {
        match sky.pick_star(ra, dec) {
            Some(star) => println!(
                "picked {star} [{}]",
                star.class_name().unwrap_or_default()
            ),
            None => println!(
                "no star within {}° of RA {ra:.4}°, Dec {dec:+.4}°",
                cfg.pick_radius_deg
                    .unwrap_or(data::stars::STAR_PICK_RADIUS)
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod test_utils;
