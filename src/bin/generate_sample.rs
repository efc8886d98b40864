use std::path::Path;

use anyhow::{bail, Context, Result};

use monument_map::data::model::{Period, UNKNOWN_SENTINEL};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const SITE_TYPES: [&str; 8] = [
    "Hillfort",
    "Round barrow",
    "Castle",
    "Chambered tomb",
    "Roman fort",
    "Chapel",
    "Industrial monument",
    "Standing stone",
];

const COUNTY_PREFIXES: [&str; 6] = ["AN", "BR", "CM", "DE", "GM", "MM"];

/// Land-ish boxes inside Wales: (lon_min, lon_max, lat_min, lat_max).
const REGIONS: [(f64, f64, f64, f64); 4] = [
    (-4.4, -3.0, 51.5, 51.9),  // south
    (-5.2, -4.3, 51.7, 52.1),  // Pembrokeshire
    (-4.2, -3.2, 52.0, 52.8),  // mid
    (-4.6, -3.1, 52.8, 53.35), // north
];

/// Kept apart from the real dataset the map reads by default.
const DEFAULT_OUTPUT: &str = "sample_monuments.csv";

/// Target path: the first argument or [`DEFAULT_OUTPUT`]. Never an existing
/// file, so real data cannot be replaced by accident.
fn resolve_output(arg: Option<String>) -> Result<String> {
    let path = arg.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    if Path::new(&path).exists() {
        bail!("{path} already exists; remove it or pass another path");
    }
    Ok(path)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_rows = 600;

    let output_path = resolve_output(std::env::args().nth(1))?;
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["SAMNumber", "Name", "SiteType", "Period", "lon", "lat"])?;

    let mut unknown = 0;
    for i in 0..n_rows {
        let prefix = rng.pick(&COUNTY_PREFIXES);
        let site_type = rng.pick(&SITE_TYPES);
        // Roughly one in eight records has no recorded period.
        let period = if rng.next_f64() < 0.125 {
            unknown += 1;
            UNKNOWN_SENTINEL
        } else {
            rng.pick(&Period::ALL).label()
        };
        let (lon_min, lon_max, lat_min, lat_max) = *rng.pick(&REGIONS);

        writer.write_record([
            format!("{prefix}{:03}", i + 1),
            format!("{site_type} {}", i + 1),
            site_type.to_string(),
            period.to_string(),
            format!("{:.5}", rng.range(lon_min, lon_max)),
            format!("{:.5}", rng.range(lat_min, lat_max)),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} monuments ({unknown} with unknown period) to {output_path}");
    Ok(())
}
