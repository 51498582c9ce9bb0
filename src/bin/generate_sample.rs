use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One output row; field order is the CSV column order.
#[derive(Serialize)]
struct Row {
    instant: u32,
    date: NaiveDate,
    hour: u8,
    season: u8,
    weathersit: u8,
    casual: u32,
    registered: u32,
    count: u32,
}

/// SplitMix64; enough for reproducible sample noise.
struct SampleRng(u64);

impl SampleRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        // top 53 bits → [0, 1)
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Relative demand by hour: commuter peaks at 8 and 17–18.
fn hour_profile(hour: u8) -> f64 {
    match hour {
        0..=5 => 0.08,
        6 => 0.35,
        7 => 0.8,
        8 => 1.0,
        9..=15 => 0.5,
        16 => 0.75,
        17 | 18 => 1.0,
        19 | 20 => 0.55,
        _ => 0.25,
    }
}

/// Season code by month.
fn season_for(month: u32) -> u8 {
    match month {
        6..=8 => 1,
        9..=11 => 2,
        12 | 1 | 2 => 3,
        _ => 4,
    }
}

/// Weather code, mostly clear.
fn weather(rng: &mut SampleRng) -> u8 {
    match rng.next_f64() {
        p if p < 0.65 => 1,
        p if p < 0.90 => 2,
        p if p < 0.99 => 3,
        _ => 4,
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).context("start date")?;
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).context("end date")?;

    let output_path = "data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut instant = 0u32;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let season = season_for(date.month());
        let season_factor = if season == 3 { 0.6 } else { 1.0 };
        let weekend = date.weekday().number_from_monday() >= 6;

        for hour in 0u8..24 {
            let weathersit = weather(&mut rng);
            let weather_factor = 1.0 - 0.25 * f64::from(weathersit - 1);
            let demand = hour_profile(hour) * season_factor * weather_factor;
            let noise = 0.8 + 0.4 * rng.next_f64();

            let (casual_base, registered_base) = if weekend {
                (120.0, 180.0)
            } else {
                (40.0, 420.0)
            };
            let casual = (casual_base * demand * noise).round() as u32;
            let registered = (registered_base * demand * noise).round() as u32;

            instant += 1;
            writer.serialize(Row {
                instant,
                date,
                hour,
                season,
                weathersit,
                casual,
                registered,
                count: casual + registered,
            })?;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {instant} hourly rows ({start} .. {end}) to {output_path}");
    Ok(())
}
