use std::time::{Duration, Instant};

use clap::Args;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::Command;
use crate::utils;

/// Subcommand for measuring codec throughput.
///
/// Every round encodes and decodes a fresh buffer of random bytes and
/// verifies that the data survives the round trip.
#[derive(Debug, Args)]
pub struct Perf {
    /// How many rounds to measure.
    #[clap(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// The size of the random input in bytes for each round.
    #[clap(long, default_value_t = 1 << 18)]
    size: usize,

    /// Seed for the random input, making runs reproducible.
    ///
    /// A random seed is chosen and reported when omitted.
    #[clap(long)]
    seed: Option<u64>,

    /// Prints the report as JSON instead of text.
    #[clap(long)]
    json: bool,
}

/// Summary of the time spent in one direction.
#[derive(Debug, Serialize)]
struct Timing {
    average_secs: f64,
    deviation_secs: f64,
}

impl Timing {
    fn from_samples(samples: &[Duration]) -> Self {
        let n = samples.len() as f64;
        let secs = || samples.iter().map(Duration::as_secs_f64);

        let average = secs().sum::<f64>() / n;
        let variance = secs().map(|s| (average - s).powi(2)).sum::<f64>() / n;

        Self {
            average_secs: average,
            deviation_secs: variance.sqrt(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    rounds: u32,
    size: usize,
    seed: u64,
    encoding: Timing,
    decoding: Timing,
    total_secs: f64,
}

impl Command for Perf {
    fn handle(self) -> eyre::Result<()> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        log::info!(
            "Measuring {} rounds of {} bytes with seed {seed}",
            self.rounds,
            self.size
        );

        let start = Instant::now();
        let mut encoding = Vec::with_capacity(self.rounds as usize);
        let mut decoding = Vec::with_capacity(self.rounds as usize);

        let mut data = vec![0; self.size];
        for round in 0..self.rounds {
            rng.fill_bytes(&mut data);

            let t0 = Instant::now();
            let text = base91x_codec::encode(&data);
            let t1 = Instant::now();
            let decoded = base91x_codec::decode(&text);
            let t2 = Instant::now();

            if decoded != data {
                return Err(eyre::eyre!(
                    "round {round} did not survive the round trip (seed {seed})"
                ));
            }

            encoding.push(t1 - t0);
            decoding.push(t2 - t1);
            log::debug!("Round {round}: encode {:?}, decode {:?}", t1 - t0, t2 - t1);
        }

        let report = Report {
            rounds: self.rounds,
            size: self.size,
            seed,
            encoding: Timing::from_samples(&encoding),
            decoding: Timing::from_samples(&decoding),
            total_secs: start.elapsed().as_secs_f64(),
        };

        if self.json {
            utils::print_json(&report)
        } else {
            print_report(&report);
            Ok(())
        }
    }
}

fn print_report(report: &Report) {
    println!(
        "ENCODING Average = {} Deviation = {}",
        report.encoding.average_secs, report.encoding.deviation_secs
    );
    println!(
        "DECODING Average = {} Deviation = {}",
        report.decoding.average_secs, report.decoding.deviation_secs
    );
    println!(
        "Total time: {} SIZE={} SEED={}",
        report.total_secs, report.size, report.seed
    );
}
