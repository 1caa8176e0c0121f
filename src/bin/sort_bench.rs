//! Thin CLI driver: takes vector sizes on the command line and reports, per
//! size and input pattern, the mean elapsed time of both sorts plus a verdict.

use std::env;
use std::process::ExitCode;

use sort_bench_rs::bench::{self, BenchConfig, MonotonicClock};
use sort_bench_rs::config::{parse_len, ConfigError};
use sort_bench_rs::patterns::Pattern;
use sort_bench_rs::{bubble, merge};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        let err = ConfigError::NoSizes;
        eprintln!("{err}");
        eprintln!("usage: sort_bench <size>...");
        return ExitCode::from(err.exit_code());
    }

    let mut clock = MonotonicClock::new();

    for arg in &args {
        let len = match parse_len(arg) {
            Ok(len) => len,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(err.exit_code());
            }
        };

        for pattern in Pattern::ALL {
            let cfg = BenchConfig::new(len);
            let comparison =
                bench::run_pair::<bubble::SortImpl, merge::SortImpl>(&cfg, pattern, &mut clock);

            println!("len {len} pattern {}", pattern.name());
            println!(
                "  {:<12} {:>14.1} ns",
                comparison.first.name, comparison.first.mean_ns
            );
            println!(
                "  {:<12} {:>14.1} ns",
                comparison.second.name, comparison.second.mean_ns
            );
            println!("  fastest: {}", comparison.verdict());
        }
    }

    ExitCode::SUCCESS
}
