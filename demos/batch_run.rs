//! Batch run demo: several seeded colonies over a node list.
//!
//! Reads `x,y` lines from a node file, steps every colony for a fixed number
//! of iterations, prints the first colony's distance per step and writes the
//! distance log as CSV (one line per step, one column per colony).
//!
//! Run:
//! ```sh
//! cargo run --example batch_run -- --nodes demos/data/ring.csv --out ring.csv
//! ```

use std::fs::{self, File};
use std::io::BufWriter;

use aco_tour::{BatchConfig, BatchError, BatchRunner, ColonyConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let nodes_path = arg_value(&args, "--nodes").unwrap_or("demos/data/ring.csv");
    let out_path = arg_value(&args, "--out");
    let simulators: usize = arg_value(&args, "--simulators")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let iterations: usize = arg_value(&args, "--iterations")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let input = match fs::read_to_string(nodes_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Cannot read node list '{}': {}", nodes_path, e);
            std::process::exit(2);
        }
    };

    let colony = ColonyConfig::default();
    let batch = BatchConfig {
        simulators,
        iterations,
        seed,
    };

    let runner = match BatchRunner::from_node_list(&input, colony, batch) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    println!("--- start simulation ---");
    let result = runner.run_with(|step, tours, _| {
        println!("step={}, dist={}", step, tours[0].distance);
    });
    let report = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("--- end simulation ---");
    println!("best: {}", report.best);

    let out_path = out_path
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.csv", report.label));
    let written = File::create(&out_path)
        .map_err(BatchError::from)
        .and_then(|f| report.write_csv(&mut BufWriter::new(f)));
    match written {
        Ok(()) => println!("distance log written to {}", out_path),
        Err(e) => {
            eprintln!("{} ('{}')", e, out_path);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
