use interval_partition::partitioning::{LeafSummary, Partitioner};
use interval_partition::PartitionConfig;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const EXAMPLE_POINTS: [f64; 8] = [0.0, 1.0, 2.0, 4.0, 5.0, 8.0, 9.0, 12.0];

#[derive(Debug)]
struct Args {
    points: Option<Vec<f64>>,
    data_json: Option<PathBuf>,
    config: Option<PathBuf>,
    synthetic: Option<usize>,
    range: (f64, f64),
    seed: u64,
    delta: Option<f64>,
    max_leaf_points: Option<usize>,
    sorted: bool,
    json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            points: None,
            data_json: None,
            config: None,
            synthetic: None,
            range: (0.0, 1.0),
            seed: 42,
            delta: None,
            max_leaf_points: None,
            sorted: false,
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct PartitionReport<'a> {
    source: String,
    config: &'a PartitionConfig,
    num_points: usize,
    num_nodes: usize,
    num_leaves: usize,
    max_depth: usize,
    build_seconds: f64,
    leaves: Vec<LeafSummary>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PartitionConfig::default(),
    };
    if let Some(delta) = args.delta {
        config = config.with_delta(delta);
    }
    if let Some(k) = args.max_leaf_points {
        config = config.with_max_leaf_points(k);
    }

    let (points, source) = if let Some(points) = args.points.clone() {
        (points, "inline".to_string())
    } else if let Some(path) = &args.data_json {
        (load_json_points(path)?, path.display().to_string())
    } else if let Some(n) = args.synthetic {
        let (lo, hi) = args.range;
        (
            generate_synthetic_points(n, lo, hi, args.seed),
            format!("synthetic_n{}_seed{}", n, args.seed),
        )
    } else {
        (EXAMPLE_POINTS.to_vec(), "example".to_string())
    };
    info!("partitioning {} points from {}", points.len(), source);

    let partitioner = Partitioner::new(config)?;
    let build_start = Instant::now();
    let result = partitioner.partition(&points)?;
    let build_seconds = build_start.elapsed().as_secs_f64();

    let leaves = if args.sorted {
        result.sorted_summaries()
    } else {
        result.summaries()
    };

    for leaf in &leaves {
        println!("{} {}", leaf.mean, leaf.variance);
    }

    if args.json {
        let tree = result.tree();
        let report = PartitionReport {
            source,
            config: partitioner.config(),
            num_points: tree.num_points(),
            num_nodes: tree.len(),
            num_leaves: result.len(),
            max_depth: tree.max_depth(),
            build_seconds,
            leaves,
        };
        println!("json: {}", serde_json::to_string(&report)?);
    }

    Ok(())
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--points" => {
                let v = required_value(&flag, it.next())?;
                args.points = Some(parse_points(&v)?);
            }
            "--data-json" => {
                let v = required_value(&flag, it.next())?;
                args.data_json = Some(PathBuf::from(v));
            }
            "--config" => {
                let v = required_value(&flag, it.next())?;
                args.config = Some(PathBuf::from(v));
            }
            "--synthetic" => {
                let v = required_value(&flag, it.next())?;
                args.synthetic = Some(v.parse()?);
            }
            "--range" => {
                let v = required_value(&flag, it.next())?;
                args.range = parse_range(&v)?;
            }
            "--seed" => {
                let v = required_value(&flag, it.next())?;
                args.seed = v.parse()?;
            }
            "--delta" => {
                let v = required_value(&flag, it.next())?;
                args.delta = Some(v.parse()?);
            }
            "--max-leaf-points" => {
                let v = required_value(&flag, it.next())?;
                args.max_leaf_points = Some(v.parse()?);
            }
            "--sorted" => args.sorted = true,
            "--json" => args.json = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {flag}").into());
            }
        }
    }

    Ok(args)
}

fn required_value(flag: &str, value: Option<String>) -> Result<String, Box<dyn Error>> {
    value.ok_or_else(|| format!("missing value for {flag}").into())
}

fn parse_points(raw: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| -> Box<dyn Error> { format!("invalid point {s:?}: {e}").into() })
        })
        .collect()
}

fn parse_range(raw: &str) -> Result<(f64, f64), Box<dyn Error>> {
    let (lo, hi) = raw
        .split_once(':')
        .ok_or_else(|| format!("range must look like LO:HI, got {raw:?}"))?;
    let (lo, hi): (f64, f64) = (lo.trim().parse()?, hi.trim().parse()?);
    if !(lo < hi) {
        return Err(format!("range must satisfy LO < HI, got {lo}:{hi}").into());
    }
    Ok((lo, hi))
}

fn print_help() {
    println!(
        "interval-partition\n\
        Split points on a line into intervals and report mean and variance per interval.\n\n\
        Usage:\n\
          cargo run --release --bin interval-partition -- [options]\n\n\
        Options:\n\
          --points <a,b,c>            comma-separated points\n\
          --data-json <path>          JSON file holding an array of numbers\n\
          --synthetic <int>           number of uniformly random points\n\
          --range <lo:hi>             range for synthetic points (default: 0:1)\n\
          --seed <int>                RNG seed for synthetic points (default: 42)\n\
          --config <path>             JSON partition config\n\
          --delta <float>             half-width threshold (default: 0.05)\n\
          --max-leaf-points <int>     largest point count never split (default: 2)\n\
          --sorted                    print leaves ordered by position\n\
          --json                      also print a JSON report\n\
          --help                      print this help\n\n\
        With no input option the built-in example [0,1,2,4,5,8,9,12] is used.\n"
    );
}

fn load_config(path: &Path) -> Result<PartitionConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let config: PartitionConfig = serde_json::from_str(&raw)?;
    Ok(config)
}

fn load_json_points(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let points: Vec<f64> = serde_json::from_str(&raw)?;
    Ok(points)
}

fn generate_synthetic_points(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}
