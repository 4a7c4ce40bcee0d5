use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reachset::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "reachset")]
#[command(about = "Reachable-set boundaries for planar linear systems")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute boundary frames over a time window and write one
    /// tab-separated file per frame
    Run(RunArgs),
    /// Print the matrix exponential exp(At)
    Exp {
        /// Row-major matrix entries a,b,c,d
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        matrix: Vec<f64>,
        /// Evaluation time
        #[arg(short, long, default_value_t = 1.0)]
        time: f64,
    },
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
enum Rule {
    Rectangle,
    Trapezoid,
}

impl From<Rule> for QuadRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Rectangle => QuadRule::Rectangle,
            Rule::Trapezoid => QuadRule::Trapezoid,
        }
    }
}

#[derive(Args, Serialize)]
struct RunArgs {
    /// Row-major matrix entries a,b,c,d
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    matrix: Vec<f64>,

    /// Initial state x,y
    #[arg(short = 'x', long, value_delimiter = ',', allow_hyphen_values = true)]
    init: Vec<f64>,

    /// Time window t0,t1
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    time: Vec<f64>,

    /// Quadrature subdivisions per frame
    #[arg(short = 'n', long, default_value_t = 1000)]
    subdivisions: usize,

    /// Sampled directions per frame (defaults to the subdivision count)
    #[arg(short, long)]
    directions: Option<usize>,

    /// Number of output frames
    #[arg(short, long, default_value_t = 24)]
    frames: usize,

    /// Quadrature rule for the support integral
    #[arg(long, value_enum, default_value_t = Rule::Rectangle)]
    rule: Rule,

    /// Output directory for frame files and the run manifest
    #[arg(short, long, default_value = "frames")]
    out: PathBuf,

    /// Optional plotting script, invoked as `python3 <script> <frame>`
    #[arg(long)]
    plot_script: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(args),
        Action::Exp { matrix, time } => print_exp(&matrix, time),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let a = parse_matrix(&args.matrix)?;
    ensure!(
        args.init.len() == 2,
        "expected 2 initial-state entries x,y (got {})",
        args.init.len()
    );
    let x0 = Vec2::new(args.init[0], args.init[1]);
    ensure!(
        args.time.len() == 2,
        "expected a t0,t1 time window (got {} entries)",
        args.time.len()
    );
    let (t0, t1) = (args.time[0], args.time[1]);
    ensure!(t1 >= t0, "time window must satisfy t1 >= t0");
    ensure!(args.frames > 0, "need at least one frame");

    let directions = args.directions.unwrap_or(args.subdivisions);
    let fcfg = FrameCfg {
        directions,
        subdivisions: args.subdivisions,
        rule: args.rule.into(),
    };
    let sys = ReachSystem::new(&a, x0, t0, NumCfg::default())?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let dt = (t1 - t0) / args.frames as f64;
    let mut outputs = Vec::with_capacity(args.frames);
    for i in 0..args.frames {
        let t = t0 + i as f64 * dt;
        let boundary = sys.boundary(t, fcfg)?;
        let path = args.out.join(format!("frame_{i:03}.tsv"));
        write_frame(&path, &boundary)?;
        tracing::info!(frame = i, t, points = boundary.len(), path = %path.display(), "frame");
        if let Some(script) = &args.plot_script {
            plot(script, &path)?;
        }
        outputs.push(path);
    }
    write_manifest(&args, directions, &outputs)
}

fn print_exp(entries: &[f64], t: f64) -> Result<()> {
    let a = parse_matrix(entries)?;
    let m = MatrixExp::new(&a, NumCfg::default())?.at(t);
    println!("{}\t{}", m[(0, 0)], m[(0, 1)]);
    println!("{}\t{}", m[(1, 0)], m[(1, 1)]);
    Ok(())
}

fn parse_matrix(entries: &[f64]) -> Result<Mat2<f64>> {
    ensure!(
        entries.len() == 4,
        "expected 4 matrix entries a,b,c,d (got {})",
        entries.len()
    );
    Ok(mat2_from_entries(entries)?)
}

/// One `x\ty` line per boundary point, in direction order.
fn write_frame(path: &Path, boundary: &[Vec2<f64>]) -> Result<()> {
    let mut body = String::with_capacity(boundary.len() * 32);
    for p in boundary {
        writeln!(body, "{}\t{}", p.x, p.y)?;
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

/// Pretty-printed run manifest next to the frame files.
fn write_manifest(args: &RunArgs, directions: usize, outputs: &[PathBuf]) -> Result<()> {
    let manifest = serde_json::json!({
        "version": reachset::VERSION,
        "params": args,
        "directions": directions,
        "outputs": outputs,
    });
    let path = args.out.join("run.json");
    fs::write(&path, serde_json::to_vec_pretty(&manifest)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn plot(script: &Path, frame: &Path) -> Result<()> {
    let status = Command::new("python3")
        .arg(script)
        .arg(frame)
        .status()
        .with_context(|| format!("spawning python3 {}", script.display()))?;
    if !status.success() {
        bail!("plot script exited with status {:?}", status.code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_files_are_tab_separated_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame_000.tsv");
        write_frame(&path, &[Vec2::new(0.25, -1.5), Vec2::new(3.0, 4.0)]).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        let rows: Vec<Vec<f64>> = body
            .lines()
            .map(|l| l.split('\t').map(|v| v.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows, vec![vec![0.25, -1.5], vec![3.0, 4.0]]);
    }

    #[test]
    fn run_writes_a_frame_per_instant_and_a_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            matrix: vec![1.0, 0.0, 0.0, 2.0],
            init: vec![1.0, 1.0],
            time: vec![0.0, 0.5],
            subdivisions: 32,
            directions: Some(16),
            frames: 3,
            rule: Rule::Rectangle,
            out: dir.path().to_path_buf(),
            plot_script: None,
        };
        run(args).unwrap();
        for i in 0..3 {
            let body = fs::read_to_string(dir.path().join(format!("frame_{i:03}.tsv"))).unwrap();
            assert_eq!(body.lines().count(), 16);
        }
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("run.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["outputs"].as_array().unwrap().len(), 3);
        assert_eq!(manifest["directions"], 16);
    }

    #[test]
    fn matrix_entry_counts_are_validated() {
        assert!(parse_matrix(&[1.0, 2.0, 3.0]).is_err());
        assert!(parse_matrix(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    }
}
