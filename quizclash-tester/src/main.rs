mod report;
mod session;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use quizclash_game::{BattleMode, is_room_code_valid, seed_from_room_code};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use report::{aggregate, write_console, write_json};
use session::{BotConfig, SessionRecord, run_session};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable summary table
    Console,
    /// Machine-readable sessions plus aggregates
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Two-player battle
    #[value(name = "1v1")]
    OneVsOne,
    /// Five-player battle
    Group,
}

impl Mode {
    const fn battle_mode(self) -> BattleMode {
        match self {
            Self::OneVsOne => BattleMode::OneVsOne,
            Self::Group => BattleMode::Group,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quizclash-tester", version)]
#[command(about = "Headless QA bot that plays QuizClash battles and checks engine invariants")]
struct Args {
    /// Seeds to run, comma-separated (numbers or room codes like QC-COMET42)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Bot answer accuracy, 0.0 (always wrong) to 1.0 (always right)
    #[arg(long, default_value_t = 0.7)]
    accuracy: f64,

    /// Battle mode to simulate
    #[arg(long, value_enum, default_value_t = Mode::Group)]
    mode: Mode,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Log each session as it finishes
    #[arg(short, long)]
    verbose: bool,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("{}", "QuizClash Battle Tester".bright_cyan().bold());
    println!("{}", "=".repeat(30).cyan());

    if !(0.0..=1.0).contains(&args.accuracy) {
        bail!("--accuracy must be between 0.0 and 1.0, got {}", args.accuracy);
    }

    let seeds = resolve_seeds(&args.seeds)?;
    let bot = BotConfig {
        mode: args.mode.battle_mode(),
        accuracy: args.accuracy,
        verbose: args.verbose,
    };

    let start = Instant::now();
    let mut records: Vec<SessionRecord> = Vec::with_capacity(seeds.len() * args.iterations);
    for &seed in &seeds {
        for iteration in 0..args.iterations {
            // Vary the bot per iteration but keep the opponent field fixed
            // per seed, so aggregates measure the bot, not the room.
            let bot_seed = seed.wrapping_add(iteration as u64);
            let record = run_session(seed, bot_seed, &bot)
                .with_context(|| format!("seed {seed}, iteration {iteration}"))?;
            records.push(record);
        }
    }
    let aggregates = aggregate(&records);

    let mut out = OutputTarget::new(args.output)?;
    match args.report {
        ReportFormat::Console => write_console(&mut out, &aggregates, start.elapsed())?,
        ReportFormat::Json => write_json(&mut out, &records, &aggregates)?,
    }
    out.flush()?;

    println!(
        "{}",
        format!(
            "{} sessions across {} seeds, all invariants held",
            records.len(),
            seeds.len()
        )
        .green()
    );
    Ok(())
}

/// Accept plain numbers or shareable room codes.
fn resolve_seeds(input: &str) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Ok(seed) = token.parse::<u64>() {
            seeds.push(seed);
        } else if is_room_code_valid(&token.to_uppercase()) {
            seeds.push(seed_from_room_code(token));
        } else {
            bail!("unrecognized seed {token:?}: expected a number or a room code like QC-COMET42");
        }
    }
    if seeds.is_empty() {
        bail!("no seeds given");
    }
    Ok(seeds)
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Ok(Self::File(BufWriter::new(file)))
            }
            None => Ok(Self::Stdout(BufWriter::new(stdout()))),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numeric_seed_lists() {
        assert_eq!(resolve_seeds("1, 2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn resolves_room_codes_deterministically() {
        let a = resolve_seeds("QC-COMET42").unwrap();
        let b = resolve_seeds("qc-comet42").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage_and_empty_seed_input() {
        assert!(resolve_seeds("not-a-seed").is_err());
        assert!(resolve_seeds("  ,  ").is_err());
    }

    #[test]
    fn cli_parses_defaults() {
        let args = Args::parse_from(["quizclash-tester"]);
        assert_eq!(args.iterations, 10);
        assert!((args.accuracy - 0.7).abs() < f64::EPSILON);
        assert!(matches!(args.report, ReportFormat::Console));
        assert!(matches!(args.mode, Mode::Group));
    }

    #[test]
    fn cli_parses_full_invocation() {
        let args = Args::parse_from([
            "quizclash-tester",
            "--seeds",
            "1,QC-ORBIT07",
            "--iterations",
            "3",
            "--accuracy",
            "0.9",
            "--mode",
            "1v1",
            "--report",
            "json",
            "--verbose",
        ]);
        assert_eq!(args.seeds, "1,QC-ORBIT07");
        assert_eq!(args.iterations, 3);
        assert!(matches!(args.mode, Mode::OneVsOne));
        assert!(matches!(args.report, ReportFormat::Json));
        assert!(args.verbose);
    }
}
