//! Report rendering over finished session records.

use crate::session::SessionRecord;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Per-seed aggregate across iterations.
#[derive(Debug, Clone, Serialize)]
pub struct SeedAggregate {
    pub seed: u64,
    pub iterations: usize,
    pub mean_score: f64,
    pub std_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub mean_correct: f64,
    pub max_streak: u32,
    pub win_rate: f64,
}

#[must_use]
pub fn aggregate(records: &[SessionRecord]) -> Vec<SeedAggregate> {
    // First-occurrence order, robust to interleaved seed runs.
    let mut seeds: Vec<u64> = Vec::new();
    for record in records {
        if !seeds.contains(&record.seed) {
            seeds.push(record.seed);
        }
    }

    seeds
        .into_iter()
        .map(|seed| {
            let group: Vec<&SessionRecord> = records.iter().filter(|r| r.seed == seed).collect();
            let n = group.len();
            let mean_score =
                group.iter().map(|r| f64::from(r.score)).sum::<f64>() / n.max(1) as f64;
            let variance = group
                .iter()
                .map(|r| (f64::from(r.score) - mean_score).powi(2))
                .sum::<f64>()
                / n.max(1) as f64;
            SeedAggregate {
                seed,
                iterations: n,
                mean_score,
                std_score: variance.sqrt(),
                min_score: group.iter().map(|r| r.score).min().unwrap_or(0),
                max_score: group.iter().map(|r| r.score).max().unwrap_or(0),
                mean_correct: group.iter().map(|r| f64::from(r.correct)).sum::<f64>()
                    / n.max(1) as f64,
                max_streak: group.iter().map(|r| r.best_streak).max().unwrap_or(0),
                win_rate: group.iter().filter(|r| r.won).count() as f64 / n.max(1) as f64,
            }
        })
        .collect()
}

pub fn write_console<W: Write>(
    out: &mut W,
    aggregates: &[SeedAggregate],
    elapsed: Duration,
) -> std::io::Result<()> {
    writeln!(out, "{}", "Battle Session Summary".bright_yellow().bold())?;
    writeln!(out, "{}", "-".repeat(60).yellow())?;
    writeln!(
        out,
        "{:>10} {:>6} {:>10} {:>8} {:>8} {:>8} {:>8}",
        "seed", "runs", "mean", "std", "max", "correct", "wins"
    )?;
    for agg in aggregates {
        writeln!(
            out,
            "{:>10} {:>6} {:>10.1} {:>8.1} {:>8} {:>8.1} {:>7.0}%",
            agg.seed,
            agg.iterations,
            agg.mean_score,
            agg.std_score,
            agg.max_score,
            agg.mean_correct,
            agg.win_rate * 100.0
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total time: {elapsed:?}")?;
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    records: &[SessionRecord],
    aggregates: &[SeedAggregate],
) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Report<'a> {
        sessions: &'a [SessionRecord],
        aggregates: &'a [SeedAggregate],
    }
    serde_json::to_writer_pretty(
        &mut *out,
        &Report {
            sessions: records,
            aggregates,
        },
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seed: u64, score: u32, won: bool) -> SessionRecord {
        SessionRecord {
            seed,
            accuracy: 0.7,
            score,
            best_streak: 3,
            correct: 6,
            timeouts: 0,
            rank: if won { 1 } else { 2 },
            players: 5,
            won,
        }
    }

    #[test]
    fn aggregates_group_by_seed_in_order() {
        let records = vec![
            record(1, 100, false),
            record(1, 300, true),
            record(2, 200, false),
        ];
        let aggs = aggregate(&records);
        assert_eq!(aggs.len(), 2);
        assert_eq!(aggs[0].seed, 1);
        assert_eq!(aggs[0].iterations, 2);
        assert!((aggs[0].mean_score - 200.0).abs() < f64::EPSILON);
        assert!((aggs[0].win_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(aggs[0].min_score, 100);
        assert_eq!(aggs[0].max_score, 300);
    }

    #[test]
    fn interleaved_seeds_still_aggregate_once() {
        let records = vec![
            record(1, 100, false),
            record(2, 200, false),
            record(1, 300, true),
        ];
        let aggs = aggregate(&records);
        assert_eq!(aggs.len(), 2);
        assert_eq!(aggs[0].seed, 1);
        assert_eq!(aggs[0].iterations, 2);
        assert_eq!(aggs[1].seed, 2);
        assert_eq!(aggs[1].iterations, 1);
    }

    #[test]
    fn console_report_lists_every_seed() {
        let records = vec![record(1, 100, false), record(2, 200, true)];
        let aggs = aggregate(&records);
        let mut buf = Vec::new();
        write_console(&mut buf, &aggs, Duration::from_millis(5)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Battle Session Summary"));
        assert!(text.contains("100.0"));
        assert!(text.contains("200.0"));
    }

    #[test]
    fn json_report_round_trips() {
        let records = vec![record(1, 100, true)];
        let aggs = aggregate(&records);
        let mut buf = Vec::new();
        write_json(&mut buf, &records, &aggs).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["sessions"][0]["score"], 100);
        assert_eq!(value["aggregates"][0]["iterations"], 1);
    }
}
