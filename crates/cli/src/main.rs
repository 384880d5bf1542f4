use anyhow::{anyhow, ensure, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use cutflow::{CutSnapshot, CutflowReport, EventFilter, EventPipeline, ObjectFilter, ObjectPipeline};
use rayon::prelude::*;
use selections::{
    synthetic, BTaggedJets, Event, HasLepton, Jet, JetEtaWindow, JetPtSelection,
    LeptonPtThreshold, MissingEtThreshold,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cut-flow demo driver over synthetic analysis events
#[derive(Parser)]
#[command(name = "cutflow-demo")]
#[command(about = "Run a demo cut-flow over synthetic events and merge chunk reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process synthetic events through the demo cut-flow
    Run {
        /// Number of events to generate
        #[arg(long, default_value = "100000")]
        events: usize,

        /// Number of parallel worker chunks
        #[arg(long, default_value = "4")]
        chunks: usize,

        /// Generator seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable the MET cut without removing it from the report
        #[arg(long)]
        disable_met: bool,

        /// Write the merged event cut-flow snapshots as JSON
        #[arg(long)]
        report_out: Option<PathBuf>,

        /// Write the merged jet cut-flow snapshots as JSON
        #[arg(long)]
        jet_report_out: Option<PathBuf>,
    },

    /// Merge JSON snapshot files produced by `run --report-out`
    Merge {
        /// Snapshot files to merge (at least two)
        #[arg(required = true, num_args = 2..)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            events,
            chunks,
            seed,
            disable_met,
            report_out,
            jet_report_out,
        } => handle_run(events, chunks, seed, disable_met, report_out, jet_report_out),
        Commands::Merge { inputs } => handle_merge(inputs),
    }
}

/// The demo event selection: lepton presence, leading-lepton pt, MET.
///
/// The hook on the final stage fires once per fully selected event, which
/// is how an analysis would schedule plot filling or ntuple output.
fn event_pipeline(disable_met: bool, selected: Arc<AtomicU64>) -> EventPipeline<Event> {
    let met_cut = EventFilter::new(MissingEtThreshold::new(30.0));
    let met_cut = if disable_met {
        met_cut.with_passthrough()
    } else {
        met_cut
    };

    EventPipeline::new()
        .with_filter(EventFilter::new(HasLepton))
        .with_filter(EventFilter::new(LeptonPtThreshold::new(20.0)))
        .with_filter(met_cut.with_hook(move || {
            selected.fetch_add(1, Ordering::Relaxed);
        }))
}

/// The demo jet selection applied to events surviving the event cuts.
fn jet_pipeline() -> ObjectPipeline<Event, Jet> {
    ObjectPipeline::new()
        .with_filter(ObjectFilter::new(JetPtSelection::new(30.0)))
        .with_filter(ObjectFilter::new(JetEtaWindow::new(2.5)))
        .with_filter(ObjectFilter::new(BTaggedJets))
}

/// Handle the 'run' command
fn handle_run(
    events: usize,
    chunks: usize,
    seed: Option<u64>,
    disable_met: bool,
    report_out: Option<PathBuf>,
    jet_report_out: Option<PathBuf>,
) -> Result<()> {
    ensure!(chunks > 0, "At least one chunk is required");

    let seed = seed.unwrap_or_else(rand::random::<u64>);
    let selected = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    // Spread the events over the chunks; the first `remainder` chunks take
    // one extra event.
    let per_chunk = events / chunks;
    let remainder = events % chunks;

    // Each worker owns an independent pipeline instance and fills it over
    // its own chunk; no state is shared except the hook counter.
    let chunk_reports: Vec<(CutflowReport, CutflowReport)> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let count = per_chunk + usize::from(chunk < remainder);
            let mut event_cuts = event_pipeline(disable_met, selected.clone());
            let mut jet_cuts = jet_pipeline();

            for event in synthetic::generate(seed.wrapping_add(chunk as u64), count) {
                if event_cuts.evaluate(&event) {
                    let jets = event.jets.clone();
                    jet_cuts.evaluate(&event, jets);
                }
            }
            tracing::debug!("Chunk {} done: {} events", chunk, count);
            (event_cuts.report(), jet_cuts.report())
        })
        .collect();

    let (event_reports, jet_reports): (Vec<_>, Vec<_>) = chunk_reports.into_iter().unzip();
    let event_report = merge_all(event_reports)?;
    let jet_report = merge_all(jet_reports)?;

    println!(
        "{} Processed {} events in {} chunks in {:?} (seed {})",
        "✓".green(),
        events,
        chunks,
        start.elapsed(),
        seed
    );

    print_report("Event cut-flow", &event_report);
    print_report("Jet cut-flow", &jet_report);

    println!();
    println!(
        "Selected events (counted by hook): {}",
        selected.load(Ordering::Relaxed)
    );

    if let Some(path) = report_out {
        write_snapshots(&path, &event_report)?;
        println!(
            "{} Wrote event cut-flow snapshots to {}",
            "✓".green(),
            path.display()
        );
    }
    if let Some(path) = jet_report_out {
        write_snapshots(&path, &jet_report)?;
        println!(
            "{} Wrote jet cut-flow snapshots to {}",
            "✓".green(),
            path.display()
        );
    }
    Ok(())
}

/// Handle the 'merge' command
fn handle_merge(inputs: Vec<PathBuf>) -> Result<()> {
    let mut reports = Vec::new();
    for path in &inputs {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let snapshots: Vec<CutSnapshot> = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse snapshots from {}", path.display()))?;
        reports.push(CutflowReport::from_snapshots(snapshots));
    }

    let merged = merge_all(reports)?;
    println!("{} Merged {} chunk reports", "✓".green(), inputs.len());
    print_report("Merged cut-flow", &merged);
    Ok(())
}

/// Write a report's ordered snapshots as JSON, the format `merge` reads.
fn write_snapshots(path: &Path, report: &CutflowReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &report.to_snapshots())?;
    Ok(())
}

/// Reduce any number of chunk reports into one.
fn merge_all(reports: Vec<CutflowReport>) -> Result<CutflowReport> {
    let mut iter = reports.into_iter();
    let first = iter.next().ok_or_else(|| anyhow!("No reports to merge"))?;
    iter.try_fold(first, |merged, report| {
        Ok(CutflowReport::merge(&merged, &report)?)
    })
}

/// Format a report the way a cut-flow is usually read: the initial event
/// count, then the surviving count after each stage, then the per-stage
/// detail breakdowns.
fn print_report(title: &str, report: &CutflowReport) {
    println!();
    println!("{}", title.bold().blue());
    println!("  {:<24} {:>12}", "Total", report.total());
    for stage in report.stages() {
        println!("  {:<24} {:>12}", stage.name(), stage.passing());
    }

    for stage in report.stages() {
        if !stage.details().is_empty() {
            println!();
            println!("  {}", format!("{} details", stage.name()).bold());
            for (label, count) in stage.details().iter() {
                println!("    {:<22} {:>12}", label, count);
            }
        }
    }
}
