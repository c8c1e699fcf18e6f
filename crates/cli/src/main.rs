use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{EngineConfig, Outcome, RecommendationEngine};
use explainer::{Explainer, ExplainerConfig};
use rand::seq::SliceRandom;
use roster::{Day, Participant, Roster};
use slots::{Candidate, build_group_context};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Common Ground - find a meeting slot that works for the whole group
#[derive(Parser)]
#[command(name = "common-ground")]
#[command(about = "Group meeting recommendations from availability and interests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a meeting slot for a roster
    Recommend {
        /// Path to a roster JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Attach a natural-language explanation (needs GEMINI_API_KEY)
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Summarise a roster without recommending
    Inspect {
        /// Path to a roster JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the illustrative result produced for a one-person group
    Demo,

    /// Run benchmark to test performance
    Benchmark {
        /// Path to a roster JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of recommendations to compute
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

/// Engine knobs shared by commands that run a recommendation
#[derive(Args, Clone, Copy)]
struct Tuning {
    /// Minimum shared minutes for a participant to count as attending
    #[arg(long, default_value_t = slots::DEFAULT_MIN_OVERLAP_MINUTES)]
    min_overlap: u32,

    /// Number of alternatives to return
    #[arg(long, default_value_t = engine::config::DEFAULT_ALTERNATIVES)]
    alternatives: usize,
}

impl Tuning {
    fn engine(self) -> RecommendationEngine {
        RecommendationEngine::with_config(
            EngineConfig::default()
                .with_min_overlap_minutes(self.min_overlap)
                .with_alternatives(self.alternatives),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            input,
            json,
            explain,
            tuning,
        } => handle_recommend(&input, json, explain, tuning).await?,
        Commands::Inspect { input } => handle_inspect(&input)?,
        Commands::Demo => handle_demo()?,
        Commands::Benchmark {
            input,
            iterations,
            concurrent,
        } => handle_benchmark(&input, iterations, concurrent).await?,
    }

    Ok(())
}

fn load_roster(input: &Path) -> Result<Roster> {
    let start = Instant::now();
    let roster = Roster::load_from_file(input)
        .with_context(|| format!("Failed to load roster from {}", input.display()))?;
    tracing::info!(
        "Loaded {} participants in {:?}",
        roster.len(),
        start.elapsed()
    );
    Ok(roster)
}

/// Handle the 'recommend' command
async fn handle_recommend(input: &Path, json: bool, explain: bool, tuning: Tuning) -> Result<()> {
    let roster = load_roster(input)?;
    if roster.is_empty() {
        bail!("Roster {} has no participants", input.display());
    }

    let mut outcome = tuning
        .engine()
        .recommend(roster.participants())
        .context("Failed to compute a recommendation")?;

    if explain {
        let explainer = Explainer::from_config(&ExplainerConfig::from_env());
        outcome = explainer.annotate(outcome).await;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to encode outcome")?
        );
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

/// Handle the 'inspect' command
fn handle_inspect(input: &Path) -> Result<()> {
    let roster = load_roster(input)?;
    let participants = roster.participants();
    let context = build_group_context(participants);

    println!("{}", format!("Roster: {}", input.display()).bold().blue());
    println!("{}Participants: {}", "• ".green(), context.total_participants);
    println!("{}Distinct locations: {}", "• ".green(), context.unique_locations);
    println!("{}Dominant topic: {}", "• ".green(), context.dominant_topic);

    println!("Topics:");
    if context.topic_tally.is_empty() {
        println!("  (none)");
    }
    for count in context.topic_tally.counts() {
        println!("  - {}: {}", count.topic, count.count);
    }

    println!("Availability:");
    for day in Day::ALL {
        let ids: Vec<&str> = participants
            .iter()
            .filter(|p| p.availability.range_on(day).is_some())
            .map(|p| p.id.as_str())
            .collect();
        println!(
            "  {} {:>2} {}",
            day.label().cyan(),
            ids.len(),
            ids.join(", ").dimmed()
        );
    }
    Ok(())
}

/// Handle the 'demo' command
fn handle_demo() -> Result<()> {
    let solo = Participant::new("you")
        .with_topics(["Rust"])
        .with_location("Berlin")
        .with_day(Day::Wednesday, "13:00", "18:00");

    let outcome = RecommendationEngine::new()
        .recommend(&[solo])
        .context("Failed to compute demo recommendation")?;
    print_outcome(&outcome);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(input: &Path, iterations: usize, concurrent: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }
    let roster = load_roster(input)?;
    if roster.is_empty() {
        bail!("Roster {} has no participants", input.display());
    }

    // Each request sees the group in a different order, like separate submissions
    let groups: Vec<Vec<Participant>> = {
        let mut rng = rand::rng();
        (0..iterations)
            .map(|_| {
                let mut group = roster.participants().to_vec();
                group.shuffle(&mut rng);
                group
            })
            .collect()
    };

    let engine = Arc::new(RecommendationEngine::new());
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = Vec::with_capacity(iterations);
    for group in groups {
        let engine = Arc::clone(&engine);
        let permits = Arc::clone(&permits);
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let result = tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                engine.recommend(&group).map(|_| start.elapsed())
            })
            .await?;
            Ok::<_, anyhow::Error>(result?)
        }));
    }

    let mut timings = Vec::with_capacity(iterations);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let summed: Duration = timings.iter().sum();
    let avg_latency = summed / timings.len() as u32;
    let throughput = iterations as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Participants: {}", roster.len());
    println!("Requests: {} ({} concurrent)", iterations, concurrent.max(1));
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Nearest-rank percentile of sorted timings
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let idx = ((sorted.len() as f64 * p) as usize).min(sorted.len().saturating_sub(1));
    sorted.get(idx).copied().unwrap_or_default()
}

/// Helper function to format and print an outcome
fn print_outcome(outcome: &Outcome) {
    if outcome.is_demo_data {
        println!(
            "{}",
            "Demo data: the group is too small to score, numbers are illustrative."
                .yellow()
                .bold()
        );
    }

    println!("{}", "Best option:".bold().blue());
    print_candidate(&outcome.best_option, outcome.total_participants);

    if let Some(explanation) = &outcome.explanation {
        let source = if outcome.is_ai_generated == Some(true) {
            "AI"
        } else {
            "standard"
        };
        println!("   {} ({}): {}", "Why".bold(), source, explanation);
    }

    if !outcome.alternatives.is_empty() {
        println!("{}", "Alternatives:".bold().blue());
        for (rank, alt) in outcome.alternatives.iter().enumerate() {
            print!("{}. ", (rank + 1).to_string().green());
            print_candidate(alt, outcome.total_participants);
        }
    }
}

fn print_candidate(candidate: &Candidate, total: usize) {
    println!(
        "{} - {} {}-{} @ {}",
        candidate.title.bold(),
        candidate.day.name(),
        candidate.window.start,
        candidate.window.end,
        candidate.location
    );
    println!(
        "   Attendance: {}/{} ({}%)  Fairness: {}  Avg distance: {}",
        candidate.attendee_count(),
        total,
        candidate.raw_score,
        candidate
            .fairness_score
            .map_or_else(|| "-".to_string(), |f| format!("{f}%")),
        candidate
            .avg_distance
            .map_or_else(|| "-".to_string(), |d| format!("{d:.1} km"))
    );
    for pro in &candidate.pros {
        println!("   {} {}", "+".green(), pro);
    }
    for con in &candidate.cons {
        println!("   {} {}", "-".red(), con);
    }
}
