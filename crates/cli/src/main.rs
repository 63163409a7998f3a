use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use questionnaire::{
    load_batch, load_request, parse_profile, parse_request_str, BatchEntry, Course,
};
use rand::Rng;
use scoring::{ExpertScorer, Recommendation};
use serde_json::{json, Map, Value};
use server::{RecommendResponse, RecommendationService, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::warn;

/// CourseRecs - Course Recommendation Engine
#[derive(Parser)]
#[command(name = "course-recs")]
#[command(about = "Recommend an academic course from a student questionnaire", long_about = None)]
struct Cli {
    /// Milliseconds the primary scorer may run before the fallback answers
    #[arg(long, global = true, env = "COURSE_RECS_TIMEOUT_MS", default_value = "2000")]
    timeout_ms: u64,

    /// Seed for the fallback scorer's jitter (reproducible fallback output)
    #[arg(long, global = true, env = "COURSE_RECS_SEED")]
    seed: Option<u64>,

    /// Skip the primary scorer and always use the fallback
    #[arg(long, global = true)]
    fallback_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses for one questionnaire
    Recommend {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Score a JSON Lines file, one questionnaire per line
    Batch {
        /// Path to the .jsonl file
        #[arg(long)]
        input: PathBuf,

        /// Maximum number of requests in flight
        #[arg(long, default_value = "8")]
        concurrent: usize,
    },

    /// Show how the primary scorer reached its result
    Explain {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

/// Questionnaire sources. Field flags override values from `--input`/`--json`.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Read the questionnaire from a JSON file
    #[arg(long, conflicts_with = "json")]
    input: Option<PathBuf>,

    /// Questionnaire as an inline JSON object
    #[arg(long)]
    json: Option<String>,

    /// Cumulative GPA (0-4)
    #[arg(long)]
    cgpa: Option<f64>,

    /// Subject strengths (0-5)
    #[arg(long)]
    programming: Option<i64>,
    #[arg(long)]
    multimedia: Option<i64>,
    #[arg(long)]
    machine_learning: Option<i64>,
    #[arg(long)]
    database: Option<i64>,
    #[arg(long)]
    software_engineering: Option<i64>,

    /// Interests (0-5)
    #[arg(long)]
    game_development: Option<i64>,
    #[arg(long)]
    web_development: Option<i64>,
    #[arg(long)]
    artificial_intelligence: Option<i64>,
    #[arg(long)]
    database_system: Option<i64>,
    #[arg(long)]
    software_validation: Option<i64>,

    /// 1=Easy, 2=Moderate, 3=Difficult
    #[arg(long)]
    difficulty: Option<i64>,

    /// 1=Visual, 2=Kinesthetic, 3=Reading/Writing, 4=Auditory
    #[arg(long)]
    learning_style: Option<i64>,
}

impl InputArgs {
    /// Assemble the raw request payload
    fn to_request(&self) -> Result<Value> {
        let mut fields: Map<String, Value> = match (&self.input, &self.json) {
            (Some(path), _) => load_request(path)
                .with_context(|| format!("Failed to load questionnaire from {}", path.display()))?
                .as_object()
                .cloned()
                .unwrap_or_default(),
            (None, Some(inline)) => parse_request_str(inline)
                .context("Failed to parse --json questionnaire")?
                .as_object()
                .cloned()
                .unwrap_or_default(),
            (None, None) => Map::new(),
        };

        let overrides = [
            ("cgpa", self.cgpa.map(Value::from)),
            ("programming", self.programming.map(Value::from)),
            ("multimedia", self.multimedia.map(Value::from)),
            ("machineLearning", self.machine_learning.map(Value::from)),
            ("database", self.database.map(Value::from)),
            ("softwareEngineering", self.software_engineering.map(Value::from)),
            ("gameDevelopment", self.game_development.map(Value::from)),
            ("webDevelopment", self.web_development.map(Value::from)),
            ("artificialIntelligence", self.artificial_intelligence.map(Value::from)),
            ("databaseSystem", self.database_system.map(Value::from)),
            ("softwareValidation", self.software_validation.map(Value::from)),
            ("difficulty", self.difficulty.map(Value::from)),
            ("learningStyle", self.learning_style.map(Value::from)),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                fields.insert(key.to_string(), value);
            }
        }

        Ok(Value::Object(fields))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServiceConfig::default()
        .with_primary_timeout(Duration::from_millis(cli.timeout_ms))
        .with_jitter_seed(cli.seed)
        .with_fallback_only(cli.fallback_only);
    let service = RecommendationService::new(config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { input, format } => handle_recommend(&service, &input, format).await?,
        Commands::Batch { input, concurrent } => handle_batch(service, input, concurrent).await?,
        Commands::Explain { input } => handle_explain(&input)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &RecommendationService,
    input: &InputArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = input.to_request()?;
    let response = service.recommend(&request).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Pretty => print_recommendation(&response.data),
    }
    Ok(())
}

/// Handle the 'batch' command
async fn handle_batch(
    service: RecommendationService,
    path: PathBuf,
    concurrent: usize,
) -> Result<()> {
    let entries = load_batch(&path)
        .with_context(|| format!("Failed to load batch from {}", path.display()))?;
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));

    let mut handles = Vec::with_capacity(entries.len());
    for entry in entries {
        let request = batch_request(entry);
        let service = service.clone();
        let permits = Arc::clone(&permits);
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            Ok::<RecommendResponse, anyhow::Error>(service.recommend(&request).await)
        }));
    }

    // Emit in input order
    for handle in handles {
        let response = handle.await??;
        println!("{}", serde_json::to_string(&response)?);
    }
    Ok(())
}

/// Request payload for one batch line; a malformed line is scored with
/// every field at its default
fn batch_request(entry: BatchEntry) -> Value {
    entry.request.unwrap_or_else(|e| {
        warn!("{}; scoring line {} with defaults", e, entry.line);
        json!({})
    })
}

/// Handle the 'explain' command
fn handle_explain(input: &InputArgs) -> Result<()> {
    let request = input.to_request()?;
    let profile = parse_profile(&request);
    let explanation = ExpertScorer::new().explain(&profile);
    let classification = explanation.classification;

    println!("{}", "Rule classification:".bold().blue());
    println!(
        "{}Rule: {}\n{}Class: {} → {}",
        "• ".green(),
        classification.rule,
        "• ".green(),
        classification.class,
        classification.course
    );

    println!("{}", "Score breakdown:".bold().blue());
    let header: Vec<String> = Course::ALL.iter().map(|c| format!("{:>10.10}", c.name())).collect();
    println!("{:<18}{}", "stage", header.join(" "));
    for snapshot in &explanation.stages {
        let row: Vec<String> = snapshot
            .scores
            .iter()
            .map(|(_, score)| format!("{:>10.3}", score))
            .collect();
        println!("{:<18}{}", snapshot.stage, row.join(" "));
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: RecommendationService,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    // Generate a set of random questionnaires
    let mut rng = rand::rng();
    let payloads: Vec<Value> = (0..requests).map(|_| random_request(&mut rng)).collect();

    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for request in payloads {
        let service = service.clone();
        let permits = Arc::clone(&permits);
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            let response = service.recommend(&request).await;
            Ok::<_, anyhow::Error>((start.elapsed(), response.data.is_fallback()))
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    let mut fallbacks = 0usize;
    for handle in handles {
        let (elapsed, fallback) = handle.await??;
        timings.push(elapsed);
        if fallback {
            fallbacks += 1;
        }
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);
    println!("Fallback responses: {}", fallbacks);

    Ok(())
}

fn random_request(rng: &mut impl Rng) -> Value {
    let mut fields = Map::new();
    for key in [
        "programming",
        "multimedia",
        "machineLearning",
        "database",
        "softwareEngineering",
        "gameDevelopment",
        "webDevelopment",
        "artificialIntelligence",
        "databaseSystem",
        "softwareValidation",
    ] {
        fields.insert(key.to_string(), json!(rng.random_range(0..=5i64)));
    }
    fields.insert("cgpa".to_string(), json!(rng.random_range(0..=400i64) as f64 / 100.0));
    fields.insert("difficulty".to_string(), json!(rng.random_range(1..=3i64)));
    fields.insert("learningStyle".to_string(), json!(rng.random_range(1..=4i64)));
    Value::Object(fields)
}

/// Helper function to format and print a recommendation
fn print_recommendation(rec: &Recommendation) {
    print!("{}", "Course Recommendation:\n".bold().blue());
    println!(
        "{}. {} - Confidence: {:.3}",
        "1".green(),
        rec.first_recommended_course,
        rec.first_confidence
    );
    println!(
        "{}. {} - Confidence: {:.3}",
        "2".green(),
        rec.alternative_recommended_course,
        rec.second_confidence
    );
    println!(
        "{}Rule-based pick: {} ({:.3})",
        "• ".cyan(),
        rec.tree_recommendation,
        rec.confidence_tree
    );

    println!("Scores:");
    for course in Course::ALL {
        println!("  - {}: {:.3}", course, rec.probability(course));
    }

    if let Some(method) = &rec.method {
        println!("{}{}", "⚠ ".yellow(), method.yellow());
    }
    println!("Generated at {}", rec.timestamp);
}
