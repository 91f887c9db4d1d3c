//! CampusBench CLI
//!
//! Command-line wrapper over the core crates:
//! - `generate` draws a seeded world and prints its entity counts
//! - `load` ingests an RDF fact file into the same world shape
//! - `verify` re-checks a previously dumped world JSON file
//! - `queries` lists the benchmark query-template catalog

use anyhow::{anyhow, Context, Result};
use campusbench_ingest_rdf::{load_world, LoadedWorld};
use campusbench_model::World;
use campusbench_queries::QUERY_CATALOG;
use campusbench_synth::{CountRange, SynthConfig, WorldSynthesizer};
use campusbench_verify::verify_world;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "campusbench")]
#[command(
    author,
    version,
    about = "Seeded academic-world benchmark: generate, load, verify"
)]
struct Cli {
    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a world from a seed and count ranges
    Generate(GenerateArgs),

    /// Load a world from an RDF fact file (.nt, .ttl, .owl, .rdf, .xml)
    Load {
        /// Input RDF file
        file: PathBuf,
        /// Write the loaded world as JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Verify the world after loading
        #[arg(long)]
        verify: bool,
    },

    /// Verify a previously dumped world JSON file
    Verify {
        /// Input world JSON
        file: PathBuf,
    },

    /// List the benchmark query-template catalog
    Queries {
        /// Output as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of universities
    #[arg(short, long)]
    universities: usize,

    /// Random seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Colleges per university, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    colleges: Option<CountRange>,

    /// Departments per college, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    departments: Option<CountRange>,

    /// Undergraduate students per department, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    undergraduates: Option<CountRange>,

    /// Postgraduate students per department, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    postgraduates: Option<CountRange>,

    /// Doctoral students per department, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    phd_students: Option<CountRange>,

    /// Courses per department, MIN:MAX inclusive
    #[arg(long, value_parser = parse_range)]
    courses: Option<CountRange>,

    /// Probability that a college is women-only, in [0, 1]
    #[arg(long)]
    women_ratio: Option<f64>,

    /// Write the generated world as JSON
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Verify the world after generating
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),
        Commands::Load { file, out, verify } => cmd_load(&file, out.as_deref(), verify),
        Commands::Verify { file } => cmd_verify(&file),
        Commands::Queries { json } => cmd_queries(json),
    }
}

/// Parse an inclusive `MIN:MAX` count-range flag.
fn parse_range(s: &str) -> Result<CountRange, String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got {s:?}"))?;
    let min: u32 = min
        .trim()
        .parse()
        .map_err(|e| format!("bad minimum in {s:?}: {e}"))?;
    let max: u32 = max
        .trim()
        .parse()
        .map_err(|e| format!("bad maximum in {s:?}: {e}"))?;
    CountRange::new(min, max).map_err(|e| e.to_string())
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let mut config = SynthConfig::default();
    if let Some(range) = args.colleges {
        config.colleges = range;
    }
    if let Some(range) = args.departments {
        config.departments = range;
    }
    if let Some(range) = args.undergraduates {
        config.undergraduate_students = range;
    }
    if let Some(range) = args.postgraduates {
        config.postgraduate_students = range;
    }
    if let Some(range) = args.phd_students {
        config.phd_students = range;
    }
    if let Some(range) = args.courses {
        config.courses = range;
    }
    if let Some(ratio) = args.women_ratio {
        config = config.with_women_college_ratio(ratio)?;
    }

    println!(
        "{} {} universities (seed {})",
        "Generating".green().bold(),
        args.universities,
        args.seed
    );
    let mut synth = WorldSynthesizer::new(config, args.seed);
    let world = synth.generate(args.universities);
    print_summary(&world);

    if let Some(out) = &args.out {
        write_world(&world, out)?;
    }
    if args.verify {
        report_verification(&world)?;
    }
    Ok(())
}

fn cmd_load(file: &Path, out: Option<&Path>, verify: bool) -> Result<()> {
    println!("{} RDF world {}", "Loading".green().bold(), file.display());
    let LoadedWorld { world, warnings } = load_world(file)?;
    for warning in &warnings {
        println!("{} {}", "info:".yellow().bold(), warning);
    }
    print_summary(&world);

    if let Some(out) = out {
        write_world(&world, out)?;
    }
    if verify {
        report_verification(&world)?;
    }
    Ok(())
}

fn cmd_verify(file: &Path) -> Result<()> {
    println!("{} {}", "Verifying".green().bold(), file.display());
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let world: World = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse world JSON from {}", file.display()))?;
    print_summary(&world);
    report_verification(&world)
}

fn cmd_queries(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(QUERY_CATALOG)?);
        return Ok(());
    }
    for q in QUERY_CATALOG {
        let profiles = q
            .profiles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}", format!("Q{}", q.number).cyan().bold(), q.description);
        println!("  {} {}", "→".cyan(), q.sparql);
        println!("  {} {} [{}]", "→".yellow(), q.construct_involved, profiles);
    }
    Ok(())
}

fn print_summary(world: &World) {
    println!(
        "  {} {} universities, {} colleges, {} departments",
        "→".yellow(),
        world.universities.len(),
        world.colleges.len(),
        world.departments.len()
    );
    println!(
        "  {} {} courses, {} persons, {} students",
        "→".yellow(),
        world.courses.len(),
        world.persons.len(),
        world.students.len()
    );
}

fn write_world(world: &World, out: &Path) -> Result<()> {
    fs::create_dir_all(out.parent().unwrap_or(Path::new(".")))?;
    fs::write(out, serde_json::to_string_pretty(world)?)?;
    println!("  {} {}", "→".cyan(), out.display());
    Ok(())
}

fn report_verification(world: &World) -> Result<()> {
    match verify_world(world) {
        Ok(()) => {
            println!("{} no violations", "ok".green().bold());
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "{} {} violation(s):",
                "error:".red().bold(),
                err.violations.len()
            );
            for line in &err.violations {
                eprintln!("  {line}");
            }
            Err(anyhow!("world verification failed"))
        }
    }
}
