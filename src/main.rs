//! Toroidal Life CLI - Run a console Game of Life from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use toroidal_life::{
    compute::{GridEngine, GridStats},
    render::render,
    schema::{Pattern, SimulationConfig},
};

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return;
    }

    if args.iter().any(|a| a == "--example") {
        print_example_config();
        return;
    }

    let randomize = args.iter().any(|a| a == "--random");
    let config_path = args[1..]
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from);

    // Load configuration
    let mut config = match &config_path {
        Some(path) => SimulationConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => SimulationConfig::default(),
    };

    let entropy: u64 = if randomize { rand::random() } else { 0 };
    if let (true, Pattern::Random { seed, .. }) = (randomize, &mut config.seed.pattern) {
        *seed = entropy;
    }

    if let Err(e) = run(&config, entropy) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &SimulationConfig, entropy: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = GridEngine::new(config.width, config.height)?;
    config.seed.apply(&mut engine)?;

    let mut rng = StdRng::seed_from_u64(entropy);
    let stdout = io::stdout();
    let delay = Duration::from_millis(config.frame_delay_ms);
    let start = Instant::now();

    log::info!(
        "Running {}x{} grid for {} generations",
        config.width,
        config.height,
        config.max_generations
    );

    while engine.generation() < config.max_generations {
        {
            let mut out = stdout.lock();
            write!(out, "{CLEAR_SCREEN}")?;
            render(&engine, &mut out)?;
            out.flush()?;
        }

        engine.step();

        if config.mutation_interval > 0 && engine.generation() % config.mutation_interval == 0 {
            let x = rng.gen_range(0..engine.width());
            let y = rng.gen_range(0..engine.height());
            engine.toggle_cell(x, y)?;
            log::debug!("Generation {}: toggled ({x}, {y})", engine.generation());
        }

        thread::sleep(delay);
    }

    let stats = GridStats::from_engine(&engine);
    let elapsed = start.elapsed();

    println!();
    println!("Final state:");
    println!("  Generation: {}", stats.generation);
    println!(
        "  Population: {} ({:.1}%)",
        stats.population,
        stats.density() * 100.0
    );
    println!("Time: {:.2}s", elapsed.as_secs_f32());

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [config.json] [--random] [--example]");
    eprintln!();
    eprintln!("Run Conway's Game of Life on a toroidal grid in the terminal.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to simulation configuration file (default: built-in demo)");
    eprintln!("  --random     Reseed random patterns and mutations from system entropy");
    eprintln!("  --example    Print the default configuration and exit");
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing config: {e}"),
    }
}
