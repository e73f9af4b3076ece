use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use logoforge::generator::{demo_composition, demo_palettes, demo_patterns, demo_templates};
use logoforge::{LogoConfig, LogoGenerator, Result, random_config};

/// logoforge - procedural logo generator
#[derive(Parser, Debug)]
#[command(name = "logoforge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible output; drawn from the OS when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(long, global = true, default_value_t = 500)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, global = true, default_value_t = 500)]
    height: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one random logo and save its config next to it
    Random {
        #[arg(short, long, default_value = "random_logo.png")]
        output: PathBuf,

        /// Where to write the config used
        #[arg(long, default_value = "random_logo_config.json")]
        config_out: PathBuf,
    },

    /// Render several random logos into a directory
    Batch {
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        #[arg(short, long, default_value = "logos")]
        dir: PathBuf,

        #[arg(long, default_value = "logo")]
        prefix: String,
    },

    /// Render jittered copies of a saved config
    Variations {
        config: PathBuf,

        #[arg(short, long, default_value_t = 5)]
        count: usize,

        #[arg(short, long, default_value = "variations")]
        dir: PathBuf,
    },

    /// Render one config at several sizes (random config when none is given)
    Sizes {
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "sizes")]
        dir: PathBuf,

        /// Size as WIDTHxHEIGHT; repeatable. Defaults to 64 to 1024 squares
        #[arg(long = "size", value_parser = parse_size)]
        sizes: Vec<(u32, u32)>,
    },

    /// Render a saved config
    Render {
        config: PathBuf,

        #[arg(short, long, default_value = "loaded_logo.png")]
        output: PathBuf,
    },

    /// Render the catalog previews
    Demo {
        #[arg(value_enum, default_value_t = DemoKind::All)]
        kind: DemoKind,

        /// Parent directory for the demo folders
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Render the layered composition example
    Compose {
        #[arg(short, long, default_value = "composed_logo.png")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DemoKind {
    Templates,
    Patterns,
    Palettes,
    All,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "logoforge failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = LogoGenerator::new(cli.width, cli.height);

    match cli.command {
        Commands::Random { output, config_out } => {
            let logo = generator.generate(None, &mut rng)?;
            logo.save(&output)?;
            logo.config.save(&config_out)?;
        }
        Commands::Batch { count, dir, prefix } => {
            generator.batch_generate(count, &dir, &prefix, &mut rng)?;
        }
        Commands::Variations { config, count, dir } => {
            let base = LogoConfig::load(&config)?;
            generator.generate_variations(&base, count, &dir, &mut rng)?;
        }
        Commands::Sizes { config, dir, sizes } => {
            let config = match config {
                Some(path) => LogoConfig::load(&path)?,
                None => random_config(&mut rng),
            };
            let sizes = (!sizes.is_empty()).then_some(sizes.as_slice());
            LogoGenerator::generate_size_variants(&config, sizes, &dir, &mut rng)?;
        }
        Commands::Render { config, output } => {
            let config = LogoConfig::load(&config)?;
            generator.render(&config, &mut rng)?.save(&output)?;
        }
        Commands::Demo { kind, dir } => {
            if matches!(kind, DemoKind::Templates | DemoKind::All) {
                demo_templates(&dir.join("demo_templates"), &mut rng)?;
            }
            if matches!(kind, DemoKind::Patterns | DemoKind::All) {
                demo_patterns(&dir.join("demo_patterns"))?;
            }
            if matches!(kind, DemoKind::Palettes | DemoKind::All) {
                demo_palettes(&dir.join("demo_palettes"), &mut rng)?;
            }
        }
        Commands::Compose { output } => {
            demo_composition(&mut rng)?.save(&output)?;
        }
    }
    Ok(())
}

/// Parses `WIDTHxHEIGHT`, e.g. `256x128`.
fn parse_size(value: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid dimension '{part}': {err}"))
    };
    Ok((parse(w)?, parse(h)?))
}
