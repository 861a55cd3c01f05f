use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photolab::assets::{AssetLoader, ConfigSource};
use photolab::models::AppConfig;
use photolab::services::KernelLibrary;
use pixel_engine::{build_lut, contrast_ratio, relative_luminance, ColorProjections, Srgb};

#[derive(Parser)]
#[command(name = "photolab")]
#[command(about = "Color conversion, tone curves and convolution kernels for photo editing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported color space
    Convert {
        /// Color as #RRGGBB, #RGB or r,g,b
        color: String,
    },
    /// WCAG contrast ratio between two colors
    Contrast {
        /// First color
        a: String,
        /// Second color
        b: String,
    },
    /// Print the 256-entry lookup table of a two-point tone curve
    Curve {
        /// First control point input (defaults to config)
        #[arg(long)]
        input1: Option<u8>,

        /// First control point output
        #[arg(long)]
        output1: Option<u8>,

        /// Second control point input
        #[arg(long)]
        input2: Option<u8>,

        /// Second control point output
        #[arg(long)]
        output2: Option<u8>,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List available convolution kernels
    Kernels,
    /// Write the default config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photolab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Convert { color }) => run_convert_command(&color),
        Some(Commands::Contrast { a, b }) => run_contrast_command(&a, &b),
        Some(Commands::Curve {
            input1,
            output1,
            input2,
            output2,
            json,
        }) => run_curve_command(input1, output1, input2, output2, json),
        Some(Commands::Kernels) => {
            run_kernels_command();
            Ok(())
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config() -> (AssetLoader, AppConfig) {
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    (loader, config)
}

fn run_convert_command(color: &str) -> anyhow::Result<()> {
    let color: Srgb = color.parse()?;
    let projections = ColorProjections::of(color);

    let report = json!({
        "rgb": color,
        "hex": color.to_string(),
        "xyz": projections.xyz,
        "lab": projections.lab,
        "lch": projections.lch,
        "oklch": projections.oklch,
        "luminance": relative_luminance(color),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_contrast_command(a: &str, b: &str) -> anyhow::Result<()> {
    let a: Srgb = a.parse()?;
    let b: Srgb = b.parse()?;
    println!("{:.3}", contrast_ratio(a, b));
    Ok(())
}

fn run_curve_command(
    input1: Option<u8>,
    output1: Option<u8>,
    input2: Option<u8>,
    output2: Option<u8>,
    as_json: bool,
) -> anyhow::Result<()> {
    let (_, config) = load_config();
    let defaults = config.curve;

    let lut = build_lut(
        input1.unwrap_or(defaults.input1),
        output1.unwrap_or(defaults.output1),
        input2.unwrap_or(defaults.input2),
        output2.unwrap_or(defaults.output2),
    )?;
    let bytes = lut.to_bytes();

    if as_json {
        println!("{}", serde_json::to_string(&bytes.to_vec())?);
        return Ok(());
    }

    for (row, chunk) in bytes.chunks(16).enumerate() {
        let values: Vec<String> = chunk.iter().map(|v| format!("{v:3}")).collect();
        println!("{:3}: {}", row * 16, values.join(" "));
    }
    Ok(())
}

fn run_kernels_command() {
    let (_, config) = load_config();
    let library = KernelLibrary::from_config(&config);

    println!("Kernels (max custom weight {}):\n", library.max_weight());
    for entry in library.entries() {
        let source = if entry.builtin { "built-in" } else { "config" };
        println!(
            "  {:<16} {n}x{n}  sum {:>6}  norm {:>6}  [{source}]",
            entry.name,
            entry.kernel.sum(),
            entry.kernel.normalization(),
            n = entry.kernel.size(),
        );
        if let Some(ref description) = entry.description {
            println!("  {:<16} {description}", "");
        }
    }
}

fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Photolab v{VERSION}");
    println!("Pixel transforms for photo editing\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("photolab=warn (default)")
    );

    let (loader, config) = load_config();
    let source = match (loader.config_source(), loader.config_file()) {
        (ConfigSource::Embedded, Some(_)) => "embedded (file not found)".to_string(),
        (source, _) => source.to_string(),
    };
    println!("\nConfig: {source}");

    let library = KernelLibrary::from_config(&config);
    let names: Vec<&str> = library.entries().iter().map(|e| e.name.as_str()).collect();
    println!("Kernels: {}", names.join(", "));

    println!("\nCommands:");
    println!("  photolab convert <COLOR>       Show a color in every color space");
    println!("  photolab contrast <A> <B>      WCAG contrast ratio");
    println!("  photolab curve --input1 ...    Tone curve lookup table");
    println!("  photolab kernels               List convolution kernels");
    println!("  photolab init                  Write the default config.yaml");
}
