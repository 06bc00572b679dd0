//! sacred-plates - render sacred-geometry plates from the command line
//!
//! Usage:
//!   sacred-plates plates                         List catalog plates
//!   sacred-plates render <slug> [--variant full] Render one plate as SVG
//!   sacred-plates lineset <slug>                 Export a plate's 3-D curves as JSON
//!   sacred-plates sheet -o plates.svg            Contact sheet of every plate

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sacred_plates::PlateVariant;

mod cli;

/// Deterministic sacred-geometry plates
#[derive(Parser)]
#[command(name = "sacred-plates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// YAML file overriding canonical size and variant profiles
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the plates in the catalog
    Plates {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one plate as an SVG document
    Render {
        /// Plate slug (see `plates`)
        slug: String,

        /// Rendering profile: thumbnail or full
        #[arg(long = "variant", default_value = "thumbnail", value_parser = parse_variant)]
        variant: PlateVariant,

        /// Output SVG file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Also rasterize to this PNG file
        #[arg(long)]
        png: Option<String>,

        /// PNG scale factor
        #[arg(long, default_value = "2.0")]
        png_scale: f32,
    },

    /// Export a plate as 3-D polylines (JSON)
    Lineset {
        /// Plate slug (see `plates`)
        slug: String,

        /// Profile whose detail drives circle resolution
        #[arg(long = "variant", default_value = "full", value_parser = parse_variant)]
        variant: PlateVariant,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Lay every catalog plate out on one contact sheet
    Sheet {
        /// Output SVG file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Plates per row
        #[arg(long, default_value = "4")]
        columns: usize,

        /// Also rasterize to this PNG file
        #[arg(long)]
        png: Option<String>,

        /// PNG scale factor
        #[arg(long, default_value = "1.0")]
        png_scale: f32,
    },
}

fn parse_variant(name: &str) -> Result<PlateVariant, String> {
    PlateVariant::from_name(name).ok_or_else(|| format!("unknown variant '{}' (expected thumbnail or full)", name))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for documents
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli::common::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Plates { json } => cli::plates::run(json)?,

        Commands::Render {
            slug,
            variant,
            output,
            png,
            png_scale,
        } => {
            cli::render::run(&config, &slug, variant, output.as_deref(), png.as_deref(), png_scale)?;
        }

        Commands::Lineset {
            slug,
            variant,
            output,
            pretty,
        } => {
            cli::lineset::run(&config, &slug, variant, output.as_deref(), pretty)?;
        }

        Commands::Sheet {
            output,
            columns,
            png,
            png_scale,
        } => {
            cli::sheet::run(&config, output.as_deref(), columns, png.as_deref(), png_scale)?;
        }
    }

    Ok(())
}
