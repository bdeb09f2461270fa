use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chart_gallery::config::{
    DEFAULT_HOST, DEFAULT_JSON_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PLOTLY_URL, DEFAULT_PORT,
};
use chart_gallery::{
    serve, ConvertConfig, Converter, FileOutcome, Gallery, GalleryApp, GalleryError,
    NamingScheme, RenderSettings, ServerConfig,
};

#[derive(Parser)]
#[command(name = "chart-gallery")]
#[command(author, version, about = "Browse and convert exported Plotly charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a gallery of every chart under the JSON directory
    Serve {
        /// Directory scanned (recursively) for chart JSON files
        #[arg(long, env = "CHART_GALLERY_JSON_DIR", default_value = DEFAULT_JSON_DIR)]
        json_dir: PathBuf,

        /// Address to bind
        #[arg(long, env = "CHART_GALLERY_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "CHART_GALLERY_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Charting library script URL
        #[arg(long, env = "CHART_GALLERY_PLOTLY_URL", default_value = DEFAULT_PLOTLY_URL)]
        plotly_url: String,
    },

    /// Convert every chart JSON file into a standalone HTML file
    Convert {
        /// Input directory
        #[arg(short, long, default_value = DEFAULT_JSON_DIR)]
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// How output files are named
        #[arg(long, value_enum, default_value_t = NamingScheme::Title)]
        naming: NamingScheme,

        /// Charting library script URL
        #[arg(long, default_value = DEFAULT_PLOTLY_URL)]
        plotly_url: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { json_dir, host, port, plotly_url } => {
            let config = ServerConfig {
                json_dir,
                host,
                port,
                render: RenderSettings {
                    plotly_url,
                    ..RenderSettings::default()
                },
            };
            run_server(config)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Convert { input, output, naming, plotly_url } => {
            let config = ConvertConfig { input, output, naming, plotly_url };
            run_convert(config)
        }
    }
}

fn run_server(config: ServerConfig) -> Result<()> {
    let gallery = Gallery::load(&config.json_dir);
    let addr = config.addr();
    let app = GalleryApp::new(gallery, config.render);

    serve(&app, &addr).with_context(|| format!("serving gallery on {}", addr))?;
    Ok(())
}

fn run_convert(config: ConvertConfig) -> Result<ExitCode> {
    let converter = Converter::new(config);

    let files = match converter.discover() {
        Ok(files) => files,
        Err(e @ GalleryError::MissingDirectory { .. }) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("scanning input directory"),
    };

    let input = &converter.config().input;
    let output = &converter.config().output;

    if files.is_empty() {
        std::fs::create_dir_all(output)
            .with_context(|| format!("creating {}", output.display()))?;
        println!("No JSON files found in '{}' directory", input.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} JSON file(s) to convert", files.len());

    let summary = converter
        .run(&files, |outcome| match outcome {
            FileOutcome::Converted { source, output } => {
                println!(
                    "Converted {} -> {}",
                    display_relative(source, input),
                    display_relative(output, &converter.config().output)
                );
            }
            FileOutcome::Failed { source, error } => {
                eprintln!("Failed to convert {}: {}", display_relative(source, input), error);
            }
        })
        .with_context(|| format!("writing to {}", output.display()))?;

    for path in &summary.overwritten {
        eprintln!(
            "Warning: {} was written by more than one chart",
            display_relative(path, output)
        );
    }
    println!("{}", summary.summary_line());
    Ok(ExitCode::SUCCESS)
}

fn display_relative(path: &std::path::Path, root: &std::path::Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
