//! Folio CLI
//!
//! Command-line interface for Folio:
//! - Prerender the portfolio to a static HTML page
//! - Check that a portfolio document loads
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use folio::config::{generate_default_config, Config};
use folio::loader;
use folio::render;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render a personal portfolio from a JSON document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page to a static HTML file
    Render {
        /// Portfolio document, path or http(s) URL (default: from config)
        #[arg(short, long)]
        data: Option<String>,
        /// Output file (default: from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Year for the copyright line (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Load a document and print a summary
    Check {
        /// Portfolio document, path or http(s) URL (default: from config)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    folio::logging::init_tracing(&config.logging);

    match cli.command {
        Commands::Render { data, out, year } => {
            let location = data.unwrap_or_else(|| config.site.data.clone());
            let out = out.unwrap_or_else(|| PathBuf::from(&config.site.output));

            let source = loader::source_for(&location);
            let doc = match loader::load(source.as_ref()).await {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::error!("{}", e.report());
                    std::process::exit(1);
                }
            };

            let year = year.unwrap_or_else(render::current_year);
            let page = render::prerender(&doc, &config.layout, year)
                .context("Page layout does not match the renderer")?;

            std::fs::write(&out, page.to_html())
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Rendered {} to {}", location, out.display());
        }

        Commands::Check { data } => {
            let location = data.unwrap_or_else(|| config.site.data.clone());
            let source = loader::source_for(&location);

            match loader::load(source.as_ref()).await {
                Ok(doc) => {
                    println!("{}", doc.title);
                    println!("  Last updated: {}", doc.last_updated);
                    println!("  Paragraphs:   {}", doc.paragraphs().count());
                    println!(
                        "  Skills:       {}",
                        doc.skills.frameworks_libraries.len()
                            + doc.skills.tools_ides.len()
                            + doc.skills.languages.len()
                            + doc.skills.infrastructure_databases.len()
                    );
                    println!("  Experience:   {}", doc.experience.len());
                    println!("  Projects:     {}", doc.projects.len());
                    println!("  Education:    {}", doc.education.len());
                }
                Err(e) => {
                    eprintln!("{}: {}", location, e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
