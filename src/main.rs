//! CLI entry point for postshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postshelf")]
#[command(version)]
#[command(about = "Load a directory of front-matter posts into an ordered catalog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post
    Show {
        /// Slug of the post (file name without extension)
        slug: String,

        /// Render the body from Markdown to HTML
        #[arg(long)]
        html: bool,

        /// Use typographic quotes and dashes in rendered HTML
        #[arg(long, requires = "html")]
        smart: bool,
    },

    /// List the posts in a category
    Category {
        /// Category name (case-sensitive)
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postshelf=debug,info"
    } else {
        "postshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let shelf = postshelf::PostShelf::new(&base_dir)?;
    tracing::debug!("Content root: {:?}", shelf.loader().root());

    match cli.command {
        Commands::List { r#type } => {
            postshelf::commands::list::run(&shelf, &r#type, cli.json)?;
        }

        Commands::Show { slug, html, smart } => {
            let options = postshelf::commands::show::ShowOptions {
                html,
                smart,
                json: cli.json,
            };
            postshelf::commands::show::run(&shelf, &slug, options)?;
        }

        Commands::Category { name } => {
            postshelf::commands::category::run(&shelf, &name, cli.json)?;
        }
    }

    Ok(())
}
