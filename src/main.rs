//! CLI entry point for slate

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slate")]
#[command(version)]
#[command(about = "Build a static site from Markdown content", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the site layout with starter content and templates
    Init {
        /// Directory to initialize (defaults to the site directory)
        folder: Option<PathBuf>,
    },

    /// Generate the site into the public directory
    #[command(alias = "generate", alias = "g")]
    Build,

    /// Serve the public directory for local preview
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port, 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems and --help both end here without a failure status
            e.print().ok();
            return Ok(());
        }
    };

    // Initialize logging
    let filter = if cli.debug {
        "slate=debug,tower_http=debug,info"
    } else {
        "slate=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Init { folder } => {
            let target_dir = match folder {
                Some(folder) if folder.is_absolute() => folder,
                Some(folder) => base_dir.join(folder),
                None => base_dir,
            };
            let slate = slate::Slate::new(&target_dir)?;
            tracing::info!("Initializing site in {:?}", target_dir);
            let report = slate.init()?;
            println!(
                "\nProject initialized ({} created, {} skipped)! Run `slate build` to generate your site.",
                report.created.len(),
                report.skipped.len()
            );
        }

        Commands::Build => {
            let slate = slate::Slate::new(&base_dir)?;
            tracing::info!("Building site in {:?}", base_dir);
            match slate.build() {
                Ok(report) => println!("Built {} files.", report.written.len()),
                Err(e) => {
                    eprintln!("Error: {:#}", anyhow::Error::from(e));
                    std::process::exit(1);
                }
            }
        }

        Commands::Serve { port, ip } => {
            let slate = slate::Slate::new(&base_dir)?;
            let port = port.unwrap_or(slate.config.server.port);
            let ip = ip.unwrap_or_else(|| slate.config.server.ip.clone());
            if let Err(e) = slate::server::start(&slate, &ip, port).await {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
