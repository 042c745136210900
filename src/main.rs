mod commands;

use clap::{Parser, Subcommand};
use commands::new_project::{self, CliNewOpts};

#[derive(Parser)]
#[command(name = "forge", version, about = "Backend Forge — scaffold Express + MongoDB backends")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new backend project
    New {
        /// Project name (prompted when omitted)
        name: Option<String>,
        /// Include JWT authentication (login/register)
        #[arg(long)]
        auth: bool,
        /// Include the Multer file upload route
        #[arg(long)]
        upload: bool,
        /// Use a .env file for the Mongo URI and configuration
        #[arg(long)]
        env: bool,
        /// MongoDB connection string written to .env (defaults to a local one)
        #[arg(long)]
        mongo_uri: Option<String>,
        /// Run `npm install` after scaffolding
        #[arg(long)]
        install: bool,
        /// Enable every feature toggle
        #[arg(long)]
        full: bool,
        /// Skip prompts and use flag values as-is
        #[arg(long)]
        no_interactive: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            name,
            auth,
            upload,
            env,
            mongo_uri,
            install,
            full,
            no_interactive,
        } => new_project::run(
            name.as_deref(),
            CliNewOpts {
                auth,
                upload,
                env,
                mongo_uri,
                install,
                full,
                no_interactive,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
