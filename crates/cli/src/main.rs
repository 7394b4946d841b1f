use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookshelf", about = "Books and users JSON service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to listen on, overriding configuration
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the route modules that would be mounted
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry)?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            bookshelf_app::run(settings).await
        }
        Command::Routes => {
            let registry = bookshelf_app::routes::discover();
            for mounted in registry.modules() {
                println!("/{}\t{}", mounted.prefix, mounted.source);
            }
            for warning in registry.warnings() {
                eprintln!("{}", warning);
            }
            Ok(())
        }
    }
}
