use clap::{Parser, Subcommand};
use restcheck_server::{api, webserver};
use tracing::Level;

#[derive(Parser)]
#[command(name = "restcheck")]
#[command(about = "Profile REST conformance fixture", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the fixture server")]
    Start {
        #[arg(long, value_name = "HOSTNAME")]
        hostname: Option<String>,

        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        #[arg(long, help = "Serve the controller-stub fixture instead of the round-trip one")]
        stub: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            hostname,
            port,
            stub,
        } => {
            println!("Starting restcheck...");

            // Set up tracing
            let collector = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .finish();
            tracing::subscriber::set_global_default(collector)
                .expect("There was a problem setting up tracing");

            // Set up default server hostname/port
            let http_host = hostname.unwrap_or("0.0.0.0".to_string());
            let http_port = port.unwrap_or(8080);

            // Create tokio async runtime
            let rt = tokio::runtime::Runtime::new()?;

            let app = if stub {
                api::controller_stub_router()
            } else {
                api::round_trip_router()
            };

            // Fire up the web server for the fixture
            let webserver_handler = rt.spawn(async move {
                let http_addr = format!("{}:{}", http_host, http_port);
                webserver::start_webserver(http_addr, app).await
            });

            println!("\nrestcheck started successfully! (Press Ctrl+C to exit)");

            rt.block_on(async move {
                tokio::signal::ctrl_c().await?;
                webserver_handler.abort();
                Ok::<(), anyhow::Error>(())
            })?;
        }
    }

    Ok(())
}
