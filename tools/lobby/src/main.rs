use anyhow::Result;
use clap::{Parser, Subcommand};
use lobby_client::{LobbyAction, LobbyClient, LobbyScreen, UserBadge};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lobby", about = "eCare client lobby helper")]
struct Cli {
    /// Base URL of the eCare server (e.g. http://localhost:8080/ecare)
    #[arg(long, env = "LOBBY_BASE_URL")]
    base_url: String,

    /// Username whose lobby data to fetch
    #[arg(long, env = "LOBBY_USER")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the user's contract list
    Contracts,
    /// Fetch the contract the user is signed into
    CurrentContract,
    /// Fetch the user's option list
    Options,
    /// Fetch the tariff catalog
    Tariffs,
    /// Refresh every lobby panel and print them all
    All {
        /// Print the panels as a JSON object keyed by panel name
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = LobbyClient::new(cli.base_url);

    match cli.command {
        Commands::Contracts => print_one(&client, &cli.user, LobbyAction::Contracts).await?,
        Commands::CurrentContract => {
            print_one(&client, &cli.user, LobbyAction::CurrentContract).await?
        }
        Commands::Options => print_one(&client, &cli.user, LobbyAction::Options).await?,
        Commands::Tariffs => print_one(&client, &cli.user, LobbyAction::Tariffs).await?,
        Commands::All { json } => {
            let screen = LobbyScreen::new(client, UserBadge::new(cli.user));
            screen.refresh_all().await?;
            info!("🏠 lobby refreshed");

            if json {
                let mut panels = serde_json::Map::new();
                for panel in screen.panels() {
                    panels.insert(panel.name().to_string(), panel.content().into());
                }
                let out = serde_json::Value::Object(panels);
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for panel in screen.panels() {
                    println!("== {} ==", panel.name());
                    println!("{}", panel.content());
                }
            }
        }
    }

    Ok(())
}

async fn print_one(client: &LobbyClient, user: &str, action: LobbyAction) -> Result<()> {
    let body = client.fetch(user, action).await?;
    println!("{body}");
    Ok(())
}
