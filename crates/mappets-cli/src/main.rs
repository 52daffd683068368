mod host;
mod submit;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mappets-cli")]
#[command(about = "Submit Mappets site forms from the terminal")]
struct Cli {
    /// Relay endpoint for this run, overriding `MAPPETS_RELAY_ENDPOINT`.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Request deletion of the personal data tied to an email address.
    Deletion {
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Send a support request about the iOS app.
    Support(SupportArgs),
    /// Ask for a commerce to be listed on the map.
    Commerce(CommerceArgs),
    /// Print the effective site configuration.
    Config,
}

#[derive(Debug, Args)]
struct SupportArgs {
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    reason: String,
    #[arg(long, default_value = "")]
    ios: String,
    #[arg(long, default_value = "")]
    app: String,
    #[arg(long, default_value = "")]
    device: String,
}

#[derive(Debug, Args)]
struct CommerceArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long = "type", default_value = "")]
    kind: String,
    #[arg(long, default_value = "")]
    contact: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    whatsapp: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    instagram: String,
    #[arg(long, default_value = "")]
    facebook: String,
    #[arg(long, default_value = "")]
    address: String,
    /// Google Maps link, for when no coordinate can be given.
    #[arg(long, default_value = "")]
    location_link: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    lat: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    lng: String,
    #[arg(long, default_value = "")]
    hours: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Accept the listing validation policy.
    #[arg(long)]
    accept_policy: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = mappets_core::load_site_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(endpoint) = cli.endpoint {
        config.relay_endpoint = endpoint;
    }

    match cli.command {
        Commands::Deletion { email } => submit::run_deletion(&config, &email).await,
        Commands::Support(args) => submit::run_support(&config, &args).await,
        Commands::Commerce(args) => submit::run_commerce(&config, &args).await,
        Commands::Config => {
            println!("{config:#?}");
            Ok(())
        }
    }
}
