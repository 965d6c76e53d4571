use crate::prelude::{eprintln, *};
use clap::Parser;
use docgen_core::config::{
    Config, RawInputs, API_ENDPOINT_VAR, API_KEY_VAR, MODEL_NAME_VAR, SOURCE_DIR_VAR,
};

mod ai;
mod error;
mod generate;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate markdown documentation for every Python file in a directory tree using a chat-completion endpoint"
)]
pub struct App {
    #[clap(flatten)]
    inputs: Inputs,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Inputs {
    /// Bearer token for the AI service
    #[clap(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Full URL of the chat-completion endpoint
    #[clap(long, env = API_ENDPOINT_VAR)]
    api_endpoint: Option<String>,

    /// Model identifier sent with every request
    #[clap(long, env = MODEL_NAME_VAR)]
    model_name: Option<String>,

    /// Root of the tree to scan (defaults to the current directory)
    #[clap(long, env = SOURCE_DIR_VAR)]
    source_dir: Option<String>,
}

impl From<Inputs> for RawInputs {
    fn from(inputs: Inputs) -> Self {
        RawInputs {
            api_key: inputs.api_key,
            api_endpoint: inputs.api_endpoint,
            model_name: inputs.model_name,
            source_dir: inputs.source_dir,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DOCGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    execute(App::parse()).await?;

    Ok(())
}

/// Validate the inputs, then document the source tree.
///
/// Nothing touches the filesystem or the network until the configuration
/// is complete.
async fn execute(app: App) -> Result<generate::RunSummary> {
    let config = Config::from_inputs(app.inputs.into())?;

    if app.global.verbose {
        eprintln!("API endpoint: {}", config.api_endpoint);
        eprintln!("Model: {}", config.model_name);
        eprintln!("Output directory: {}", config.output_dir.display());
        eprintln!();
    }

    let client = ai::AiClient::new(&config)?;
    generate::run(&config, &client).await
}
