//! autotrain-client: create AutoTrain projects from the command line.
//!
//! The crate validates project parameters locally (task, language, hub model,
//! per-job parameters), derives the implicit fields the backend expects, and
//! submits a single project-creation request.
//!
//! # Modules
//!
//! - [`project`]: Request validation, field derivation and submission
//! - [`http`]: Blocking transport for the AutoTrain backend
//! - [`auth`]: Token and username resolution
//! - [`params`]: Job-parameter loading from files and `key=value` pairs
//! - [`tasks`], [`languages`]: Lookup tables
//! - [`error`]: Error types for autotrain-client operations

pub mod auth;
pub mod error;
pub mod http;
pub mod languages;
pub mod logging;
pub mod params;
pub mod project;
pub mod tasks;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

pub use error::AutotrainError;
pub use project::{Project, ProjectRequest};

/// The autotrain CLI application.
#[derive(Parser)]
#[command(name = "autotrain")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Manage AutoTrain projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// List task names accepted by the backend.
    Tasks,
    /// List supported language tags.
    Languages,
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Validate and submit a new project.
    Create(ProjectArgs),
    /// Validate a project and print the payload without sending it.
    Payload(ProjectArgs),
}

/// Arguments shared by the project subcommands.
#[derive(clap::Args)]
struct ProjectArgs {
    /// Project name.
    #[arg(long)]
    name: String,

    /// Task name (see 'autotrain tasks').
    #[arg(long)]
    task: String,

    /// Existing Hub model to train from instead of automatic model selection.
    #[arg(long)]
    hub_model: Option<String>,

    /// JSON or YAML file holding one job-parameter mapping or a list of them.
    #[arg(long, conflicts_with = "param")]
    params: Option<PathBuf>,

    /// A single job parameter as key=value (repeatable).
    #[arg(long = "param", value_name = "KEY=VALUE")]
    param: Vec<String>,

    /// Hugging Face token. Falls back to the cached `huggingface-cli login` token.
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Project owner. Looked up from the token when omitted.
    #[arg(long)]
    username: Option<String>,

    /// AutoTrain backend base URL.
    #[arg(long, env = "AUTOTRAIN_BACKEND_API", default_value = http::DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds.
    #[arg(long, env = "AUTOTRAIN_TIMEOUT_SECS", default_value_t = http::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Hugging Face Hub endpoint used to look up the username.
    #[arg(long, env = "HF_ENDPOINT", default_value = auth::DEFAULT_HUB_ENDPOINT)]
    hub_endpoint: String,
}

/// Run the autotrain CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), AutotrainError> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Project { action }) => match action {
            ProjectCommands::Create(args) => run_create(args),
            ProjectCommands::Payload(args) => run_payload(args),
        },
        Some(Commands::Tasks) => {
            for (name, id) in tasks::TASKS {
                println!("{name}\t{id}");
            }
            Ok(())
        }
        Some(Commands::Languages) => {
            println!("{}", languages::UNKNOWN_LANGUAGE);
            for tag in languages::BASE_LANGUAGES {
                println!("{tag}");
            }
            println!();
            println!("Translation pairs are written <target>2<source>, e.g. fr2en.");
            Ok(())
        }
        None => {
            println!("autotrain {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Create AutoTrain projects from the command line.");
            println!();
            println!("Run 'autotrain --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute `project create`.
fn run_create(args: ProjectArgs) -> Result<(), AutotrainError> {
    let config = http::BackendConfig {
        api_base: args.api_base.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    };
    let project = build_project(args)?;
    let client = http::BackendClient::new(config);

    let name = project.create(&client)?;
    println!("Created project {name}");
    Ok(())
}

/// Execute `project payload`.
fn run_payload(args: ProjectArgs) -> Result<(), AutotrainError> {
    let payload = build_project(args)?.payload()?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Resolve credentials and job parameters, then validate the project.
fn build_project(args: ProjectArgs) -> Result<Project, AutotrainError> {
    let job_params = match (&args.params, args.param.is_empty()) {
        (Some(path), _) => params::read_job_params(path)?,
        (None, false) => vec![params::params_from_pairs(&args.param)?],
        (None, true) => Vec::new(),
    };

    let token = auth::resolve_token(args.token.as_deref());
    let hub_endpoint = args.hub_endpoint;
    let explicit_username = args.username;

    let project = Project::new(ProjectRequest {
        token,
        name: args.name,
        username: explicit_username.clone().unwrap_or_default(),
        task: args.task,
        hub_model: args.hub_model,
        job_params,
    })?;
    // Local checks run before the username lookup touches the network.
    project.payload()?;

    match explicit_username {
        Some(_) => Ok(project),
        None => {
            let username = auth::whoami(&hub_endpoint, project.token())?;
            Ok(project.with_username(username))
        }
    }
}
