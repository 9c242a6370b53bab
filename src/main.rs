//! pathparams CLI entrypoint
//! Loads an OpenAPI document, binds the path parameters section to a path
//! item or operation, and lists parameters or emits edit commands.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

// Internal imports
use pathparams::commands::{CommandDispatcher, JsonLinesDispatcher};
use pathparams::core::StudioConfig;
use pathparams::infrastructure::{CompositeOpenApiLoader, HttpMethod, OpenApiLoader, PathItemView};
use pathparams::model::{
    Node, Parameter, ParameterParent, SimplifiedParameterType, SimplifiedType, TypeKind,
};
use pathparams::section::{DisplayParameter, PathParamsSection};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathparams")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Document id stamped on emitted commands
    #[arg(long, global = true)]
    document_id: Option<String>,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct Target {
    /// Path or URL to OpenAPI document (YAML or JSON)
    #[arg(long)]
    spec: String,
    /// Path template of the path item, e.g. /users/{id}
    #[arg(long)]
    path: String,
    /// Operation owning the parameters; the path item itself when omitted
    #[arg(long)]
    method: Option<HttpMethod>,
    /// Bind the path item even when the config names a default method
    #[arg(long, conflicts_with = "method")]
    path_item: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List detected and declared path parameters
    List {
        #[command(flatten)]
        target: Target,
    },
    /// Declare a path parameter
    Create {
        #[command(flatten)]
        target: Target,
        /// Parameter name
        name: String,
    },
    /// Delete a declared path parameter
    Delete {
        #[command(flatten)]
        target: Target,
        /// Parameter name
        name: String,
    },
    /// Change the description of a declared path parameter
    Describe {
        #[command(flatten)]
        target: Target,
        /// Parameter name
        name: String,
        /// New description
        description: String,
    },
    /// Change the type of a declared path parameter
    Retype {
        #[command(flatten)]
        target: Target,
        /// Parameter name
        name: String,
        /// Primitive type (string, integer, number, boolean)
        #[arg(long = "type")]
        kind: TypeKind,
        /// Format, e.g. int64 or uuid
        #[arg(long)]
        format: Option<String>,
        /// Make the parameter an array of the given type
        #[arg(long)]
        array: bool,
    },
}

impl Commands {
    fn target(&self) -> &Target {
        match self {
            Commands::List { target }
            | Commands::Create { target, .. }
            | Commands::Delete { target, .. }
            | Commands::Describe { target, .. }
            | Commands::Retype { target, .. } => target,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let target = cli.command.target();

    let file_config = match &cli.config {
        Some(path) => StudioConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StudioConfig::default(),
    };
    let mut config =
        file_config.merge_overrides(cli.document_id.as_deref(), cli.pretty, target.method);
    if target.path_item {
        config.default_method = None;
    }

    let loader = CompositeOpenApiLoader::new()?;
    let mut document = loader
        .load(&target.spec)
        .await
        .with_context(|| format!("Failed to load OpenAPI document {}", target.spec))?;
    if let Some(id) = config.document_id() {
        document = document.with_id(id);
    }
    info!("Loaded document {} from {}", document.id, target.spec);

    let item = document
        .path_item(&target.path)
        .with_context(|| format!("Path '{}' not found in document", target.path))?;

    let dispatcher: Arc<dyn CommandDispatcher> =
        Arc::new(JsonLinesDispatcher::new(std::io::stdout()).pretty(config.pretty));

    match config.default_method {
        Some(method) => {
            let operation = item
                .operation(method)
                .with_context(|| format!("No {method} operation on '{}'", target.path))?;
            run(&cli.command, &operation, &item, dispatcher, config.pretty)
        }
        None => run(&cli.command, &item, &item, dispatcher, config.pretty),
    }
}

fn run<P: ParameterParent>(
    command: &Commands,
    parent: &P,
    path: &PathItemView<'_>,
    dispatcher: Arc<dyn CommandDispatcher>,
    pretty: bool,
) -> anyhow::Result<()> {
    let section = PathParamsSection::new(parent, path, dispatcher);
    debug!(
        "Bound section to {} ({})",
        parent.node_path(),
        if section.is_path_item() {
            "path item"
        } else {
            "operation"
        }
    );

    match command {
        Commands::List { .. } => {
            if !section.can_have_path_params() {
                info!("Path template has no parameters");
            }
            for param in section.path_parameters() {
                print_listing(&param, pretty)?;
            }
        }
        Commands::Create { name, .. } => section.create_path_param(name)?,
        Commands::Delete { name, .. } => {
            let param = section.path_param(name);
            let declared = declared_or_bail(&param, name)?;
            section.delete_param(declared)?;
        }
        Commands::Describe {
            name, description, ..
        } => {
            let param = section.path_param(name);
            let declared = declared_or_bail(&param, name)?;
            section.change_param_description(declared, description)?;
        }
        Commands::Retype {
            name,
            kind,
            format,
            array,
            ..
        } => {
            let param = section.path_param(name);
            let declared = declared_or_bail(&param, name)?;

            let mut simple = SimplifiedType::of_kind(*kind);
            simple.format = format.clone();
            if *array {
                simple = SimplifiedType::array_of(simple);
            }
            // Path parameters are always required
            let new_type = SimplifiedParameterType::new(simple, Some(true));
            section.change_param_type(declared, new_type)?;
        }
    }
    Ok(())
}

fn declared_or_bail<'a>(
    param: &DisplayParameter<'a>,
    name: &str,
) -> anyhow::Result<&'a Parameter> {
    param
        .declared()
        .with_context(|| format!("Path parameter '{name}' is not declared"))
}

fn print_listing(param: &DisplayParameter<'_>, pretty: bool) -> anyhow::Result<()> {
    let parameter = param.parameter();
    let listing = serde_json::json!({
        "name": parameter.name,
        "required": parameter.required,
        "missing": param.is_missing(),
        "description": parameter.description,
        "type": param.simplified_type().simple_type.to_string(),
        "nodePath": parameter.node_path.as_ref().map(ToString::to_string),
    });
    let line = if pretty {
        serde_json::to_string_pretty(&listing)?
    } else {
        serde_json::to_string(&listing)?
    };
    println!("{line}");
    Ok(())
}
