//! ldp-project: command-line front end for the LDP projection engine
//!
//! Loads a YAML repository fixture into an in-memory store and prints the
//! triples the engine produces for it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use ldp_projection::messaging::{DefaultMessageFactory, HeaderValue, MessageFactory};
use ldp_projection::{
    schema_triples, EventCoalescer, HttpIdentifierTranslator, ProjectionConfig, Projector, RawEvent,
    RdfContext, RepositoryFixture, TripleStream,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ldp-project", version, about = "Project repository fixtures into LDP triples")]
struct Cli {
    /// Projection config (YAML)
    #[arg(long, global = true, env = "LDP_PROJECTION_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the triples describing one node
    Describe {
        /// Repository fixture (YAML)
        #[arg(long)]
        fixture: PathBuf,

        /// Store path of the node
        #[arg(long, default_value = "/")]
        path: String,

        /// Comma-separated projection strategies, all by default
        #[arg(long, value_delimiter = ',')]
        contexts: Vec<RdfContext>,
    },
    /// Print the RDFS description of the fixture's node types
    Schema {
        /// Repository fixture (YAML)
        #[arg(long)]
        fixture: PathBuf,
    },
    /// Coalesce raw change events and print their message headers
    Events {
        /// List of raw events (YAML)
        #[arg(long)]
        file: PathBuf,

        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        init_tracing(&config);
        match cli.command {
            Commands::Describe {
                fixture,
                path,
                contexts,
            } => run_describe(&config, &fixture, &path, &contexts),
            Commands::Schema { fixture } => run_schema(&config, &fixture),
            Commands::Events { file, format } => run_events(&file, &format),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<ProjectionConfig> {
    match path {
        Some(path) => ProjectionConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ProjectionConfig::default()),
    }
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(config: &ProjectionConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_describe(config: &ProjectionConfig, fixture: &Path, path: &str, contexts: &[RdfContext]) -> Result<()> {
    let store = RepositoryFixture::from_yaml_file(fixture)
        .and_then(|f| f.build())
        .with_context(|| format!("loading fixture {}", fixture.display()))?;
    let translator = HttpIdentifierTranslator::from_config(config);
    let namespaces = config.namespace_registry();
    let projector = Projector::new(&store, &translator, &namespaces).with_hash_segment(&config.hash_segment);

    let contexts = if contexts.is_empty() {
        RdfContext::ALL.to_vec()
    } else {
        contexts.to_vec()
    };
    let stream = projector.describe_path(path, &contexts);
    if let Some(topic) = stream.topic() {
        println!("# {}", topic);
    }
    print_triples(stream)
}

fn run_schema(config: &ProjectionConfig, fixture: &Path) -> Result<()> {
    let store = RepositoryFixture::from_yaml_file(fixture)
        .and_then(|f| f.build())
        .with_context(|| format!("loading fixture {}", fixture.display()))?;
    let namespaces = config.namespace_registry();
    print_triples(schema_triples(&store, &namespaces))
}

fn print_triples(stream: TripleStream<'_>) -> Result<()> {
    let mut count = 0;
    for triple in stream {
        println!("{}", triple.context("projection failed")?);
        count += 1;
    }
    tracing::info!("Printed {} triples", count);
    Ok(())
}

fn run_events(file: &Path, format: &OutputFormat) -> Result<()> {
    let text = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let raw: Vec<RawEvent> = serde_yaml::from_str(&text).context("parsing events")?;
    if raw.is_empty() {
        bail!("no events in {}", file.display());
    }

    let events = EventCoalescer::coalesce(&raw);
    let factory = DefaultMessageFactory;

    match format {
        OutputFormat::Json => {
            let messages: Vec<serde_json::Value> = events
                .iter()
                .map(|event| {
                    let headers = factory
                        .headers(event)
                        .into_iter()
                        .map(|(name, value)| {
                            let value = match value {
                                HeaderValue::Long(n) => serde_json::Value::from(n),
                                HeaderValue::String(s) => serde_json::Value::from(s),
                            };
                            (name, value)
                        })
                        .collect::<serde_json::Map<_, _>>();
                    serde_json::Value::Object(headers)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Path", "Header", "Value"]);
            for event in &events {
                for (name, value) in factory.headers(event) {
                    table.add_row(vec![event.path().to_string(), name, value.to_string()]);
                }
            }
            println!("{}", table);
            println!("{} event(s) from {} change(s)", events.len(), raw.len());
        }
    }
    Ok(())
}
