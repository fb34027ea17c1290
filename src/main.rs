//! Command-line interface for the heatmapx binary.
//!
//! The CLI loads a node-link graph document, heats it from the requested
//! sources, and either prints the temperature graph as JSON or renders it as
//! a Graphviz heatmap.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use heatmapx::{
    Error, Graph, GraphDocument, HeatConfig, HeatJob, Increments, Orientation, Palette,
    load_config, load_graph, temperature_graph, to_dot, write_dot,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line interface for generating graph heatmaps.
#[derive(Debug, Parser,)]
#[command(name = "heatmapx", version, about = "Create heatmaps from graphs")]
struct Cli
{
    /// Emit debug diagnostics on stderr.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Compute temperatures and print the temperature graph as JSON.
    Heat(HeatArgs,),
    /// Compute temperatures and render them as a Graphviz DOT heatmap.
    Render(RenderArgs,),
}

/// Inputs shared by every command that heats a graph.
#[derive(Debug, Args,)]
struct HeatingArgs
{
    /// Path to the node-link graph document (YAML or JSON).
    #[arg(long = "graph", value_name = "PATH")]
    graph: PathBuf,

    /// Optional YAML heat configuration; flags override its values.
    #[arg(long = "config", value_name = "PATH", env = "HEATMAPX_CONFIG")]
    config: Option<PathBuf,>,

    /// Heat source node identifier. Repeat for several sources.
    ///
    /// Repeated identifiers are collapsed and heat the graph once. The
    /// library's `temperature_graph` heats a source once per occurrence.
    #[arg(long = "source", value_name = "ID")]
    sources: Vec<String,>,

    /// Number of breadth-first layers to heat.
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize,>,

    /// Constant increment (`2`) or per-layer increments (`3,2,1` or `[2]`).
    #[arg(long = "increments", value_name = "VALUES", value_parser = parse_increments)]
    increments: Option<Increments,>,

    /// Attribute scaling increments.
    #[arg(long = "weight", value_name = "ATTR")]
    weight: Option<String,>,

    /// Attribute receiving temperatures.
    #[arg(long = "key", value_name = "ATTR")]
    key: Option<String,>,

    /// Direction followed on directed graphs: original, reverse, or ignore.
    #[arg(long = "orientation", value_name = "MODE", value_parser = parse_value::<Orientation>)]
    orientation: Option<Orientation,>,
}

#[derive(Debug, Args,)]
struct HeatArgs
{
    #[command(flatten)]
    heating: HeatingArgs,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct RenderArgs
{
    #[command(flatten)]
    heating: HeatingArgs,

    /// Color palette: thermal, grayscale, or viridis.
    #[arg(long = "palette", value_name = "NAME", value_parser = parse_value::<Palette>)]
    palette: Option<Palette,>,

    /// File receiving the DOT document; printed to stdout when omitted.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

impl HeatingArgs
{
    fn overrides(&self,) -> HeatConfig
    {
        HeatConfig {
            sources:     self.sources.clone(),
            max_depth:   self.max_depth,
            increments:  self.increments.clone(),
            weight:      self.weight.clone(),
            key:         self.key.clone(),
            orientation: self.orientation,
            palette:     None,
        }
    }

    /// Loads the graph and resolves the heating job, then heats the graph.
    ///
    /// # Errors
    ///
    /// Propagates loading, validation, and heating errors.
    fn heat(&self, palette: Option<Palette,>,) -> Result<(Graph, HeatJob,), Error,>
    {
        let base = match self.config.as_deref() {
            Some(path,) => {
                debug!("loading heat configuration from {}", path.display());
                load_config(path,)?
            }
            None => HeatConfig::default(),
        };

        let mut overrides = self.overrides();
        overrides.palette = palette;
        let job = base.overridden_by(overrides,).resolve()?;
        if job.sources.is_empty() {
            warn!("no heat sources given; every temperature will be zero");
        }

        debug!("loading graph from {}", self.graph.display());
        let graph = load_graph(&self.graph,)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            sources = job.sources.len(),
            "heating graph"
        );

        let heated = temperature_graph(&graph, &job.sources, &job.options,)?;
        Ok((heated, job,),)
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    let cli = Cli::parse();
    init_tracing(cli.verbose,);

    if let Err(error,) = run(cli.command,) {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Installs a stderr subscriber honouring `RUST_LOG`.
fn init_tracing(verbose: bool,)
{
    let fallback = if verbose { "heatmapx=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback,),);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_writer(io::stderr,)
        .with_target(false,)
        .try_init();
}

/// Executes the parsed command.
///
/// # Errors
///
/// Propagates errors originating from loading, heating, and writing.
fn run(command: Command,) -> Result<(), Error,>
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match command {
        Command::Heat(args,) => run_heat(&args, &mut handle,),
        Command::Render(args,) => run_render(&args, &mut handle,),
    }
}

fn run_heat<W: Write,>(args: &HeatArgs, writer: &mut W,) -> Result<(), Error,>
{
    let (heated, _,) = args.heating.heat(None,)?;
    let document = GraphDocument::from_graph(&heated,);
    write_document(writer, &document, args.pretty,)
}

fn run_render<W: Write,>(args: &RenderArgs, writer: &mut W,) -> Result<(), Error,>
{
    let (heated, job,) = args.heating.heat(args.palette,)?;
    let key = job.options.key.as_str();

    match args.output.as_deref() {
        Some(path,) => {
            let written = write_dot(path, &heated, key, job.palette,)?;
            info!("heatmap written to {}", written.display());
            Ok((),)
        }
        None => {
            let dot = to_dot(&heated, key, job.palette,);
            writer.write_all(dot.as_bytes(),).map_err(|source| heatmapx::render_io_error(
                std::path::Path::new("<stdout>",),
                source,
            ),)
        }
    }
}

fn write_document<W: Write,>(
    writer: &mut W,
    document: &GraphDocument,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, document,)?;
    } else {
        serde_json::to_writer(writer, document,)?;
    }

    Ok((),)
}

/// Parses increments given as a number, a comma separated list, or a YAML
/// sequence.
fn parse_increments(raw: &str,) -> Result<Increments, String,>
{
    let trimmed = raw.trim();
    if trimmed.contains(',',) && !trimmed.starts_with('[',) {
        return parse_value(&format!("[{trimmed}]"),);
    }
    parse_value(trimmed,)
}

/// Parses a flag value with the same rules as configuration files.
fn parse_value<T: DeserializeOwned,>(raw: &str,) -> Result<T, String,>
{
    serde_yaml::from_str(raw.trim(),).map_err(|error| error.to_string(),)
}
