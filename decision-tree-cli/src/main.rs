//! decision-tree binary: walk a decision graph interactively, or validate a graph document.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use decision_tree_cli::{init_logging, load_config, run, validate, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "decision-tree")]
#[command(about = "Step through a decision graph: choose options, go back, jump to breadcrumbs, restart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session.
    Run(RunArgs),
    /// Check a graph document and print a report.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Graph document (JSON). Defaults to DECISION_TREE_GRAPH.
    #[arg(short, long, value_name = "PATH")]
    graph: Option<PathBuf>,

    /// Accept options that point at unknown nodes.
    #[arg(long)]
    allow_dangling: bool,

    /// Show debug logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    graph: GraphArgs,

    /// Start node id, instead of the document's start.
    #[arg(long, value_name = "ID")]
    start: Option<String>,

    /// Number of breadcrumbs shown.
    #[arg(long, value_name = "N")]
    window: Option<usize>,

    /// Maximum history length (for graphs with cycles).
    #[arg(long, value_name = "N")]
    max_history: Option<usize>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    graph: GraphArgs,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn graph_options(args: &GraphArgs) -> RunOptions {
    RunOptions {
        graph: args.graph.clone(),
        allow_dangling: args.allow_dangling,
        verbose: args.verbose,
        ..Default::default()
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => {
            let options = RunOptions {
                start: args.start,
                breadcrumb_window: args.window,
                max_history: args.max_history,
                ..graph_options(&args.graph)
            };
            init_logging(options.verbose);
            run(&options).await
        }
        Commands::Validate(args) => {
            let options = graph_options(&args.graph);
            init_logging(options.verbose);
            validate_and_print(&options, args.json).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn validate_and_print(options: &RunOptions, json: bool) -> Result<(), decision_tree_cli::Error> {
    let config = load_config(options)?;
    let report = validate(&config).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.write_text(&mut std::io::stdout())?;
    }
    Ok(())
}
