use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nxg_status::{
    Aggregator, ClientConfig, ClientProfile, DisplayModel, EndpointResult, EndpointSpec,
    HealthReport, HttpTransport, LoadResults, SystemStatus, WorkflowSummary,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nxg-status")]
#[command(about = "Show ZQAutoNXG backend status, health and workflows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides config file and NXG_API_URL)
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// YAML config file (replaces environment settings; NXG_API_* are ignored)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall system status
    Status {
        #[arg(short, long)]
        json: bool,
    },

    /// Show health with per-component status
    Health {
        #[arg(short, long)]
        json: bool,
    },

    /// List workflows
    Workflows {
        #[arg(short, long)]
        json: bool,
    },

    /// Load every panel of a dashboard, printing each as it resolves
    Dashboard {
        #[arg(short, long, default_value = "site")]
        profile: ClientProfile,

        #[arg(short, long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "nxg_status=debug"
    } else {
        "nxg_status=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::from_env(),
    };

    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }

    Ok(config)
}

fn print_status(status: &SystemStatus) {
    if !status.reachability.is_reachable() {
        println!("Connecting to backend...");
    }
    println!("Status: {} {}", status.level().icon(), status.status);
    println!("Version: {}", status.version);
    println!("Platform: {}", status.platform);
    println!("Architecture: {}", status.architecture_label());
}

fn print_health(report: &HealthReport) {
    println!("Overall: {} {}", report.level().icon(), report.status);
    println!("Platform: {}", report.platform);
    println!("Version: {}", report.version);
    if let Some(ts) = report.formatted_timestamp() {
        println!("Last Updated: {}", ts);
    }
    if let Some(message) = &report.message {
        println!("Message: {}", message);
    }

    let components = report.component_statuses();
    if !components.is_empty() {
        println!("Components:");
        for component in components {
            print!("  {} {}: {}", component.level.icon(), component.name, component.status);
            if let Some(message) = &component.message {
                print!(" ({})", message);
            }
            println!();
            if let Some(details) = &component.details {
                println!("    details: {}", details);
            }
        }
    }
}

fn print_workflows(workflows: &[WorkflowSummary]) {
    if workflows.is_empty() {
        println!("No workflows yet.");
        return;
    }

    println!("Workflows ({}):\n", workflows.len());
    for wf in workflows {
        println!("  {} [{}]", wf.name, wf.status);
        println!("    ID: {}", wf.id);
        if let Some(description) = &wf.description {
            println!("    Description: {}", description);
        }
        println!("    Nodes: {}  Edges: {}", wf.node_count, wf.edge_count);
    }
}

fn print_panel(endpoint: &EndpointSpec, result: &EndpointResult) {
    println!("== {} ({})", endpoint.id, endpoint.path);
    if let Some(err) = result.error() {
        println!("Unavailable: {}", err.reason());
    }

    match result.display(endpoint.kind) {
        DisplayModel::SystemStatus(status) => print_status(&status),
        DisplayModel::Health(report) => print_health(&report),
        // A failed listing is not an empty one
        DisplayModel::Workflows(_) if result.is_failed() => {}
        DisplayModel::Workflows(list) => print_workflows(&list),
    }
    println!();
}

fn result_json(endpoint: &EndpointSpec, result: &EndpointResult) -> serde_json::Value {
    json!({
        "id": endpoint.id,
        "path": endpoint.path,
        "state": result.state_label(),
        "reason": result.error().map(|e| e.reason()),
        "data": result.display(endpoint.kind),
    })
}

async fn cmd_single(
    aggregator: &Aggregator,
    endpoint: EndpointSpec,
    json_output: bool,
) -> anyhow::Result<bool> {
    let results: LoadResults = aggregator.load_all(std::slice::from_ref(&endpoint)).await;
    let result = results.get(&endpoint.id).cloned().unwrap_or_default();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&result_json(&endpoint, &result))?
        );
    } else {
        print_panel(&endpoint, &result);
    }

    Ok(!result.is_failed())
}

async fn cmd_dashboard(
    aggregator: &Aggregator,
    profile: ClientProfile,
    json_output: bool,
) -> anyhow::Result<bool> {
    let mut load = aggregator.spawn(&profile.endpoints());

    if json_output {
        let results = load.wait().await;
        let panels: Vec<_> = results
            .iter()
            .map(|(endpoint, result)| result_json(endpoint, result))
            .collect();
        println!("{}", serde_json::to_string_pretty(&panels)?);
        return Ok(true);
    }

    while let Some(update) = load.next_update().await {
        print_panel(&update.endpoint, &update.result);
    }

    // Fallback panels are normal dashboard output
    Ok(true)
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(&cli)?;
    tracing::debug!("Using backend {}", config.base_url);

    let aggregator = Aggregator::new(HttpTransport::new(config)?);

    match cli.command {
        Commands::Status { json } => {
            cmd_single(&aggregator, EndpointSpec::system_status(), json).await
        }
        Commands::Health { json } => cmd_single(&aggregator, EndpointSpec::health(), json).await,
        Commands::Workflows { json } => {
            cmd_single(&aggregator, EndpointSpec::workflows(), json).await
        }
        Commands::Dashboard { profile, json } => cmd_dashboard(&aggregator, profile, json).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "nxg-status failed");
            ExitCode::from(2)
        }
    }
}
