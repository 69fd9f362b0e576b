//! Ideaproof — startup idea validation server.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use ideaproof_core::IdeaproofConfig;
use ideaproof_llm::LLMConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("IDEAPROOF_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn load_state() -> anyhow::Result<AppState> {
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = IdeaproofConfig::from_env(&data_dir)?;
    let llm_config = LLMConfig::load(&config.llm_config_file);
    Ok(AppState::new(config, llm_config))
}

/// One-shot validation from the command line; the idea comes from the
/// remaining arguments, or stdin when none are given.
async fn run_validate(args: &[String]) -> anyhow::Result<()> {
    let idea = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.join(" ")
    };

    if idea.trim().is_empty() {
        anyhow::bail!("Usage: ideaproof validate <idea text>  (or pipe the idea on stdin)");
    }

    let state = load_state()?;
    let outcome = state.orchestrator.validate_idea_detailed(&idea).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--validate" | "validate" => {
                if let Err(e) = run_validate(&args[2..]).await {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Ideaproof — startup idea validation server");
                println!();
                println!("Usage: ideaproof [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  validate [idea...]       Validate one idea (reads stdin if omitted)");
                println!("  help                     Show this help message");
                println!();
                println!("Environment:");
                println!("  ANTHROPIC_API_KEY        Enables live validation (also OPENAI_API_KEY, GROQ_API_KEY)");
                println!("  IDEAPROOF_POLICY         strict | resilient (default resilient)");
                println!("  IDEAPROOF_MAX_INFLIGHT   Cap on concurrent model calls");
                println!("  IDEAPROOF_DATA_DIR       Data directory (default ./data)");
                println!("  PORT                     HTTP port (default 3010)");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'ideaproof help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let state = Arc::new(load_state()?);
    let port = state.config.port;

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Ideaproof server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
