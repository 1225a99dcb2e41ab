//! Toolkit walkthrough.
//!
//! Lists the registered tools, shortens a sample prompt, and estimates its
//! token count before and after. Also renders a one-endpoint mock server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example demo
//! RUST_LOG=debug cargo run --example demo
//! ```

use agent_toolkit::{ToolCall, ToolOutput, Toolkit};
use anyhow::{Context, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const SAMPLE_PROMPT: &str = "请帮助我理解这个复杂的代码，你能给我一些详细的解释吗？";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let toolkit = Toolkit::new().context("failed to build toolkit")?;

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║   Agent Toolkit Demo                              ║");
    println!("╚═══════════════════════════════════════════════════╝\n");

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Catalog
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    let catalog = toolkit.list_tools();
    println!("Registered tools ({}):", catalog.total_tools);
    for entry in &catalog.tools {
        println!(
            "  {:<22} {:<26} confidence {:.2}",
            entry.key.as_str(),
            entry.name,
            entry.confidence
        );
    }
    println!();

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Prompt optimization
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    let optimized = toolkit
        .invoke("token_optimizer", Some("optimize_prompt"), &[json!(SAMPLE_PROMPT)])?
        .into_output()
        .and_then(|output| output.as_text().map(String::from))
        .context("optimize_prompt returned no text")?;

    let optimizer = toolkit.token_optimizer();
    println!("Original:  {SAMPLE_PROMPT}");
    println!("Optimized: {optimized}");
    println!(
        "Tokens:    {} -> {}",
        optimizer.estimate_tokens(SAMPLE_PROMPT),
        optimizer.estimate_tokens(&optimized)
    );
    println!();

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Mock server
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    let document = json!({"paths": {"/users": {"get": {"summary": "list users"}}}});
    let ToolOutput::Endpoints(endpoints) =
        toolkit.dispatch(ToolCall::ParseOpenApi { document })?
    else {
        anyhow::bail!("parse_openapi returned unexpected output");
    };

    if let ToolOutput::Text(code) = toolkit.dispatch(ToolCall::GenerateMockServer { endpoints })? {
        println!("Generated mock server:\n");
        println!("{code}");
    }

    Ok(())
}
