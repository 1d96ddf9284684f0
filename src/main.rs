//! Headless Tambola runner (default binary).
//!
//! Generates a ticket batch, calls numbers with announcer pacing until the
//! game completes (or `TAMBOLA_MAX_CALLS` is reached), then prints the final
//! session snapshot as JSON. All settings come from `TAMBOLA_*` environment
//! variables; there are no command-line arguments.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tambola::caller::{CallerConfig, PacedCaller};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CallerConfig::from_env();
    info!(
        tickets = config.ticket_count,
        seed = ?config.seed,
        policy = config.column_policy.as_str(),
        draw_delay_ms = config.draw_delay.as_millis() as u64,
        "starting session"
    );

    let mut caller = PacedCaller::from_config(&config);
    let tickets = caller.generate(config.ticket_count).await;
    for (i, ticket) in tickets.iter().enumerate() {
        info!(
            ticket = i + 1,
            id = %ticket.id(),
            numbers = ?ticket.numbers().collect::<Vec<_>>(),
            "ticket ready"
        );
    }

    caller.run_to_completion(config.max_calls).await;

    let snapshot = caller.session().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
