mod config;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wolfram_alpha::client::WolframClient;
use wolfram_alpha::transport::{HttpTransport, HttpTransportConfig};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr (stdout is reserved for prompts and answers)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    let transport_config = HttpTransportConfig::from_env();
    info!(
        app_id = %config.app_id,
        timeout_ms = transport_config.timeout.as_millis(),
        "configuration loaded"
    );

    let transport = HttpTransport::with_config(transport_config)?;
    let client = WolframClient::with_transport(config.app_id, transport);

    println!("Welcome to the Wolfram|Alpha console.");
    println!("Type an expression to solve it, or \"stop\" to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        if expression.eq_ignore_ascii_case("stop") {
            break;
        }

        match client.solve(expression).await {
            Ok(answer) => println!("Answer: {answer}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
