use anyhow::{Context, Result};
use clap::Parser;
use signoff_action::checker;
use signoff_action::config::{self, ActionConfig};
use signoff_action::event::TriggerEvent;
use signoff_action::host::github::GitHubHost;
use signoff_action::output::ActionOutput;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match ActionConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match config::failure_message(&e) {
            Some(msg) => {
                error!("{msg}");
                ActionOutput::new(None).set_failed(&msg);
                std::process::exit(1);
            }
            None => e.exit(),
        },
    };
    let output = ActionOutput::new(config.output_path.clone());

    if let Err(e) = run(&config, &output).await {
        error!("{e:#}");
        output.set_failed(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(config: &ActionConfig, output: &ActionOutput) -> Result<()> {
    info!("signoff-action starting");
    let event = TriggerEvent::from_path(
        &config.repository,
        config.event_name.clone(),
        &config.event_path,
    )?;
    if let Some(name) = &event.name {
        info!("event: {name}");
    }

    let host = GitHubHost::new(&config.api_url, &config.token, config.request_timeout())
        .context("GitHub client setup failed")?;
    info!("api: {}", host.base_url());

    let verdict = checker::run(&event, &host, output).await?;
    info!("signedoff={}", verdict.pass);
    Ok(())
}
