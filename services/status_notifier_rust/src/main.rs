mod config;
mod formatters;
mod notifier;
mod payload;
mod poller;
mod scheduler;

use anyhow::Result;
use chrono::Utc;
use config::Config;
use dotenv::dotenv;
use log::info;
use notifier::TelegramNotifier;
use poller::PollState;
use scheduler::PollScheduler;

use hwwatch_rust_core::clients::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting homework status notifier...");

    // Missing or empty credentials abort here, before the loop is entered.
    let cfg = Config::from_env()?;
    info!(
        "Config: endpoint={} interval={}s timeout={}s",
        cfg.practicum_endpoint,
        cfg.poll_interval.as_secs(),
        cfg.http_timeout.as_secs(),
    );

    let source = PracticumClient::with_endpoint(
        cfg.practicum_endpoint.clone(),
        cfg.practicum_token.clone(),
        cfg.http_timeout,
    );
    let sink = TelegramNotifier::new(
        TelegramClient::new(cfg.telegram_bot_token.clone(), cfg.http_timeout),
        cfg.telegram_chat_id.clone(),
    );
    let scheduler = PollScheduler::new(cfg.poll_interval);

    let mut state = PollState::new(Utc::now().timestamp());
    info!("Entering polling loop");

    loop {
        poller::handle_cycle(&mut state, &source, &sink).await;
        scheduler.wait().await;
    }
}
