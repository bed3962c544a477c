use async_trait::async_trait;
use log::info;

use hwwatch_rust_core::clients::TelegramClient;
use hwwatch_rust_core::WatchError;

use crate::poller::MessageSink;

/// Binds the Telegram client to the one destination chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageSink for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), WatchError> {
        self.client.send_message(&self.chat_id, text).await?;
        info!("Sent notification: {text}");
        Ok(())
    }
}
