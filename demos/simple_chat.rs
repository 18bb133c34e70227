//! Non-streaming chat round trip against OpenAI
//!
//! Run with: OPENAI_API_KEY=... cargo run --example simple_chat

use anyhow::Result;
use colloquy::client::ChatClient;
use colloquy::providers::OpenAI;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ChatClient::new(OpenAI::from_env()?);

    let mut history = client.create_new_chat("You are a librarian, expert about books");
    history.add_user_message("Recommend one book about ancient Greece, in a single sentence.");

    let reply = client.reply(&mut history).await?;
    println!("Assistant: {}", reply);

    for message in &history {
        println!("[{}] {}", message.role, message.content);
    }

    Ok(())
}
