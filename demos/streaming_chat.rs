//! Two-turn streaming chat against Azure OpenAI and OpenAI
//!
//! Each provider section runs only when its credentials are present:
//! `AZURE_OPENAI_ENDPOINT` / `AZURE_OPENAI_CHAT_DEPLOYMENT_NAME` /
//! `AZURE_OPENAI_KEY` for Azure, `OPENAI_API_KEY` for OpenAI.
//!
//! Run with: cargo run --example streaming_chat

use anyhow::Result;
use colloquy::client::{ChatClient, StdoutSink};
use colloquy::providers::{AzureOpenAI, OpenAI};
use colloquy::{ChatCompletion, ChatHistory, Role};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match AzureOpenAI::from_env() {
        Ok(provider) => {
            println!("======== Azure Open AI - Chat Streaming ========");
            streaming_chat(ChatClient::new(provider)).await?;
        }
        Err(e) => println!("Skipping Azure OpenAI sample: {}", e),
    }

    match OpenAI::from_env() {
        Ok(provider) => {
            println!("======== Open AI - Chat Streaming ========");
            streaming_chat(ChatClient::new(provider)).await?;
        }
        Err(e) => println!("Skipping OpenAI sample: {}", e),
    }

    Ok(())
}

async fn streaming_chat<P: ChatCompletion>(client: ChatClient<P>) -> Result<()> {
    println!("Chat content:");
    println!("------------------------");

    let mut history = client.create_new_chat("You are a librarian, expert about books");
    print_last_message(&history)?;

    // First user message
    history.add_user_message("Hi, I'm looking for book suggestions");
    print_last_message(&history)?;

    // First assistant reply, printed as it streams
    stream_reply(&client, &mut history).await?;

    // Second user message
    history.add_user_message(
        "I love history and philosophy, I'd like to learn something new about Greece, any suggestion?",
    );
    print_last_message(&history)?;

    // Second assistant reply
    stream_reply(&client, &mut history).await?;

    Ok(())
}

async fn stream_reply<P: ChatCompletion>(
    client: &ChatClient<P>,
    history: &mut ChatHistory,
) -> Result<()> {
    print!("{}: ", Role::Assistant);
    std::io::stdout().flush()?;

    let mut sink = StdoutSink::new();
    client.stream_reply(history, &mut sink).await?;

    println!();
    println!("------------------------");
    Ok(())
}

fn print_last_message(history: &ChatHistory) -> Result<()> {
    let message = history.last_message()?;
    println!("{}: {}", message.role, message.content);
    println!("------------------------");
    Ok(())
}
