//! Fabula CLI - 交互式客户端
//!
//! 采集故事参数、调用中继、展示结果，并维护本地持久化的故事列表。
//! 每次只有一个请求在途：请求期间不接受新的触发命令。

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use fabula::client::{HttpRelayClient, HttpRelayClientConfig, SaveOutcome, StorySession};
use fabula::config::load_config;
use fabula::domain::story::{StoryId, StoryLength, StoryTone};
use fabula::infrastructure::persistence::sled::SledStoryStore;

const HELP: &str = "\
Commands:
  idea <text>       set the core idea
  character <text>  set the main character
  setting <text>    set the setting
  conflict <text>   set the central conflict
  length <value>    short | medium | long
  tone <value>      neutral | mysterious | humorous | dramatic | fantasy | sci-fi | horror | romantic
  show              show the current form and result
  generate          generate a story from the form
  random            fetch a random story idea (clears the form)
  save              save the current story locally
  copy              print the current story as plain text
  list              list saved stories
  load <id>         load a saved story
  delete <id>       delete a saved story
  reset             clear everything
  help              show this help
  quit              exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // 确保存储目录存在
    if let Some(parent) = std::path::Path::new(&config.client.storage_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let relay = Arc::new(
        HttpRelayClient::new(
            HttpRelayClientConfig::new(&config.client.relay_url)
                .with_timeout(config.client.timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("Failed to create relay client: {}", e))?,
    );
    let store = Arc::new(
        SledStoryStore::open(&config.client.storage_path)
            .map_err(|e| anyhow::anyhow!("Failed to open story store: {}", e))?,
    );

    let mut session = StorySession::new(relay, store);

    println!("Fabula - AI Story Generator ({})", config.client.relay_url);
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            "idea" => session.state_mut().prompt = rest.to_string(),
            "character" => session.state_mut().main_character = rest.to_string(),
            "setting" => session.state_mut().setting = rest.to_string(),
            "conflict" => session.state_mut().conflict = rest.to_string(),
            "length" => match serde_json::from_value::<StoryLength>(rest.into()) {
                Ok(length) => session.state_mut().length = length,
                Err(_) => println!("Unknown length '{}'. Use short, medium or long.", rest),
            },
            "tone" => match serde_json::from_value::<StoryTone>(rest.into()) {
                Ok(tone) => session.state_mut().tone = tone,
                Err(_) => println!("Unknown tone '{}'.", rest),
            },
            "show" => print_state(&session),
            "generate" => {
                if !session.submit_generation().await {
                    println!(
                        "Fill in at least one story field (idea, character, setting or conflict) first."
                    );
                    continue;
                }
                print_result(&session);
            }
            "random" => {
                session.request_random_prompt().await;
                match &session.state().error {
                    Some(error) => println!("{}", error),
                    None => println!("Idea: {}", session.state().prompt),
                }
            }
            "save" => match session.persist_current_story() {
                Ok(SaveOutcome::Saved(id)) => println!("Story saved (id {}).", id),
                Ok(SaveOutcome::NothingToSave) => println!("No story to save!"),
                Err(e) => println!("Failed to save story: {}", e),
            },
            "copy" => match session.export_current() {
                Some(text) => println!("{}", text),
                None => println!("No story to copy!"),
            },
            "list" => {
                if session.state().saved.is_empty() {
                    println!("No saved stories yet.");
                }
                for story in &session.state().saved {
                    println!("{}  {}  {}", story.id, story.date, story.title);
                }
            }
            "load" => match parse_id(rest) {
                Some(id) if session.load_saved_story(id) => print_result(&session),
                Some(_) => println!("No saved story with that id."),
                None => println!("Usage: load <id>"),
            },
            "delete" => match parse_id(rest) {
                Some(id) => match session.delete_saved_story(id) {
                    Ok(true) => println!("Story deleted."),
                    Ok(false) => println!("No saved story with that id."),
                    Err(e) => println!("Failed to delete story: {}", e),
                },
                None => println!("Usage: delete <id>"),
            },
            "reset" => {
                session.reset_all();
                println!("Cleared.");
            }
            _ => println!("Unknown command '{}'. Type 'help'.", command),
        }
    }

    Ok(())
}

fn parse_id(text: &str) -> Option<StoryId> {
    text.parse::<i64>().ok().map(StoryId::from_millis)
}

fn print_state(session: &StorySession) {
    let state = session.state();
    println!("idea:      {}", state.prompt);
    println!("character: {}", state.main_character);
    println!("setting:   {}", state.setting);
    println!("conflict:  {}", state.conflict);
    println!("length:    {}", state.length);
    println!("tone:      {}", state.tone);
    if state.has_result() {
        println!("--- {} ---", state.title);
        println!("{}", state.story);
    }
    if let Some(error) = &state.error {
        println!("{}", error);
    }
}

fn print_result(session: &StorySession) {
    let state = session.state();
    match &state.error {
        Some(error) => println!("{}", error),
        None => {
            println!("=== {} ===", state.title);
            println!("{}", state.story);
        }
    }
}
