//! Expert Chat CLI - Ask an expert persona from the terminal
//!
//! Thin client for the Expert Chat server API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use expert_chat::{validate_user_text, Persona};

use api::ExpertChatClient;
use config::Config;

const EMPTY_INPUT_WARNING: &str = "質問を入力してください。";

#[derive(Parser)]
#[command(name = "expert-chat")]
#[command(about = "Expert Chat CLI - Ask an expert persona", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question (prompts for missing text / persona)
    Ask {
        /// Question or request text
        text: Option<String>,
        /// Persona key (A / B), label, or slug
        #[arg(short, long)]
        persona: Option<String>,
        /// Show model, token usage and request id
        #[arg(long)]
        verbose: bool,
    },

    /// List available personas
    Personas {
        /// Show the full instruction text
        #[arg(long)]
        verbose: bool,
    },

    /// Set the server URL
    Server {
        /// Base URL (e.g., http://127.0.0.1:8501)
        url: String,
    },

    /// Set the default persona
    Persona {
        /// Persona key (A / B), label, or slug
        key: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            text,
            persona,
            verbose,
        } => cmd_ask(text, persona, verbose).await,
        Commands::Personas { verbose } => cmd_personas(verbose).await,
        Commands::Server { url } => cmd_server(url).await,
        Commands::Persona { key } => cmd_persona(key),
        Commands::Config => cmd_config().await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_ask(text: Option<String>, persona: Option<String>, verbose: bool) -> Result<()> {
    let config = Config::load()?;

    let persona = match persona.or_else(|| config.default_persona.clone()) {
        Some(key) => key.parse::<Persona>()?,
        None => select_persona()?,
    };

    let text = match text {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("ここに質問や依頼を入力してください")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    if let Some(warning) = blank_input_warning(&text) {
        println!("{}", warning.yellow());
        return Ok(());
    }

    let client = ExpertChatClient::new(&config.base_url);
    println!("{}", "回答を生成しています…".dimmed());

    let reply = match client.chat(&text, persona.key()).await {
        Ok(reply) => reply,
        Err(e) => bail!("エラーが発生しました：{}", e),
    };

    println!("\n{} {}", "### 回答".bold(), reply.persona.label.cyan());
    println!("{}", reply.answer);

    if verbose {
        println!(
            "\n{}",
            format!(
                "model: {} / 温度: {} / tokens: {} / request: {}",
                reply.model, reply.temperature, reply.usage.total_tokens, reply.request_id
            )
            .dimmed()
        );
    }

    Ok(())
}

async fn cmd_personas(verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let client = ExpertChatClient::new(&config.base_url);

    let personas = client.personas().await?;

    println!("{}", "Personas:".bold());
    for persona in personas {
        let is_default = config.default_persona.as_deref() == Some(persona.key.as_str());
        let default_marker = if is_default {
            " (default)".green().to_string()
        } else {
            String::new()
        };

        println!(
            "  {} {} ({}){}",
            persona.key.cyan().bold(),
            persona.label,
            persona.slug.dimmed(),
            default_marker
        );
        if verbose {
            println!("      {}", persona.instruction.dimmed());
        }
    }

    Ok(())
}

async fn cmd_server(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);

    let client = ExpertChatClient::new(&config.base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Expert Chat server at {}", config.base_url);
        }
    }

    config.save()?;
    println!("{} Server URL saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_persona(key: String) -> Result<()> {
    let persona: Persona = key.parse()?;

    let mut config = Config::load()?;
    config.default_persona = Some(persona.key().to_string());
    config.save()?;

    println!("{} Default persona set to '{}'", "✓".green(), persona.label());

    Ok(())
}

async fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", Config::config_path()?);
    println!("  Server: {}", config.base_url.cyan());
    println!(
        "  Default persona: {}",
        config.default_persona.as_deref().unwrap_or("-").cyan()
    );

    let client = ExpertChatClient::new(&config.base_url);
    match client.config().await {
        Ok(server) => {
            println!(
                "  使用モデル: {} / 温度: {} ({}, timeout {}s)",
                server.model.cyan(),
                server.temperature,
                server.provider,
                server.timeout_secs
            );
        }
        Err(e) => {
            println!("  {} {}", "Server unreachable:".yellow(), e.to_string().dimmed());
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

/// Warning to show instead of sending blank input to the server
fn blank_input_warning(text: &str) -> Option<&'static str> {
    validate_user_text(text).err().map(|_| EMPTY_INPUT_WARNING)
}

fn select_persona() -> Result<Persona> {
    let labels: Vec<&str> = Persona::ALL.iter().map(|p| p.label()).collect();

    let index = Select::new()
        .with_prompt("専門家を選んでください")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read selection")?;

    Ok(Persona::ALL[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_warned() {
        assert_eq!(blank_input_warning(""), Some(EMPTY_INPUT_WARNING));
        assert_eq!(blank_input_warning("  \n\t "), Some(EMPTY_INPUT_WARNING));
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(blank_input_warning("explain 'however'"), None);
        assert_eq!(blank_input_warning("  hi  "), None);
    }
}
