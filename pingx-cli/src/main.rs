use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

use pingx_core::{format, ApiService, Dispatcher, DEFAULT_BASE_URL};

mod reqwest_client;

/// pingx — Probe a local development server with GET and POST requests
#[derive(Parser, Debug)]
#[command(name = "pingx", version, about = "A probe client for a local HTTP/JSON dev server")]
struct Cli {
    /// Base URL the endpoint paths are appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the response body as-is, without JSON pretty-printing
    #[arg(long)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a GET request
    Get {
        /// Endpoint path appended to the base URL
        #[arg(default_value = "/api/ai/test")]
        path: String,
    },
    /// Issue a POST request with a JSON `{"content": ...}` payload
    Post {
        /// Endpoint path appended to the base URL
        #[arg(default_value = "/api/ai/ping")]
        path: String,

        /// Value sent as the payload's `content` field
        #[arg(short, long, default_value = "")]
        content: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let service = ApiService::new(&cli.base_url);
    let dispatcher = Dispatcher::new(service, reqwest_client::ReqwestClient::new());

    let rx = match &cli.command {
        Command::Get { path } => dispatcher.spawn_fetch(path),
        Command::Post { path, content } => {
            dispatcher.spawn_post(path, serde_json::json!({ "content": content }))
        }
    };

    // Exactly one outcome arrives per dispatch; block for it the way the
    // original UI thread waited on its completion callback.
    let outcome = match rx.recv() {
        Ok(outcome) => outcome,
        Err(_) => {
            eprintln!(
                "{} request worker terminated without delivering an outcome",
                "✖".red().bold()
            );
            process::exit(1);
        }
    };

    match outcome {
        Ok(body) => {
            let text = if cli.raw { body } else { format::pretty(&body) };
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("{} Error: {}", "✖".red().bold(), e);
            process::exit(1);
        }
    }
}
