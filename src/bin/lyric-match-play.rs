//! Terminal front end playing Lyric Match against a running server.

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use lyric_match_back::client::{ClientView, HttpRoundApi};

#[derive(Debug, Parser)]
#[command(name = "lyric-match-play", about = "Guess the song from a generated lyric snippet")]
struct Args {
    /// Base URL of the Lyric Match server.
    #[arg(long, env = "LYRIC_MATCH_SERVER", default_value = "http://localhost:8000")]
    server: String,
}

enum Command {
    New,
    Hint,
    Guess(String),
    Reset,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word.to_lowercase().as_str() {
            "new" => Some(Command::New),
            "hint" => Some(Command::Hint),
            "guess" => Some(Command::Guess(rest.to_string())),
            "reset" => Some(Command::Reset),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: new | hint | guess <title> | reset | help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let api = HttpRoundApi::new(&args.server);
    let mut view = ClientView::new();

    println!("Lyric Match ({})", args.server);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let Some(command) = Command::parse(&line) else {
            println!("{HELP}");
            continue;
        };

        match command {
            Command::New => view.fetch_snippet(&api).await,
            Command::Hint => view.request_hint(&api).await,
            Command::Guess(guess) => view.submit_guess(&api, &guess).await,
            Command::Reset => view.reset(),
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        render(&view);
    }

    Ok(())
}

fn render(view: &ClientView) {
    println!();
    if let Some(snippet) = view.snippet() {
        println!("Snippet:\n{snippet}");
    }
    for hint in view.hints() {
        println!("  {hint}");
    }
    if let Some(result) = view.result() {
        println!("{result}");
    }
    if let Some(error) = view.error() {
        println!("error: {error}");
    }
    if view.is_game_over() {
        println!("Round over. Type `new` for another song or `reset` to retry the same song.");
    } else {
        println!(
            "Attempts left: {} | Hints left: {}",
            view.attempts_left(),
            view.hints_left()
        );
    }
}
