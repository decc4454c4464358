// Portfolio Chat — terminal client.
//
// Drives a ChatWidget against a running gateway from the terminal. Commands:
//   /limpar — clear the conversation
//   /tema   — toggle the persisted light/dark theme
//   /sair   — quit

use clap::Parser;
use portfolio_chat::types::Role;
use portfolio_chat::widget::backend::HttpBackend;
use portfolio_chat::widget::theme::{Theme, ThemeStore};
use portfolio_chat::widget::view::ChatView;
use portfolio_chat::widget::ChatWidget;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "portfolio-chat-cli", about = "Terminal client for the portfolio chat gateway.")]
struct Args {
    /// Chat gateway endpoint.
    #[arg(
        long,
        env = "PORTFOLIO_CHAT_URL",
        default_value = "http://127.0.0.1:3000/api/chat-gemini"
    )]
    url: String,
}

/// Prints each turn as a prefixed line; the theme picks the assistant color.
struct TerminalView {
    theme: Theme,
}

impl TerminalView {
    fn assistant_color(&self) -> &'static str {
        match self.theme {
            Theme::Dark => "\x1b[96m",  // bright cyan on dark terminals
            Theme::Light => "\x1b[34m", // plain blue on light terminals
        }
    }
}

impl ChatView for TerminalView {
    fn append(&mut self, role: Role, text: &str) {
        match role {
            Role::Assistant => println!("{}bot>\x1b[0m {}", self.assistant_color(), text),
            _ => {} // the user's line is already on screen from the prompt
        }
    }

    fn set_typing(&mut self, on: bool) {
        if on {
            println!("\x1b[2mdigitando...\x1b[0m");
        }
    }

    fn clear(&mut self) {
        println!("(conversa limpa)");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let theme_store = ThemeStore::open();

    let view = TerminalView { theme: theme_store.load() };
    let mut widget = ChatWidget::new(HttpBackend::new(&args.url), view);

    println!("Assistente do portfolio — /limpar, /tema, /sair");

    let stdin = std::io::stdin();
    loop {
        print!("voce> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "/sair" => break,
            "/limpar" => widget.clear(),
            "/tema" => {
                let next = theme_store.toggle();
                widget.view_mut().theme = next;
                println!("(tema: {})", next.as_str());
            }
            input => {
                widget.submit(input).await;
            }
        }
    }

    Ok(())
}
