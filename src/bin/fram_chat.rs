// Terminal front-end for the FRAM chat endpoint, driven by the same widget
// state machine as the web page.
use fram_store::storefront::transport::{HttpChatTransport, DEFAULT_API_URL};
use fram_store::storefront::widget::{Bubble, ChatWidget, Role, ScrollMetrics};
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_bubble(bubble: &Bubble) {
    match bubble.role {
        Role::Bot => println!("{}: {}", bubble.label(), bubble.text),
        Role::User => println!("> {}", bubble.text),
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let api_url = std::env::var("FRAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let transport = HttpChatTransport::new(api_url.clone());
    let mut widget = ChatWidget::new();

    println!("Connected to {} (type /reset for a fresh chat, Ctrl-D to quit)", api_url);
    widget.transcript().iter().for_each(print_bubble);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/reset" {
            widget.activate();
            widget.transcript().iter().for_each(print_bubble);
            continue;
        }

        let before = widget.transcript().len();
        if widget.send(&line, ScrollMetrics::at_bottom(), &transport).await.is_none() {
            continue;
        }

        // The user's own line is already on screen; print only the reply
        for bubble in widget.transcript().iter().skip(before + 1) {
            print_bubble(bubble);
        }
        if let Some(banner) = widget.error_banner() {
            eprintln!("⚠️  {}", banner);
        }
    }

    Ok(())
}
