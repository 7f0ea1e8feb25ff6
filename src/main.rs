#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use keepsake_core::{CardConfig, CardContent, CardSession, EndPolicy};
use tracing_subscriber::EnvFilter;

use crate::context::Launch;

/// Content, settings and initial session chosen at launch
static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Get the launch state (set once in `main` before the window opens)
pub fn get_launch() -> Option<&'static Launch> {
    LAUNCH.get()
}

/// Keepsake - a Mother's Day greeting card
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - an animated Mother's Day greeting card")]
struct Args {
    /// Seed for confetti, hearts and sparkles (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Behaviour of "next" on the last section
    #[arg(short, long, value_enum, default_value_t = EndPolicy::Halt)]
    end_policy: EndPolicy,

    /// Skip the confetti burst when the card opens
    #[arg(long)]
    no_confetti: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("keepsake_desktop=info,keepsake_core=info,keepsake_ui=info")),
        )
        .init();

    let args = Args::parse();

    let content = match CardContent::builtin() {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to load card content: {}", e);
            std::process::exit(1);
        }
    };

    let config = CardConfig {
        seed: args.seed,
        end_policy: args.end_policy,
        opening_confetti: !args.no_confetti,
        ..CardConfig::default()
    };

    let session = match CardSession::new(&content, &config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to start card session: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        sections = content.sections.len(),
        photos = content.photos.len(),
        ?config,
        "Opening card"
    );

    let title = content.title.clone();
    let _ = LAUNCH.set(Launch {
        content,
        config,
        session,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_policy_defaults_to_halt() {
        let args = Args::try_parse_from(["keepsake-desktop"]).unwrap();
        assert_eq!(args.end_policy, EndPolicy::Halt);
        assert!(!args.no_confetti);
    }

    #[test]
    fn end_policy_parses_wrap() {
        let args = Args::try_parse_from(["keepsake-desktop", "--end-policy", "wrap"]).unwrap();
        assert_eq!(args.end_policy, EndPolicy::Wrap);
        assert!(Args::try_parse_from(["keepsake-desktop", "--end-policy", "loop"]).is_err());
    }
}
