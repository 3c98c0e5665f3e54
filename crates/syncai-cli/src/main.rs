//! SyncAI CLI: Command-line interface for the scheduling assistant

use clap::{Parser, Subcommand};
use syncai_engine::{Message, MonthView, Role, Session, REPLY_DELAY};

/// AI scheduling assistant with TUI
#[derive(Parser)]
#[command(name = "syncai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Print the seeded month agenda
    Agenda {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a one-shot headless conversation and print the transcript
    Demo {
        /// The scheduling request to send
        #[arg(default_value = "Find 30 minutes with Alex tomorrow afternoon")]
        message: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let base_path = std::env::current_dir().expect("Failed to get current directory");
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(syncai_tui::run_tui(&base_path)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Agenda { json }) => {
            cmd_agenda(json);
        }
        Some(Commands::Demo { message }) => {
            cmd_demo(&message);
        }
    }
}

fn cmd_agenda(json: bool) {
    let view = MonthView::seeded();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(view.events()).expect("failed to serialize")
        );
        return;
    }

    println!("{}\n", view.label());
    for event in view.events() {
        println!("  {}  {:<9} {}", event.date, event.time, event.title);
    }
}

fn cmd_demo(message: &str) {
    let mut session = Session::new();
    print_message(session.last_message());

    let Some(ticket) = session.submit(message) else {
        eprintln!("Nothing to send");
        std::process::exit(1);
    };
    print_message(session.last_message());

    println!("  ...");
    std::thread::sleep(REPLY_DELAY);

    if session.deliver(ticket).is_some() {
        print_message(session.last_message());
    }
}

fn print_message(message: &Message) {
    let who = match message.role {
        Role::User => "You",
        Role::Assistant => "SyncAI",
    };
    println!("{who}:");
    println!("  {}", message.content);

    if let Some(proposal) = &message.proposal {
        println!();
        println!("  Proposed slot");
        println!("    {} ({})", proposal.date, proposal.date_label);
        println!("    {}", proposal.time_range());
        println!("    {}", proposal.timezone);
    }
    println!();
}
