use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dsa_tracker::api::UserClient;
use dsa_tracker::logging::{self, LogOutput};
use dsa_tracker::notes::NotesStore;
use dsa_tracker::progress::ProgressStore;
use dsa_tracker::report;
use dsa_tracker::stats::ProblemStats;
use dsa_tracker::storage::FileStore;
use dsa_tracker::view::{ProblemView, StatusFilter, ViewQuery, week_options};
use dsa_tracker::{App, Config};

#[derive(Parser)]
#[command(name = "dsa-tracker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding progress and notes (overrides the config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List problems for a week, grouped by day
    List {
        /// Week to show (defaults to the configured week)
        #[arg(short, long)]
        week: Option<u32>,
        /// all, completed, pending, easy, medium or hard
        #[arg(short, long, default_value = "all")]
        filter: StatusFilter,
        /// Case-insensitive text matched against title, theme and technique
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Toggle completion of a problem
    Toggle {
        /// Problem title
        title: String,
    },
    /// Set the note for a problem
    Note {
        /// Problem title
        title: String,
        /// Note text (empty clears it)
        #[arg(default_value = "")]
        text: String,
    },
    /// Show one problem with its note
    Show {
        /// Problem title
        title: String,
    },
    /// Show completion statistics
    Stats,
    /// List the weeks in the catalog
    Weeks,
    /// Fetch a user from the configured user endpoint
    User {
        /// User id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let storage = FileStore::from_config(&config)?;

    // The dashboard draws over stdout, so its logs go to a file
    let log_output = match cli.command {
        None => LogOutput::File(storage.dir().to_path_buf()),
        Some(_) => LogOutput::Stderr,
    };
    logging::init(&log_output)?;

    match cli.command {
        Some(Commands::List { week, filter, search }) => {
            let progress = load_progress(&storage)?;
            let notes = load_notes(&storage)?;
            let query = ViewQuery { filter, search, week: week.unwrap_or(config.default_week) };
            let view = ProblemView::build(&progress, &query);
            print!("{}", report::format_view(&view, notes.notes()));
        }
        Some(Commands::Toggle { title }) => {
            let mut progress = load_progress(&storage)?;
            if !progress.toggle_completion(&title)? {
                println!("No problem titled {title:?}");
                return Ok(());
            }
            let done = progress.get(&title).is_some_and(|p| p.completed);
            println!("{} {title}", if done { "Completed" } else { "Reopened" });
        }
        Some(Commands::Note { title, text }) => {
            let mut notes = load_notes(&storage)?;
            notes.set_note(&title, &text)?;
            println!("Saved note for {title}");
        }
        Some(Commands::Show { title }) => {
            let progress = load_progress(&storage)?;
            let notes = load_notes(&storage)?;
            let Some(problem) = progress.get(&title) else {
                bail!("No problem titled {title:?}");
            };
            print!("{}", report::format_problem(problem, notes.note(&title)));
        }
        Some(Commands::Stats) => {
            let progress = load_progress(&storage)?;
            print!("{}", report::format_stats(&ProblemStats::compute(progress.problems())));
        }
        Some(Commands::Weeks) => {
            let progress = load_progress(&storage)?;
            print!("{}", report::format_weeks(&week_options(progress.problems())));
        }
        Some(Commands::User { id }) => {
            let client = UserClient::from_config(&config)?;
            let user = match client.fetch_user(&id).await {
                Ok(user) => user,
                Err(e) if e.is_not_found() => bail!("No user with id {id:?}"),
                Err(e) => return Err(e.into()),
            };
            println!("{}", user.display_name());
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        None => {
            // Launch TUI
            let mut app = App::new(config, storage)?;
            app.run().await?;
        }
    }

    Ok(())
}

fn load_progress(storage: &FileStore) -> Result<ProgressStore<FileStore>> {
    let mut progress = ProgressStore::new(storage.clone());
    progress.initialize()?;
    Ok(progress)
}

fn load_notes(storage: &FileStore) -> Result<NotesStore<FileStore>> {
    let mut notes = NotesStore::new(storage.clone());
    notes.initialize()?;
    Ok(notes)
}
