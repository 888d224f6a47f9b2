use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use todo_db::{Database, TodoRepository};
use todo_server::maintenance::{self, SeedOutcome};

#[derive(Parser, Debug)]
#[command(name = "todo-admin")]
#[command(about = "Seed or inspect the todo database")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "TODO_DB_PATH", default_value = "todos.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert sample todos into an empty database.
    Seed,
    /// Print every todo, newest first, with the total count.
    Query,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    todo_server::init_tracing();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;

    match cli.command {
        Command::Seed => match maintenance::seed(&db)? {
            SeedOutcome::Seeded(n) => {
                info!("Seeded {} todos", n);
                print!("{}", maintenance::render_table(&db.find()?));
            }
            SeedOutcome::Skipped(n) => {
                info!("Database already has {} todos. Skipping seed.", n);
            }
        },
        Command::Query => {
            let todos = db.find()?;
            print!("{}", maintenance::render_table(&todos));
            println!("\nTotal todos: {}", db.count()?);
        }
    }

    Ok(())
}
