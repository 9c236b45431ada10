//! Schema maintenance for the back-office database.
//!
//! `breb-migrate up` applies pending migrations. The target comes from
//! `--database-url` or `DATABASE_URL`.
use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

const DEFAULT_DATABASE_URL: &str = "sqlite:./breb.db?mode=rwc";

#[derive(Debug, Parser)]
#[command(name = "breb-migrate", version)]
struct Args {
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Apply pending migrations (default).
    Up,
    /// Roll back every applied migration.
    Down,
    /// Drop all tables and apply every migration again.
    Fresh,
    /// Print applied and pending migrations.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let db = Database::connect(&args.database_url).await?;

    match args.command.unwrap_or(Command::Up) {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down => migration::Migrator::down(&db, None).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcommand_is_optional() {
        let args =
            Args::try_parse_from(["breb-migrate", "--database-url", "sqlite::memory:"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.database_url, "sqlite::memory:");
    }

    #[test]
    fn fresh_is_parsed() {
        let args = Args::try_parse_from(["breb-migrate", "fresh"]).unwrap();
        assert_eq!(args.command, Some(Command::Fresh));
    }
}
