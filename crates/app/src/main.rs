mod terminal;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use quiz_core::random;
use services::{AppServices, Clock, QuizConfig};
use tracing_subscriber::EnvFilter;

use terminal::{Exit, Terminal};

#[derive(Parser, Debug)]
#[command(name = "quiz", version, about = "Adaptive true/false quiz for the trade")]
struct Cli {
    /// SQLite database holding mastery levels and answer logs
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite://quiz.sqlite3")]
    db_url: String,

    /// Optional TOML file with session sizes
    #[arg(long, env = "QUIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Fixed seed for a reproducible session order
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    in_memory: bool,
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }
    Ok(())
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::default(),
    };

    let clock = Clock::default();
    let app = if cli.in_memory {
        AppServices::new_in_memory(clock, config)?
    } else {
        let db_url = normalize_sqlite_url(&cli.db_url);
        prepare_sqlite_file(&db_url)?;
        AppServices::new_sqlite(&db_url, clock, config)
            .await
            .with_context(|| format!("opening {db_url}"))?
    };
    tracing::info!(
        session_len = app.config().session_len(),
        in_memory = cli.in_memory,
        seeded = cli.seed.is_some(),
        "quiz ready"
    );

    let rng = cli.seed.map_or_else(random::from_entropy, random::seeded);
    let quiz = app.session_loop();
    let mut ctx = quiz.load_context(rng).await;

    let stdin = io::stdin();
    let exit = Terminal::new(stdin.lock(), io::stdout()).run(&quiz, &mut ctx)?;
    quiz.close(&ctx).await;
    tracing::debug!(?exit, "quiz closed");
    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quiz=info,services=info,storage=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_urls_are_made_absolute() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(normalize_sqlite_url("sqlite:///tmp/q.db"), "sqlite:///tmp/q.db");
        assert_eq!(normalize_sqlite_url("sqlite:/tmp/q.db"), "sqlite:///tmp/q.db");
        assert!(normalize_sqlite_url("quiz.sqlite3").ends_with("/quiz.sqlite3"));
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quiz.sqlite3");
        let url = format!("sqlite://{}", path.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(path.exists());
        assert!(prepare_sqlite_file("mysql://nope").is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["quiz", "--in-memory", "--seed", "7"]).unwrap();
        assert!(cli.in_memory);
        assert_eq!(cli.seed, Some(7));
    }
}
