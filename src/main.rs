mod formatter;
mod github;
mod score;

use crate::github::prelude::*;
use crate::score::{DAYS_TO_CONSIDER, UserStats};
use anyhow::Context;
use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Weekly OSS contribution leaderboard")]
struct Cli {
    #[arg(required = true, value_name = "LOGIN", help = "GitHub logins to rank")]
    users: Vec<String>,
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
    #[arg(
        long,
        value_name = "PATH",
        default_value = crate::formatter::FILE_NAME,
        help = "Leaderboard file to write"
    )]
    output: std::path::PathBuf,
    #[arg(long, help = "Print the leaderboard instead of writing the file")]
    stdout: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Cli {
        users,
        hostname,
        output,
        stdout,
    } = Cli::parse();

    let client = Client::new(&hostname)?;
    let since = chrono::Utc::now() - chrono::Duration::days(DAYS_TO_CONSIDER);

    let mut stats = Vec::with_capacity(users.len());
    for login in &users {
        log::info!("fetching events for {login}");
        let activity = fetch_user_activity(client.octocrab(), login).await?;
        stats.push(UserStats::from_activity(&activity, since));
    }

    let rendered = crate::formatter::format_leaderboard(&stats);
    if stdout {
        print!("{rendered}");
    } else {
        std::fs::write(&output, &rendered)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("wrote {}", output.display());
    }

    Ok(())
}
