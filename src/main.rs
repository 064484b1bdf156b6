mod analysis;
mod config;
mod display;
mod error;
mod input;
mod model;
mod store;

use analysis::aggregate::{champion_win_rate, player_lifetime_stats};
use analysis::ranking::{rank_players, RankMetric};
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_info, display_match_history, display_player_report, display_ranking,
    display_success, display_warning, display_win_rate,
};
use error::AppError;
use std::io;
use std::path::PathBuf;
use store::MatchStore;

#[derive(Parser, Debug)]
#[command(name = "League Tracker")]
#[command(about = "Track 5v5 match statistics and query aggregates", long_about = None)]
struct Args {
    /// Data file (default: LEAGUE_TRACKER_DATA or ~/.league_tracker/match_data.txt)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enter one match interactively
    Add,

    /// Lifetime statistics for one player
    Player {
        /// Player name as recorded in match data
        name: String,
    },

    /// Win rate for one champion across both sides
    Champion {
        /// Champion name as recorded in match data
        name: String,
    },

    /// Player leaderboard for a metric
    Rank {
        /// Metric selector: 1-8 or a name (kills, damage, dpm, kda, cspm,
        /// gpm, vspm, kp). Unrecognized selectors rank by total kills.
        #[arg(default_value = "1")]
        metric: String,
    },

    /// Show every recorded match
    History,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let data_file = args.data.unwrap_or(config.data_file);

    let mut store = MatchStore::load(&data_file)?;
    for skipped in store.skipped_lines() {
        display_warning(&skipped.to_string());
    }

    match args.command {
        Command::Add => {
            let stdin = io::stdin();
            let record = input::read_match(&mut stdin.lock())?;
            store.append(record);
            store.save(&data_file)?;
            display_success(&format!(
                "Match recorded ({} total in {})",
                store.len(),
                data_file.display()
            ));
        }
        Command::Player { name } => match player_lifetime_stats(&store, &name) {
            Some(report) => display_player_report(&report),
            None => display_info(&format!("No stats found for player: {}", name)),
        },
        Command::Champion { name } => match champion_win_rate(&store, &name) {
            Some(report) => display_win_rate(&report),
            None => display_info(&format!("No stats found for champion: {}", name)),
        },
        Command::Rank { metric } => {
            let metric = RankMetric::from_selector(&metric);
            display_ranking(metric, &rank_players(&store, metric));
        }
        Command::History => display_match_history(store.all()),
    }

    Ok(())
}
