use crate::analysis::aggregate::{PlayerReport, WinRateReport};
use crate::analysis::ranking::{RankEntry, RankMetric};
use crate::model::MatchRecord;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    stat: String,
    value: String,
}

#[derive(Tabled)]
struct RankRow {
    rank: String,
    player: String,
    matches: String,
    score: String,
}

#[derive(Tabled)]
struct RosterRow {
    side: String,
    player: String,
    role: String,
    champion: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    damage: String,
    gold: String,
    cs: String,
    level: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_player_report(report: &PlayerReport) {
    println!(
        "\n{}",
        format!("📊 Player Statistics: {}", report.name).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        StatRow {
            stat: "Matches Played".to_string(),
            value: report.matches.to_string(),
        },
        StatRow {
            stat: "K/D/A".to_string(),
            value: format!("{}/{}/{}", report.kills, report.deaths, report.assists),
        },
        StatRow {
            stat: "Total Damage".to_string(),
            value: report.damage.to_string(),
        },
        StatRow {
            stat: "Total Gold".to_string(),
            value: report.gold.to_string(),
        },
        StatRow {
            stat: "Total CS".to_string(),
            value: report.cs.to_string(),
        },
        StatRow {
            stat: "Total Vision Score".to_string(),
            value: report.vision_score.to_string(),
        },
        StatRow {
            stat: "Average KDA".to_string(),
            value: format!("{:.2}", report.kda),
        },
        StatRow {
            stat: "Damage / Min".to_string(),
            value: format!("{:.1}", report.damage_per_minute),
        },
        StatRow {
            stat: "Gold / Min".to_string(),
            value: format!("{:.1}", report.gold_per_minute),
        },
        StatRow {
            stat: "CS / Min".to_string(),
            value: format!("{:.1}", report.cs_per_minute),
        },
        StatRow {
            stat: "Vision / Min".to_string(),
            value: format!("{:.1}", report.vision_per_minute),
        },
        StatRow {
            stat: "Kill Participation".to_string(),
            value: format!("{:.1}%", report.kill_participation),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_win_rate(report: &WinRateReport) {
    println!(
        "\n{}",
        format!("🏆 Champion Statistics: {}", report.champion)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!(
        "{} {} W / {} L over {} games ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        report.wins.to_string().green(),
        (report.games - report.wins).to_string().red(),
        report.games,
        report.win_rate
    );
}

pub fn display_ranking(metric: RankMetric, entries: &[RankEntry]) {
    println!(
        "\n{}",
        format!("🥇 Player Ranking by {}", metric.label())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if entries.is_empty() {
        println!("{}", "No matches recorded.".yellow());
        return;
    }

    let rows: Vec<RankRow> = entries
        .iter()
        .map(|entry| RankRow {
            rank: format!("#{}", entry.rank),
            player: entry.name.clone(),
            matches: entry.matches.to_string(),
            score: format!("{:.2}", entry.score),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_match_history(matches: &[MatchRecord]) {
    if matches.is_empty() {
        println!("{}", "No matches recorded.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!("📜 MATCH HISTORY ({} Games)", matches.len())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    for record in matches {
        let winner = if record.blue_win {
            "Blue Team".blue().bold().to_string()
        } else {
            "Red Team".red().bold().to_string()
        };
        println!(
            "{} {}  |  {} minutes  |  Winner: {}",
            "Match:".bold(),
            record.match_id,
            record.playtime,
            winner
        );

        let mut rows = Vec::new();
        for (side, team) in [("Blue", &record.blue_team), ("Red", &record.red_team)] {
            for player in team.iter() {
                rows.push(RosterRow {
                    side: side.to_string(),
                    player: player.name.clone(),
                    role: player.role.clone(),
                    champion: player.champion.clone(),
                    kda: format!("{}/{}/{}", player.kills, player.deaths, player.assists),
                    damage: player.damage.to_string(),
                    gold: player.gold.to_string(),
                    cs: player.cs.to_string(),
                    level: player.level.to_string(),
                });
            }
        }

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}
