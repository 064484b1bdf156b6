use super::aggregate::{collect_accumulators, PlayerAccumulator};
use crate::store::MatchStore;
use std::cmp::Ordering;

/// Closed set of leaderboard metrics. Each maps one accumulator to an f64
/// score, sharing the zero-guard and deathless-KDA conventions of the
/// lifetime report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    TotalKills,
    TotalDamage,
    DamagePerMinute,
    Kda,
    CsPerMinute,
    GoldPerMinute,
    VisionPerMinute,
    KillParticipation,
}

impl RankMetric {
    /// Lenient selector parsing: menu numbers 1-8 or a handful of names.
    /// Anything unrecognized falls back to total kills rather than erroring.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_lowercase().as_str() {
            "2" | "damage" | "total-damage" => RankMetric::TotalDamage,
            "3" | "dpm" | "damage-per-minute" => RankMetric::DamagePerMinute,
            "4" | "kda" => RankMetric::Kda,
            "5" | "cspm" | "cs-per-minute" => RankMetric::CsPerMinute,
            "6" | "gpm" | "gold-per-minute" => RankMetric::GoldPerMinute,
            "7" | "vspm" | "vision-per-minute" => RankMetric::VisionPerMinute,
            "8" | "kp" | "kill-participation" => RankMetric::KillParticipation,
            _ => RankMetric::TotalKills,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankMetric::TotalKills => "Total Kills",
            RankMetric::TotalDamage => "Total Damage",
            RankMetric::DamagePerMinute => "Damage / Min",
            RankMetric::Kda => "KDA",
            RankMetric::CsPerMinute => "CS / Min",
            RankMetric::GoldPerMinute => "Gold / Min",
            RankMetric::VisionPerMinute => "Vision / Min",
            RankMetric::KillParticipation => "Kill Participation %",
        }
    }

    pub fn score(&self, acc: &PlayerAccumulator) -> f64 {
        match self {
            RankMetric::TotalKills => acc.kills as f64,
            RankMetric::TotalDamage => acc.damage as f64,
            RankMetric::DamagePerMinute => acc.damage_per_minute(),
            RankMetric::Kda => acc.kda(),
            RankMetric::CsPerMinute => acc.cs_per_minute(),
            RankMetric::GoldPerMinute => acc.gold_per_minute(),
            RankMetric::VisionPerMinute => acc.vision_per_minute(),
            RankMetric::KillParticipation => acc.kill_participation(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankEntry {
    pub rank: usize,
    pub name: String,
    pub matches: usize,
    pub score: f64,
}

/// Full leaderboard for the chosen metric, rank 1 = highest score. The sort
/// is stable, so ties keep discovery order. Empty store gives an empty
/// ranking, not an error.
pub fn rank_players(store: &MatchStore, metric: RankMetric) -> Vec<RankEntry> {
    let mut accumulators = collect_accumulators(store);

    accumulators.sort_by(|a, b| {
        metric
            .score(b)
            .partial_cmp(&metric.score(a))
            .unwrap_or(Ordering::Equal)
    });

    accumulators
        .iter()
        .enumerate()
        .map(|(idx, acc)| RankEntry {
            rank: idx + 1,
            name: acc.name.clone(),
            matches: acc.matches,
            score: metric.score(acc),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchRecord, PlayerRecord};
    use pretty_assertions::assert_eq;

    fn player(name: &str, kills: u32, damage: u32) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            role: "Adc".to_string(),
            champion: "Jinx".to_string(),
            kills,
            deaths: 1,
            assists: 0,
            damage,
            gold: 0,
            cs: 0,
            wards_placed: 0,
            wards_cleared: 0,
            vision_score: 0,
            level: 11,
        }
    }

    fn two_player_store(blue_kills: u32, red_kills: u32) -> MatchStore {
        let blue_team = vec![
            player("BlueCarry", blue_kills, 20000),
            player("B1", 0, 0),
            player("B2", 0, 0),
            player("B3", 0, 0),
            player("B4", 0, 0),
        ];
        let red_team = vec![
            player("RedCarry", red_kills, 15000),
            player("R1", 0, 0),
            player("R2", 0, 0),
            player("R3", 0, 0),
            player("R4", 0, 0),
        ];

        let mut store = MatchStore::new();
        store.append(MatchRecord {
            match_id: "M1".to_string(),
            playtime: 30,
            blue_win: true,
            blue_team,
            red_team,
        });
        store
    }

    #[test]
    fn ranks_descend_by_total_kills() {
        let store = two_player_store(10, 7);
        let ranking = rank_players(&store, RankMetric::TotalKills);

        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[0].name, "BlueCarry");
        assert_eq!(ranking[0].score, 10.0);
        assert_eq!(ranking[1].rank, 2);
        assert_eq!(ranking[1].name, "RedCarry");
        assert_eq!(ranking[1].score, 7.0);
    }

    #[test]
    fn ranking_is_deterministic() {
        let store = two_player_store(4, 9);
        let first = rank_players(&store, RankMetric::TotalDamage);
        let second = rank_players(&store, RankMetric::TotalDamage);

        let names: Vec<_> = first.iter().map(|e| e.name.clone()).collect();
        let repeat: Vec<_> = second.iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, repeat);
    }

    #[test]
    fn ties_keep_discovery_order() {
        // Everyone but the carries scores 0, so the tie block must come out
        // in first-appearance order: blue side before red.
        let store = two_player_store(3, 2);
        let ranking = rank_players(&store, RankMetric::TotalKills);

        let tied: Vec<&str> = ranking[2..].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(tied, ["B1", "B2", "B3", "B4", "R1", "R2", "R3", "R4"]);
    }

    #[test]
    fn empty_store_gives_empty_ranking() {
        let store = MatchStore::new();
        assert!(rank_players(&store, RankMetric::Kda).is_empty());
    }

    #[test]
    fn unknown_selector_falls_back_to_total_kills() {
        assert_eq!(RankMetric::from_selector("1"), RankMetric::TotalKills);
        assert_eq!(RankMetric::from_selector("8"), RankMetric::KillParticipation);
        assert_eq!(RankMetric::from_selector("kda"), RankMetric::Kda);
        assert_eq!(RankMetric::from_selector("9"), RankMetric::TotalKills);
        assert_eq!(RankMetric::from_selector("bogus"), RankMetric::TotalKills);
        assert_eq!(RankMetric::from_selector(""), RankMetric::TotalKills);
    }
}
