use crate::model::{MatchRecord, PlayerRecord};
use crate::store::MatchStore;
use std::collections::HashMap;

/// Per-player running totals, built fresh on every query. Team kills are the
/// kill-participation denominator: the summed kills of whichever side the
/// player was on, accumulated per match played.
#[derive(Debug, Clone)]
pub struct PlayerAccumulator {
    pub name: String,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub damage: u64,
    pub gold: u64,
    pub cs: u64,
    pub vision_score: u64,
    pub playtime: u64,
    pub matches: usize,
    pub team_kills: u64,
}

impl PlayerAccumulator {
    pub fn new(name: String) -> Self {
        PlayerAccumulator {
            name,
            kills: 0,
            deaths: 0,
            assists: 0,
            damage: 0,
            gold: 0,
            cs: 0,
            vision_score: 0,
            playtime: 0,
            matches: 0,
            team_kills: 0,
        }
    }

    fn absorb(&mut self, player: &PlayerRecord, playtime: u32, team_kills: u32) {
        self.kills += u64::from(player.kills);
        self.deaths += u64::from(player.deaths);
        self.assists += u64::from(player.assists);
        self.damage += u64::from(player.damage);
        self.gold += u64::from(player.gold);
        self.cs += u64::from(player.cs);
        self.vision_score += u64::from(player.vision_score);
        self.playtime += u64::from(playtime);
        self.team_kills += u64::from(team_kills);
        self.matches += 1;
    }

    fn per_minute(&self, total: u64) -> f64 {
        if self.playtime > 0 {
            total as f64 / self.playtime as f64
        } else {
            0.0
        }
    }

    pub fn damage_per_minute(&self) -> f64 {
        self.per_minute(self.damage)
    }

    pub fn gold_per_minute(&self) -> f64 {
        self.per_minute(self.gold)
    }

    pub fn cs_per_minute(&self) -> f64 {
        self.per_minute(self.cs)
    }

    pub fn vision_per_minute(&self) -> f64 {
        self.per_minute(self.vision_score)
    }

    /// (kills + assists) / deaths, except a deathless record scores as the
    /// raw kill + assist count. Domain convention, not a bug.
    pub fn kda(&self) -> f64 {
        let contribution = (self.kills + self.assists) as f64;
        if self.deaths == 0 {
            contribution
        } else {
            contribution / self.deaths as f64
        }
    }

    /// Share of the player's sides' kills they scored or assisted on, as a
    /// percentage. Can exceed 100 when assists overlap heavily with kills.
    pub fn kill_participation(&self) -> f64 {
        if self.team_kills > 0 {
            (self.kills + self.assists) as f64 / self.team_kills as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Lifetime totals and derived rates for one player.
#[derive(Debug, Clone)]
pub struct PlayerReport {
    pub name: String,
    pub matches: usize,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub damage: u64,
    pub gold: u64,
    pub cs: u64,
    pub vision_score: u64,
    pub damage_per_minute: f64,
    pub gold_per_minute: f64,
    pub cs_per_minute: f64,
    pub vision_per_minute: f64,
    pub kda: f64,
    pub kill_participation: f64,
}

impl PlayerReport {
    fn from_accumulator(acc: &PlayerAccumulator) -> Self {
        PlayerReport {
            name: acc.name.clone(),
            matches: acc.matches,
            kills: acc.kills,
            deaths: acc.deaths,
            assists: acc.assists,
            damage: acc.damage,
            gold: acc.gold,
            cs: acc.cs,
            vision_score: acc.vision_score,
            damage_per_minute: acc.damage_per_minute(),
            gold_per_minute: acc.gold_per_minute(),
            cs_per_minute: acc.cs_per_minute(),
            vision_per_minute: acc.vision_per_minute(),
            kda: acc.kda(),
            kill_participation: acc.kill_participation(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WinRateReport {
    pub champion: String,
    pub games: u32,
    pub wins: u32,
    pub win_rate: f64,
}

/// Folds the full store into one player's lifetime report. `None` when the
/// player appears in no match.
pub fn player_lifetime_stats(store: &MatchStore, name: &str) -> Option<PlayerReport> {
    let mut acc = PlayerAccumulator::new(name.to_string());

    for record in store.all() {
        // Blue side first; a player is assumed to appear on at most one
        // side per match.
        if let Some(player) = record.blue_team.iter().find(|p| p.name == name) {
            acc.absorb(player, record.playtime, MatchRecord::team_kills(&record.blue_team));
        } else if let Some(player) = record.red_team.iter().find(|p| p.name == name) {
            acc.absorb(player, record.playtime, MatchRecord::team_kills(&record.red_team));
        }
    }

    if acc.matches == 0 {
        return None;
    }

    Some(PlayerReport::from_accumulator(&acc))
}

/// Win rate over every slot the champion was picked in, either side. `None`
/// when the champion was never played.
pub fn champion_win_rate(store: &MatchStore, champion: &str) -> Option<WinRateReport> {
    let mut games = 0u32;
    let mut wins = 0u32;

    for record in store.all() {
        let mut count_side = |team: &[PlayerRecord], side_won: bool| {
            for player in team {
                if player.champion == champion {
                    games += 1;
                    if side_won {
                        wins += 1;
                    }
                }
            }
        };

        count_side(&record.blue_team, record.blue_win);
        count_side(&record.red_team, !record.blue_win);
    }

    if games == 0 {
        return None;
    }

    Some(WinRateReport {
        champion: champion.to_string(),
        games,
        wins,
        win_rate: f64::from(wins) / f64::from(games) * 100.0,
    })
}

/// Builds one accumulator per distinct player name over both sides of every
/// match. Order is discovery order: store order, blue side before red.
pub fn collect_accumulators(store: &MatchStore) -> Vec<PlayerAccumulator> {
    let mut accumulators: Vec<PlayerAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in store.all() {
        let blue_kills = MatchRecord::team_kills(&record.blue_team);
        let red_kills = MatchRecord::team_kills(&record.red_team);

        for (team, team_kills) in [(&record.blue_team, blue_kills), (&record.red_team, red_kills)] {
            for player in team.iter() {
                let slot = *index.entry(player.name.clone()).or_insert_with(|| {
                    accumulators.push(PlayerAccumulator::new(player.name.clone()));
                    accumulators.len() - 1
                });
                accumulators[slot].absorb(player, record.playtime, team_kills);
            }
        }
    }

    accumulators
}
