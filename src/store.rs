use crate::error::AppError;
use crate::model::{MatchRecord, PlayerRecord, TEAM_SIZE};
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Canonical ordered list of matches for the session.
///
/// Insertion order is chronological entry order. Persistence is explicit:
/// `load` before first use, `save` after each mutation. A save rewrites the
/// whole file (overwrite, not append).
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: Vec<MatchRecord>,
    skipped: Vec<AppError>,
}

impl MatchStore {
    pub fn new() -> Self {
        MatchStore {
            matches: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Adds one match to the end of the sequence. No validation, no
    /// deduplication by match ID.
    pub fn append(&mut self, record: MatchRecord) {
        self.matches.push(record);
    }

    pub fn all(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Lines that failed to parse during the last `load`. Skipped, never
    /// zero-filled; the CLI surfaces these as warnings.
    pub fn skipped_lines(&self) -> &[AppError] {
        &self.skipped
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // First run: no data file yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MatchStore::new()),
            Err(e) => {
                return Err(AppError::DataFile(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut store = MatchStore::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_match_line(idx + 1, line) {
                Ok(record) => store.matches.push(record),
                Err(e) => store.skipped.push(e),
            }
        }

        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let mut out = String::new();
        for record in &self.matches {
            out.push_str(&format_match_line(record));
            out.push('\n');
        }

        fs::write(path, out).map_err(|e| {
            AppError::DataFile(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

/// One line per match: `match_id playtime blue_win(0|1)` followed by 13
/// fields per player, all 5 blue players then all 5 red players. Names,
/// roles and champions cannot contain whitespace under this encoding.
pub fn format_match_line(record: &MatchRecord) -> String {
    let mut line = String::new();
    let _ = write!(
        line,
        "{} {} {}",
        record.match_id,
        record.playtime,
        if record.blue_win { 1 } else { 0 }
    );

    for player in record.blue_team.iter().chain(record.red_team.iter()) {
        let _ = write!(
            line,
            " {} {} {} {} {} {} {} {} {} {} {} {} {}",
            player.name,
            player.role,
            player.champion,
            player.kills,
            player.deaths,
            player.assists,
            player.damage,
            player.gold,
            player.cs,
            player.wards_placed,
            player.wards_cleared,
            player.vision_score,
            player.level
        );
    }

    line
}

pub fn parse_match_line(line_no: usize, line: &str) -> Result<MatchRecord, AppError> {
    let mut tokens = line.split_whitespace();

    let match_id = next_token(&mut tokens, line_no, "match id")?.to_string();
    let playtime = next_u32(&mut tokens, line_no, "playtime")?;
    let blue_win = match next_token(&mut tokens, line_no, "blue win flag")? {
        "1" => true,
        "0" => false,
        other => {
            return Err(AppError::MalformedRecord {
                line: line_no,
                reason: format!("blue win flag must be 0 or 1, got '{}'", other),
            })
        }
    };

    let mut blue_team = Vec::with_capacity(TEAM_SIZE);
    let mut red_team = Vec::with_capacity(TEAM_SIZE);
    for _ in 0..TEAM_SIZE {
        blue_team.push(parse_player(&mut tokens, line_no)?);
    }
    for _ in 0..TEAM_SIZE {
        red_team.push(parse_player(&mut tokens, line_no)?);
    }

    if tokens.next().is_some() {
        return Err(AppError::MalformedRecord {
            line: line_no,
            reason: "unexpected trailing fields".to_string(),
        });
    }

    Ok(MatchRecord {
        match_id,
        playtime,
        blue_win,
        blue_team,
        red_team,
    })
}

fn parse_player<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<PlayerRecord, AppError> {
    Ok(PlayerRecord {
        name: next_token(tokens, line_no, "player name")?.to_string(),
        role: next_token(tokens, line_no, "role")?.to_string(),
        champion: next_token(tokens, line_no, "champion")?.to_string(),
        kills: next_u32(tokens, line_no, "kills")?,
        deaths: next_u32(tokens, line_no, "deaths")?,
        assists: next_u32(tokens, line_no, "assists")?,
        damage: next_u32(tokens, line_no, "damage")?,
        gold: next_u32(tokens, line_no, "gold")?,
        cs: next_u32(tokens, line_no, "cs")?,
        wards_placed: next_u32(tokens, line_no, "wards placed")?,
        wards_cleared: next_u32(tokens, line_no, "wards cleared")?,
        vision_score: next_u32(tokens, line_no, "vision score")?,
        level: next_u32(tokens, line_no, "level")?,
    })
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    field: &str,
) -> Result<&'a str, AppError> {
    tokens.next().ok_or_else(|| AppError::MalformedRecord {
        line: line_no,
        reason: format!("missing {}", field),
    })
}

fn next_u32<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    field: &str,
) -> Result<u32, AppError> {
    let token = next_token(tokens, line_no, field)?;
    token.parse().map_err(|_| AppError::MalformedRecord {
        line: line_no,
        reason: format!("{} is not a non-negative integer: '{}'", field, token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(name: &str, champion: &str, kills: u32) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            role: "Mid".to_string(),
            champion: champion.to_string(),
            kills,
            deaths: 2,
            assists: 4,
            damage: 12000,
            gold: 9000,
            cs: 180,
            wards_placed: 8,
            wards_cleared: 3,
            vision_score: 25,
            level: 16,
        }
    }

    fn sample_match(match_id: &str) -> MatchRecord {
        MatchRecord {
            match_id: match_id.to_string(),
            playtime: 32,
            blue_win: true,
            blue_team: (0..5u32).map(|i| player(&format!("Blue{}", i), "Ahri", i)).collect(),
            red_team: (0..5u32).map(|i| player(&format!("Red{}", i), "Zed", i)).collect(),
        }
    }

    #[test]
    fn line_round_trip() {
        let record = sample_match("NA1_100");
        let line = format_match_line(&record);
        assert_eq!(line.split_whitespace().count(), 3 + 10 * 13);

        let parsed = parse_match_line(1, &line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn truncated_line_is_malformed() {
        let record = sample_match("NA1_101");
        let line = format_match_line(&record);
        let truncated: String = line.split_whitespace().take(50).collect::<Vec<_>>().join(" ");

        let err = parse_match_line(7, &truncated).unwrap_err();
        match err {
            AppError::MalformedRecord { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn bad_win_flag_is_malformed() {
        let record = sample_match("NA1_102");
        let line = format_match_line(&record).replacen(" 32 1 ", " 32 2 ", 1);
        assert!(parse_match_line(1, &line).is_err());
    }

    #[test]
    fn load_skips_malformed_lines() {
        let dir = std::env::temp_dir().join("league_tracker_store_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("skips_malformed.txt");

        let good = format_match_line(&sample_match("NA1_103"));
        let content = format!("{}\nnot a match record\n{}\n", good, good);
        std::fs::write(&path, content).unwrap();

        let store = MatchStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.skipped_lines().len(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let path = std::env::temp_dir().join("league_tracker_store_test_missing.txt");
        let store = MatchStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert!(store.skipped_lines().is_empty());
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = std::env::temp_dir().join("league_tracker_store_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("round_trip.txt");

        let mut store = MatchStore::new();
        store.append(sample_match("NA1_104"));
        store.append(sample_match("NA1_105"));
        store.save(&path).unwrap();

        let loaded = MatchStore::load(&path).unwrap();
        assert_eq!(loaded.all(), store.all());

        std::fs::remove_file(&path).unwrap();
    }
}
