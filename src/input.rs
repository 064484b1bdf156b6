use crate::error::AppError;
use crate::model::{MatchRecord, PlayerRecord, TEAM_SIZE};
use std::io::{self, BufRead, Write};

/// Collects one full match record from interactive prompts. Values are
/// accepted as entered; beyond integer parsing there is no validation.
pub fn read_match(input: &mut impl BufRead) -> Result<MatchRecord, AppError> {
    let match_id = prompt(input, "Enter match ID: ")?;
    let playtime = prompt(input, "Enter game duration (in minutes): ")?
        .parse()
        .map_err(|_| AppError::InvalidInput("duration must be a non-negative integer".to_string()))?;
    let blue_win = match prompt(input, "Did the Blue Team win? (1 for Yes, 0 for No): ")?.as_str() {
        "1" => true,
        "0" => false,
        other => {
            return Err(AppError::InvalidInput(format!(
                "expected 1 or 0, got '{}'",
                other
            )))
        }
    };

    println!("Enter data for Blue Team:");
    let blue_team = read_team(input)?;
    println!("Enter data for Red Team:");
    let red_team = read_team(input)?;

    Ok(MatchRecord {
        match_id,
        playtime,
        blue_win,
        blue_team,
        red_team,
    })
}

fn read_team(input: &mut impl BufRead) -> Result<Vec<PlayerRecord>, AppError> {
    let mut team = Vec::with_capacity(TEAM_SIZE);
    for i in 1..=TEAM_SIZE {
        let line = prompt(
            input,
            &format!(
                "Player {} (Name Role Champ Kills Deaths Assists Damage Gold CS \
                 WardsPlaced WardsCleared VisionScore Level): ",
                i
            ),
        )?;
        team.push(parse_player_line(&line)?);
    }
    Ok(team)
}

fn parse_player_line(line: &str) -> Result<PlayerRecord, AppError> {
    let mut fields = line.split_whitespace();
    let mut next_field = |name: &str| {
        fields
            .next()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput(format!("missing {}", name)))
    };

    let name = next_field("name")?;
    let role = next_field("role")?;
    let champion = next_field("champion")?;

    let mut numbers = [0u32; 10];
    for (slot, field) in numbers.iter_mut().zip([
        "kills",
        "deaths",
        "assists",
        "damage",
        "gold",
        "cs",
        "wards placed",
        "wards cleared",
        "vision score",
        "level",
    ]) {
        *slot = next_field(field)?.parse().map_err(|_| {
            AppError::InvalidInput(format!("{} must be a non-negative integer", field))
        })?;
    }

    Ok(PlayerRecord {
        name,
        role,
        champion,
        kills: numbers[0],
        deaths: numbers[1],
        assists: numbers[2],
        damage: numbers[3],
        gold: numbers[4],
        cs: numbers[5],
        wards_placed: numbers[6],
        wards_cleared: numbers[7],
        vision_score: numbers[8],
        level: numbers[9],
    })
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, AppError> {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| AppError::InvalidInput(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Err(AppError::InvalidInput("unexpected end of input".to_string()));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scripted_match() -> String {
        let mut lines = vec!["NA1_200".to_string(), "28".to_string(), "0".to_string()];
        for i in 0..10 {
            let side = if i < 5 { "B" } else { "R" };
            lines.push(format!(
                "{side}{i} Mid Ahri {i} 2 4 12000 9000 180 8 3 25 16"
            ));
        }
        lines.join("\n") + "\n"
    }

    #[test]
    fn reads_full_match() {
        let script = scripted_match();
        let mut input = script.as_bytes();

        let record = read_match(&mut input).unwrap();
        assert_eq!(record.match_id, "NA1_200");
        assert_eq!(record.playtime, 28);
        assert!(!record.blue_win);
        assert_eq!(record.blue_team.len(), TEAM_SIZE);
        assert_eq!(record.red_team.len(), TEAM_SIZE);
        assert_eq!(record.blue_team[0].name, "B0");
        assert_eq!(record.red_team[4].name, "R9");
        assert_eq!(record.red_team[4].kills, 9);
    }

    #[test]
    fn rejects_non_numeric_stat() {
        let err = parse_player_line("Ann Mid Ahri five 0 3 10000 8000 150 10 2 20 18").unwrap_err();
        match err {
            AppError::InvalidInput(reason) => assert!(reason.contains("kills")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_truncated_player_line() {
        assert!(parse_player_line("Ann Mid Ahri 5 0").is_err());
    }

    #[test]
    fn rejects_early_end_of_input() {
        let mut input = "NA1_201\n".as_bytes();
        assert!(read_match(&mut input).is_err());
    }
}
