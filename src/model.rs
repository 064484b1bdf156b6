/// Players per side in a 5v5 match.
pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub role: String,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage: u32,
    pub gold: u32,
    pub cs: u32,
    pub wards_placed: u32,
    pub wards_cleared: u32,
    pub vision_score: u32,
    pub level: u32,
}

/// One completed match. The two team fields are explicit; blue's win flag is
/// stored directly and red's result is its complement (no draws).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_id: String,
    pub playtime: u32,
    pub blue_win: bool,
    pub blue_team: Vec<PlayerRecord>,
    pub red_team: Vec<PlayerRecord>,
}

impl MatchRecord {
    /// Sum of one side's kills, the kill-participation denominator.
    pub fn team_kills(team: &[PlayerRecord]) -> u32 {
        team.iter().map(|p| p.kills).sum()
    }
}
