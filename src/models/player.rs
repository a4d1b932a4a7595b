use std::fmt;

/// One row of the player extract:
/// `playerId,firstName,lastName,email,handicap,phone,teamId`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub handicap: f64,
    pub phone: String,
    pub team_id: i32,
}

impl PlayerRecord {
    /// True when the last name starts with `initial` (case-insensitive).
    pub fn has_last_initial(&self, initial: &str) -> bool {
        let initial = initial.trim_end_matches('.');
        let mut chars = initial.chars();
        match (chars.next(), chars.next(), self.last_name.chars().next()) {
            (Some(i), None, Some(l)) => i.to_lowercase().eq(l.to_lowercase()),
            _ => false,
        }
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlayerRecord[id={}, name={} {}, teamId={}]",
            self.player_id, self.first_name, self.last_name, self.team_id
        )
    }
}
