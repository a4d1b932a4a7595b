use crate::export::FlatRecord;

/// Foursome size on a physical scorecard.
pub const FOURSOME: usize = 4;

/// A scorecard row: who played, with what handicap, and for which team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRoundEntry {
    pub name_on_card: String,
    pub handicap_on_card: i32,
    /// Overrides the roster team when positive.
    pub team_id_for_round: Option<i32>,
}

impl RawRoundEntry {
    pub fn new(name_on_card: impl Into<String>, handicap_on_card: i32) -> Self {
        Self {
            name_on_card: name_on_card.into(),
            handicap_on_card,
            team_id_for_round: None,
        }
    }

    pub fn with_team(mut self, team_id: i32) -> Self {
        self.team_id_for_round = Some(team_id);
        self
    }

    pub fn name_tokens(&self) -> Vec<&str> {
        self.name_on_card.split_whitespace().collect()
    }
}

/// Players sharing one physical match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPlayers {
    pub players: Vec<RawRoundEntry>,
}

impl MatchPlayers {
    pub fn is_full(&self) -> bool {
        self.players.len() >= FOURSOME
    }
}

/// Output row of the rounds import file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub player_id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub handicap: f64,
}

impl Round {
    pub const HEADER: [&'static str; 4] = ["player_id", "match_id", "team_id", "handicap"];
}

impl FlatRecord for Round {
    fn fields(&self) -> Vec<String> {
        vec![
            self.player_id.to_string(),
            self.match_id.to_string(),
            self.team_id.to_string(),
            format!("{:.1}", self.handicap),
        ]
    }
}

/// Resolved rounds plus every per-player failure, in visit order.
#[derive(Debug, Clone, Default)]
pub struct SeasonRoundResult {
    pub rounds: Vec<Round>,
    pub errors: Vec<String>,
}

impl SeasonRoundResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
