use crate::export::FlatRecord;

/// One row of the match extract: `matchId,weekId,team1Id,team2Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_id: i32,
    pub week_id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
}

impl MatchRecord {
    pub fn involves(&self, team_id: i32) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// Two team names sharing a tee time in the same week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoTeam {
    pub team1: Option<String>,
    pub team2: Option<String>,
}

impl TwoTeam {
    /// Fills the first free slot; a third team overwrites the second slot.
    pub fn add_team(&mut self, team: &str) {
        if is_blank(&self.team1) {
            self.team1 = Some(team.to_string());
        } else {
            self.team2 = Some(team.to_string());
        }
    }

    pub fn is_full(&self) -> bool {
        !is_blank(&self.team1) && !is_blank(&self.team2)
    }
}

fn is_blank(slot: &Option<String>) -> bool {
    slot.as_deref().is_none_or(|s| s.trim().is_empty())
}

/// Row of the matchups import file: `<weekId>,<team1Id>,<team2Id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchupRow {
    pub week_id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
}

impl MatchupRow {
    pub const HEADER: [&'static str; 3] = ["week_id", "team_1", "team_2"];
}

impl FlatRecord for MatchupRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.week_id.to_string(),
            self.team1_id.to_string(),
            self.team2_id.to_string(),
        ]
    }
}
