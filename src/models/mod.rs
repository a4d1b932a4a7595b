pub mod matchup;
pub mod player;
pub mod round;
pub mod week;

pub use matchup::{MatchRecord, MatchupRow, TwoTeam};
pub use player::PlayerRecord;
pub use round::{MatchPlayers, RawRoundEntry, Round, SeasonRoundResult};
pub use week::{WeekRecord, WeekRow};
