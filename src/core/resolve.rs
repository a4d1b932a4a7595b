//! Entity resolution against the season's reference extracts.

use crate::extract::Roster;
use crate::models::{MatchRecord, PlayerRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-player failures. These are collected, never propagated with `?`
/// past the player being resolved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("No player on player extract file for {name}")]
    PlayerNotFound { name: String },

    #[error("Could not find match id for teamId: {team_id}, roundDate: {round_date}, playerExtract: {player}")]
    MatchNotFound {
        team_id: i32,
        round_date: NaiveDate,
        player: PlayerRecord,
    },
}

/// Informal name → roster first name, matched case-insensitively.
pub fn apply_alias<'a>(first_name: &'a str, aliases: &'a BTreeMap<String, String>) -> &'a str {
    aliases
        .get(&first_name.to_lowercase())
        .map(String::as_str)
        .unwrap_or(first_name)
}

/// Resolve the name written on a scorecard to one roster entry.
///
/// The first token is the first name. When several players share that first
/// name and exactly two tokens were written, the second is the last initial;
/// otherwise the first roster candidate wins.
pub fn resolve_player<'r>(
    tokens: &[&str],
    roster: &'r Roster,
    aliases: &BTreeMap<String, String>,
) -> Result<&'r PlayerRecord, ResolveError> {
    let first_name = apply_alias(tokens.first().copied().unwrap_or_default(), aliases);
    let candidates = roster.candidates(first_name);

    let found = match (candidates, tokens) {
        ([], _) => None,
        (many @ [_, _, ..], [_, initial]) => many.iter().find(|p| p.has_last_initial(initial)),
        ([first, ..], _) => Some(first),
    };

    found.ok_or_else(|| ResolveError::PlayerNotFound {
        name: first_name.to_string(),
    })
}

/// First match of the week in which `team_id` plays.
pub fn resolve_match<'m>(
    week_matches: &'m [MatchRecord],
    team_id: i32,
    round_date: NaiveDate,
    player: &PlayerRecord,
) -> Result<&'m MatchRecord, ResolveError> {
    week_matches
        .iter()
        .find(|m| m.involves(team_id))
        .ok_or_else(|| ResolveError::MatchNotFound {
            team_id,
            round_date,
            player: player.clone(),
        })
}
