//! Roster construction and pre-run validation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TournamentError};
use crate::form::FormFactors;
use crate::seeding::PROMOTED_TEAMS;
use crate::standings::CROSS_GROUP_PLACES;
use crate::types::{Group, Team};

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;

/// A team as supplied by the roster source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub code: String,
    pub ranking: u32,
}

/// A named group of roster entries, in roster order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterGroup {
    pub name: String,
    pub teams: Vec<RosterEntry>,
}

/// Turn roster groups into playable groups.
///
/// Each team's starting form factor is looked up by code in `form_factors`.
/// A team without one is an error, as is a code used twice.
pub fn build_groups(roster: &[RosterGroup], form_factors: &FormFactors) -> Result<Vec<Group>> {
    let mut seen = HashSet::new();
    let mut groups = Vec::with_capacity(roster.len());

    for entry in roster {
        let mut teams = Vec::with_capacity(entry.teams.len());
        for team in &entry.teams {
            if !seen.insert(team.code.as_str()) {
                return Err(TournamentError::DuplicateTeam {
                    code: team.code.clone(),
                });
            }
            let form = form_factors.get(&team.code).copied().ok_or_else(|| {
                TournamentError::MissingFormFactor {
                    name: team.name.clone(),
                    code: team.code.clone(),
                }
            })?;
            teams.push(Team::new(&team.name, &team.code, team.ranking, form, &entry.name));
        }
        groups.push(Group::new(&entry.name, teams));
    }

    Ok(groups)
}

/// Check that the groups can produce a full knockout field.
///
/// Every group needs at least three teams for the cross-group ranking, and
/// the groups together must supply eight qualifiers.
pub fn validate_groups(groups: &[Group]) -> Result<()> {
    for group in groups {
        if group.teams.len() < CROSS_GROUP_PLACES {
            return Err(TournamentError::GroupTooSmall {
                group: group.name.clone(),
                found: group.teams.len(),
                required: CROSS_GROUP_PLACES,
            });
        }
    }

    let qualifiers = groups.len() * CROSS_GROUP_PLACES;
    if qualifiers < PROMOTED_TEAMS {
        return Err(TournamentError::NotEnoughQualifiers {
            found: qualifiers,
            required: PROMOTED_TEAMS,
        });
    }

    let mut seen = HashSet::new();
    for team in groups.iter().flat_map(|g| &g.teams) {
        if !seen.insert(team.code.as_str()) {
            return Err(TournamentError::DuplicateTeam {
                code: team.code.clone(),
            });
        }
    }

    Ok(())
}
