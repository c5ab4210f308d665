//! Plain-text report and JSON dump of a finished tournament

use std::fmt::Write as _;
use std::path::Path;

use tournament_core::{MatchResult, Team, TournamentOutcome};

use crate::error::{Result, RunnerError};

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

/// Render every stage of the outcome as text.
pub fn render_report(outcome: &TournamentOutcome) -> String {
    let mut report = String::new();

    report.push_str("=== Group Stage ===\n");
    for group in &outcome.groups {
        let _ = writeln!(report, "\nGroup {}:", group.name);
        for result in &group.matches {
            let _ = writeln!(
                report,
                "  {} {} : {} {}",
                result.team1, result.score1, result.score2, result.team2
            );
        }
    }

    report.push_str("\n=== Final Standings ===\n");
    for group in &outcome.groups {
        let _ = writeln!(report, "\nGroup {}:", group.name);
        let _ = writeln!(
            report,
            "  {:>2}  {:<20} {:>2} {:>2} {:>2} {:>7} {:>7} {:>5}",
            "#", "Team", "W", "L", "D", "Scored", "Allowed", "Diff"
        );
        for (rank, team) in group.teams.iter().enumerate() {
            let _ = writeln!(
                report,
                "  {:>2}. {:<20} {:>2} {:>2} {:>2} {:>7} {:>7} {:>+5}",
                rank + 1,
                team.name,
                team.wins,
                team.losses,
                team.draws,
                team.points_scored,
                team.points_allowed,
                team.point_differential()
            );
        }
    }

    report.push_str("\n=== Advancing Teams ===\n");
    for (rank, team) in outcome.seeding.promoted.iter().enumerate() {
        let _ = writeln!(report, "  {}. {}", rank + 1, describe(team));
    }
    match &outcome.seeding.eliminated {
        Some(team) => {
            let _ = writeln!(report, "Eliminated: {}", describe(team));
        }
        None => report.push_str("Eliminated: none\n"),
    }

    report.push_str("\n=== Pots ===\n");
    for pot in &outcome.seeding.pots {
        let _ = writeln!(
            report,
            "  {}: {}, {}",
            pot.name, pot.teams[0].name, pot.teams[1].name
        );
    }

    if !outcome.draw.conflicts.is_empty() {
        report.push_str("\n=== Draw Warnings ===\n");
        for conflict in &outcome.draw.conflicts {
            let _ = writeln!(
                report,
                "  {} and {} are both from group {} and meet in the quarterfinals",
                outcome.team_name(&conflict.team1),
                outcome.team_name(&conflict.team2),
                conflict.group
            );
        }
    }

    let knockout = &outcome.knockout;
    report.push_str("\n=== Quarterfinals ===\n");
    for result in &knockout.quarterfinals {
        push_game(&mut report, outcome, result);
    }
    report.push_str("\n=== Semifinals ===\n");
    for result in &knockout.semifinals {
        push_game(&mut report, outcome, result);
    }
    report.push_str("\n=== Third Place ===\n");
    push_game(&mut report, outcome, &knockout.third_place);
    report.push_str("\n=== Final ===\n");
    push_game(&mut report, outcome, &knockout.final_match);

    report.push_str("\n=== Medals ===\n");
    match outcome.medals() {
        Some(medals) => {
            let _ = writeln!(report, "  1. {}", outcome.team_name(&medals.gold));
            let _ = writeln!(report, "  2. {}", outcome.team_name(&medals.silver));
            let _ = writeln!(report, "  3. {}", outcome.team_name(&medals.bronze));
        }
        None => report.push_str("  undecided\n"),
    }

    report
}

fn describe(team: &Team) -> String {
    format!("{} ({}), group {}", team.name, team.code, team.group)
}

fn push_game(report: &mut String, outcome: &TournamentOutcome, result: &MatchResult) {
    let _ = writeln!(
        report,
        "  {} - {} ({}:{})",
        outcome.team_name(&result.team1),
        outcome.team_name(&result.team2),
        result.score1,
        result.score2
    );
}

/// Print the report to stdout
pub fn print_report(outcome: &TournamentOutcome) {
    print!("{}", render_report(outcome));
}

/// Write the whole outcome as pretty-printed JSON
pub fn save_outcome(outcome: &TournamentOutcome, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(outcome).map_err(|source| RunnerError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "outcome written");
    Ok(())
}
