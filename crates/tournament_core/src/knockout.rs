//! Knockout bracket: quarterfinals, semifinals, third place and final

use crate::draw::Draw;
use crate::error::{Result, Stage, TournamentError};
use crate::random::RandomSource;
use crate::simulator::{pair_mut, MatchSimulator};
use crate::types::{Fixture, KnockoutStage, MatchResult, Team};

#[cfg(test)]
#[path = "knockout_tests.rs"]
mod knockout_tests;

/// Quarterfinal winner indices that meet in each semifinal
pub const SEMIFINAL_PAIRINGS: [(usize, usize); 2] = [(0, 2), (1, 3)];

/// Play the bracket to completion.
///
/// `field` holds the promoted teams; their form factors keep moving from
/// round to round. Every game is decided, so each round's winners feed the
/// next directly: QF winners 1 v 3 and 2 v 4 in the semifinals, semifinal
/// winners in the final, semifinal losers in the third-place match.
pub fn simulate_knockout<R: RandomSource + ?Sized>(
    draw: &Draw,
    field: &mut [Team],
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<KnockoutStage> {
    let mut quarterfinals = Vec::with_capacity(4);
    for fixture in &draw.quarterfinals {
        quarterfinals.push(play(fixture, Stage::Quarterfinal, field, simulator, rng)?);
    }
    let qf_winners: Vec<String> = quarterfinals.iter().map(|m| decided(m).0).collect();

    let mut semifinals = Vec::with_capacity(2);
    for (first, second) in SEMIFINAL_PAIRINGS {
        let fixture = Fixture::new(&qf_winners[first], &qf_winners[second]);
        semifinals.push(play(&fixture, Stage::Semifinal, field, simulator, rng)?);
    }

    let (finalist1, bronze1) = decided(&semifinals[0]);
    let (finalist2, bronze2) = decided(&semifinals[1]);

    // the final is played before the third-place match
    let final_match = play(
        &Fixture::new(&finalist1, &finalist2),
        Stage::Final,
        field,
        simulator,
        rng,
    )?;
    let third_place = play(
        &Fixture::new(&bronze1, &bronze2),
        Stage::ThirdPlace,
        field,
        simulator,
        rng,
    )?;

    let (champion, _) = decided(&final_match);
    let (bronze, _) = decided(&third_place);
    tracing::info!(champion = %champion, bronze = %bronze, "knockout stage complete");

    Ok(KnockoutStage {
        quarterfinals,
        semifinals,
        third_place,
        final_match,
    })
}

/// (winner, loser) of a knockout game by score comparison
fn decided(result: &MatchResult) -> (String, String) {
    if result.score1 > result.score2 {
        (result.team1.clone(), result.team2.clone())
    } else {
        (result.team2.clone(), result.team1.clone())
    }
}

fn play<R: RandomSource + ?Sized>(
    fixture: &Fixture,
    stage: Stage,
    field: &mut [Team],
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<MatchResult> {
    let i = position(field, &fixture.team1, stage)?;
    let j = position(field, &fixture.team2, stage)?;
    if i == j {
        return Err(TournamentError::DuplicateTeam {
            code: fixture.team1.clone(),
        });
    }
    let (team1, team2) = pair_mut(field, i, j);
    let result = simulator.knockout_match(team1, team2, rng);
    tracing::debug!(
        stage = %stage,
        team1 = %result.team1,
        team2 = %result.team2,
        score1 = result.score1,
        score2 = result.score2,
        "knockout result"
    );
    Ok(result)
}

fn position(field: &[Team], code: &str, stage: Stage) -> Result<usize> {
    field
        .iter()
        .position(|t| t.code == code)
        .ok_or_else(|| TournamentError::UnknownTeam {
            code: code.to_string(),
            stage,
        })
}
