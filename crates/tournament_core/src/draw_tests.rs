use super::*;

fn team(code: &str, group: &str) -> Team {
    Team::new(code, code, 1, 1.0, group)
}

fn pot(name: &str, first: Team, second: Team) -> Pot {
    Pot {
        name: name.to_string(),
        teams: [first, second],
    }
}

fn pairs(draw: &Draw) -> Vec<(&str, &str)> {
    draw.quarterfinals
        .iter()
        .map(|f| (f.team1.as_str(), f.team2.as_str()))
        .collect()
}

#[test]
fn pots_pair_d_with_g_and_e_with_f() {
    let pots = [
        pot("Pot D", team("D1", "A"), team("D2", "B")),
        pot("Pot E", team("E1", "C"), team("E2", "A")),
        pot("Pot F", team("F1", "B"), team("F2", "C")),
        pot("Pot G", team("G1", "C"), team("G2", "A")),
    ];

    let draw = draw_from_pots(&pots);

    assert_eq!(
        pairs(&draw),
        vec![("D1", "G1"), ("D2", "G2"), ("E1", "F1"), ("E2", "F2")]
    );
    assert!(draw.conflicts.is_empty());
}

#[test]
fn same_group_pairing_is_swapped_away() {
    let pots = [
        pot("Pot D", team("D1", "A"), team("D2", "B")),
        pot("Pot E", team("E1", "C"), team("E2", "B")),
        pot("Pot F", team("F1", "C"), team("F2", "A")),
        pot("Pot G", team("G1", "A"), team("G2", "C")),
    ];

    let draw = draw_from_pots(&pots);

    assert_eq!(
        pairs(&draw),
        vec![("D1", "G2"), ("D2", "G1"), ("E1", "F2"), ("E2", "F1")]
    );
    assert!(draw.conflicts.is_empty());
}

#[test]
fn conflict_without_valid_swap_is_reported_not_fatal() {
    // swapping G1 and G2 would only move the group A clash to D1 vs G2
    let pots = [
        pot("Pot D", team("D1", "A"), team("D2", "B")),
        pot("Pot E", team("E1", "C"), team("E2", "B")),
        pot("Pot F", team("F1", "A"), team("F2", "C")),
        pot("Pot G", team("G1", "A"), team("G2", "A")),
    ];

    let draw = draw_from_pots(&pots);

    assert_eq!(pairs(&draw)[..2], [("D1", "G1"), ("D2", "G2")]);
    assert_eq!(
        draw.conflicts,
        vec![DrawConflict {
            team1: "D1".to_string(),
            team2: "G1".to_string(),
            group: "A".to_string(),
        }]
    );
}

#[test]
fn separate_groups_checks_both_positions_before_swapping() {
    let top = vec![team("D1", "A"), team("D2", "C")];
    let mut bottom = vec![team("G1", "A"), team("G2", "C")];

    separate_groups(&top, &mut bottom);

    assert_eq!(bottom[0].code, "G2");
    assert_eq!(bottom[1].code, "G1");
}

#[test]
fn quarterfinals_avoid_same_group_whenever_a_swap_exists() {
    let groups = ["A", "B", "C"];
    for a0 in groups {
        for a1 in groups {
            for b0 in groups {
                for b1 in groups {
                    let top = [team("T0", a0), team("T1", a1)];
                    let mut bottom = [team("B0", b0), team("B1", b1)];
                    let straight_ok = a0 != b0 && a1 != b1;
                    let swapped_ok = a0 != b1 && a1 != b0;

                    separate_groups(&top, &mut bottom);

                    let clean = top[0].group != bottom[0].group && top[1].group != bottom[1].group;
                    if straight_ok || swapped_ok {
                        assert!(clean, "{a0}{a1} vs {b0}{b1} left a conflict");
                    }
                }
            }
        }
    }
}

#[test]
fn draw_uses_seeding_pots() {
    let ranking: Vec<Team> = ["A", "B", "C", "A", "B", "C", "A", "B"]
        .iter()
        .enumerate()
        .map(|(i, g)| team(&format!("S{}", i + 1), g))
        .collect();
    let seeding = crate::seeding::build_seeding(&ranking).unwrap();

    let draw = draw_quarterfinals(&seeding);

    assert_eq!(draw.quarterfinals[0].team1, "S1");
    assert_eq!(draw.quarterfinals[2].team1, "S3");
    for fixture in &draw.quarterfinals {
        let g1 = &ranking.iter().find(|t| t.code == fixture.team1).unwrap().group;
        let g2 = &ranking.iter().find(|t| t.code == fixture.team2).unwrap().group;
        assert_ne!(g1, g2);
    }
}
