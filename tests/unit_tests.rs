// Unit tests for Mutual Match

use std::collections::HashSet;
use mutual_match::core::{
    eligibility::check_selections,
    graph::SelectionGraph,
    resolver::MatchResolver,
    roster::parse_roster,
};
use mutual_match::models::{Gender, MutualMatch, Participant, ParticipantId, Rank, Selection, SelectionEntry};

fn graph(edges: &[(ParticipantId, ParticipantId, Rank)]) -> SelectionGraph {
    edges
        .iter()
        .map(|&(selector_id, selected_id, rank)| Selection { selector_id, selected_id, rank })
        .collect()
}

/// Deterministic pseudo-random selection sets, enough variety to cover
/// one-sided, mutual and dense cases.
fn generated_edges(seed: u64, participants: i64) -> Vec<(ParticipantId, ParticipantId, Rank)> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        state >> 33
    };

    let mut edges = Vec::new();
    for selector in 1..=participants {
        for selected in 1..=participants {
            if selector != selected && next() % 3 == 0 {
                edges.push((selector, selected, (next() % 5) as Rank));
            }
        }
    }
    edges
}

#[test]
fn test_scenario_single_mutual_pair() {
    let result = MatchResolver::new().resolve(&[1, 2], &graph(&[(1, 2, 1), (2, 1, 1)]));

    assert_eq!(
        result.matches,
        vec![MutualMatch { participant1_id: 1, participant2_id: 2, rank1: 1, rank2: 1 }]
    );
}

#[test]
fn test_scenario_one_sided() {
    let result = MatchResolver::new().resolve(&[1, 2], &graph(&[(1, 2, 1)]));
    assert!(result.matches.is_empty());
}

#[test]
fn test_scenario_chain_of_mutual_pairs() {
    // A=1, B=2, C=3: A<->B and B<->C
    let edges = graph(&[(1, 2, 1), (2, 1, 2), (2, 3, 1), (3, 2, 1)]);
    let result = MatchResolver::new().resolve(&[1, 2, 3], &edges);

    let pairs: HashSet<_> = result
        .matches
        .iter()
        .map(|m| (m.participant1_id, m.participant2_id))
        .collect();

    assert_eq!(result.matches.len(), 2);
    assert_eq!(pairs, HashSet::from([(1, 2), (2, 3)]));
}

#[test]
fn test_pair_present_iff_both_directions_selected() {
    for seed in 1..20 {
        let edges = generated_edges(seed, 8);
        let graph = graph(&edges);
        let ids: Vec<ParticipantId> = (1..=8).collect();
        let result = MatchResolver::new().resolve(&ids, &graph);

        let found: HashSet<_> = result
            .matches
            .iter()
            .map(|m| (m.participant1_id, m.participant2_id))
            .collect();

        let mut expected = HashSet::new();
        for a in 1..=8 {
            for b in (a + 1)..=8 {
                if graph.rank(a, b).is_some() && graph.rank(b, a).is_some() {
                    expected.insert((a, b));
                }
            }
        }

        assert_eq!(found, expected, "seed {}", seed);
        assert_eq!(found.len(), result.matches.len(), "duplicate pair for seed {}", seed);
    }
}

#[test]
fn test_ranks_assigned_from_lower_id_perspective() {
    for seed in 1..10 {
        let graph = graph(&generated_edges(seed, 10));
        let ids: Vec<ParticipantId> = (1..=10).rev().collect();

        for m in MatchResolver::new().resolve(&ids, &graph).matches {
            assert!(m.participant1_id < m.participant2_id);
            assert_eq!(Some(m.rank1), graph.rank(m.participant1_id, m.participant2_id));
            assert_eq!(Some(m.rank2), graph.rank(m.participant2_id, m.participant1_id));
        }
    }
}

#[test]
fn test_scan_order_does_not_change_result_set() {
    let graph = graph(&generated_edges(42, 12));
    let forward: Vec<ParticipantId> = (1..=12).collect();
    let backward: Vec<ParticipantId> = (1..=12).rev().collect();

    let resolver = MatchResolver::new();
    let a: HashSet<_> = resolver.resolve(&forward, &graph).matches.into_iter().collect();
    let b: HashSet<_> = resolver.resolve(&backward, &graph).matches.into_iter().collect();

    assert_eq!(a, b);
}

#[test]
fn test_submission_then_resolution_respects_gender_pool() {
    let pool = vec![
        Participant {
            id: 1,
            first_name: "Adam".to_string(),
            gender: Gender::Male,
            email: "adam@example.com".to_string(),
            unique_token: "t1".to_string(),
        },
        Participant {
            id: 2,
            first_name: "Bea".to_string(),
            gender: Gender::Female,
            email: "bea@example.com".to_string(),
            unique_token: "t2".to_string(),
        },
    ];

    let adam = check_selections(&pool[0], &[SelectionEntry { id: 2, rank: 1 }], &pool).unwrap();
    let bea = check_selections(&pool[1], &[SelectionEntry { id: 1, rank: 3 }], &pool).unwrap();

    let mut graph = SelectionGraph::new();
    for pick in adam {
        graph.insert(1, pick.selected_id, pick.rank);
    }
    for pick in bea {
        graph.insert(2, pick.selected_id, pick.rank);
    }

    let result = MatchResolver::new().resolve(&[1, 2], &graph);
    assert_eq!(
        result.matches,
        vec![MutualMatch { participant1_id: 1, participant2_id: 2, rank1: 1, rank2: 3 }]
    );
}

#[test]
fn test_roster_mixed_rows() {
    let csv = "id,first_name,gender,email\n\
               1,Adam,male,adam@example.com\n\
               2,Bea,Female,bea@example.com\n\
               3,Cy,robot,cy@example.com\n\
               ,Dee,female,dee@example.com\n";

    let rows = parse_roster(csv.as_bytes()).unwrap();

    assert_eq!(rows.len(), 4);
    assert!(rows[0].is_ok());
    assert_eq!(rows[1].as_ref().unwrap().gender, Gender::Female);
    assert_eq!(rows[2], Err("Invalid gender for ID 3: robot".to_string()));
    assert!(rows[3].is_err());
}
