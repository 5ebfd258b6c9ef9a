use golf_settle::*;

fn players(n: usize) -> Vec<Player> {
    ["Ann", "Bob", "Cal", "Dee"]
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, name)| Player::new(&format!("p{}", i + 1), name, 90))
        .collect()
}

fn flat(score: i32) -> Scorecard {
    HoleSheet::from_values([score; HOLES])
}

fn foursome(cards: [Scorecard; 4]) -> Round {
    let mut round = Round::new(players(4)).unwrap();
    for (i, card) in cards.into_iter().enumerate() {
        round = round.with_scores(&format!("p{}", i + 1), card).unwrap();
    }
    round
}

fn ids(raw: &[&str]) -> Vec<PlayerId> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Vegas
// ---------------------------------------------------------------------------

#[test]
fn test_vegas_losing_side_pays_point_difference() {
    let round = foursome([flat(4), flat(4).with(0, 5), flat(4).with(0, 5), flat(4).with(0, 5)]);
    let result = run_game(&round, &GameEntry::new(GameMode::Vegas));
    // 45 against 55 on the first hole
    assert_eq!(result.payouts.len(), 4);
    assert!(result.payouts.iter().all(|p| p.amount == 5.0));
    assert_eq!(result.net_of("Ann"), 10.0);
    assert_eq!(result.net_of("Bob"), 10.0);
    assert_eq!(result.net_of("Cal"), -10.0);
    assert_eq!(result.net_of("Dee"), -10.0);
}

#[test]
fn test_vegas_birdie_flips_opponent_number() {
    let round = foursome([flat(4).with(0, 3), flat(4).with(0, 5), flat(4), flat(4).with(0, 5)]);

    let plain = run_game(&round, &GameEntry::new(GameMode::Vegas));
    assert_eq!(plain.net_of("Ann"), 10.0);

    let config = GameConfig {
        flip_bird: Some(true),
        ..Default::default()
    };
    let flipped = run_game(&round, &GameEntry::with_config(GameMode::Vegas, config));
    // 35 against 54
    assert_eq!(flipped.net_of("Ann"), 19.0);
    assert_eq!(flipped.net_of("Dee"), -19.0);
}

#[test]
fn test_vegas_double_digit_goes_last() {
    let round = foursome([flat(4), flat(4).with(0, 5), flat(4).with(0, 10), flat(4)]);
    let result = run_game(&round, &GameEntry::new(GameMode::Vegas));
    // 45 against 410
    assert_eq!(result.net_of("Cal"), -365.0);
    assert_eq!(result.net_of("Ann"), 365.0);
}

#[test]
fn test_vegas_explicit_teams() {
    let round = foursome([flat(4), flat(4).with(0, 5), flat(4).with(0, 5), flat(4).with(0, 5)])
        .with_vegas_teams(&ids(&["p1", "p3"]), &ids(&["p2", "p4"]))
        .unwrap();
    let result = run_game(&round, &GameEntry::new(GameMode::Vegas));
    // 45 against 55 again, with Cal now on the winning side
    assert_eq!(result.net_of("Cal"), 10.0);
    assert_eq!(result.net_of("Bob"), -10.0);
}

#[test]
fn test_vegas_skips_incomplete_holes() {
    let mut dee = flat(4);
    dee.clear(0);
    let round = foursome([flat(4), flat(4).with(0, 5), flat(4).with(0, 5), dee]);
    assert!(run_game(&round, &GameEntry::new(GameMode::Vegas)).is_push());
}

#[test]
fn test_vegas_uneven_teams_push() {
    let round = Round::new(players(3))
        .unwrap()
        .with_scores("p1", flat(5))
        .unwrap()
        .with_scores("p2", flat(4))
        .unwrap()
        .with_scores("p3", flat(4))
        .unwrap()
        .with_vegas_teams(&ids(&["p1"]), &ids(&["p2", "p3"]))
        .unwrap();
    assert!(run_game(&round, &GameEntry::new(GameMode::Vegas)).is_push());
}

#[test]
fn test_vegas_six_player_roster_pushes() {
    let names = ["Ann", "Bob", "Cal", "Dee", "Eve", "Fay"];
    let six: Vec<Player> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Player::new(&format!("p{}", i + 1), name, 90))
        .collect();
    let mut round = Round::new(six).unwrap();
    for (i, score) in [4, 4, 4, 5, 5, 5].into_iter().enumerate() {
        round = round.with_scores(&format!("p{}", i + 1), flat(score)).unwrap();
    }
    assert!(run_game(&round, &GameEntry::new(GameMode::Vegas)).is_push());
}

#[test]
fn test_vegas_skips_holes_too_large_to_read() {
    let huge = flat(4).with(0, i32::MAX);
    let round = foursome([huge.clone(), huge, flat(4).with(1, 5), flat(4)]);
    let result = run_game(&round, &GameEntry::new(GameMode::Vegas));
    // hole 1 is dropped; hole 2 is 44 against 45
    assert_eq!(result.net_of("Ann"), 1.0);
    assert_eq!(result.net_of("Cal"), -1.0);

    let all_huge = foursome([flat(i32::MAX), flat(i32::MAX), flat(4), flat(4)]);
    assert!(run_game(&all_huge, &GameEntry::new(GameMode::Vegas)).is_push());
}

// ---------------------------------------------------------------------------
// Best Ball
// ---------------------------------------------------------------------------

fn best_ball_round() -> Round {
    foursome([
        flat(4).with(0, 3).with(2, 2),
        flat(4),
        flat(4).with(1, 3),
        flat(4),
    ])
}

#[test]
fn test_best_ball_stroke_play_by_default() {
    let result = run_game(&best_ball_round(), &GameEntry::new(GameMode::BestBall));
    // low balls: +1, -1, +2
    assert_eq!(result.net_of("Ann"), 10.0);
    assert_eq!(result.net_of("Bob"), 10.0);
    assert_eq!(result.net_of("Cal"), -10.0);
}

#[test]
fn test_best_ball_match_play_counts_holes() {
    let config = GameConfig {
        match_mode: Some(MatchMode::Match),
        ..Default::default()
    };
    let result = run_game(
        &best_ball_round(),
        &GameEntry::with_config(GameMode::BestBall, config),
    );
    assert_eq!(result.net_of("Ann"), 5.0);
    assert_eq!(result.net_of("Dee"), -5.0);
}

#[test]
fn test_best_ball_needs_teams() {
    let round = Round::new(players(3))
        .unwrap()
        .with_scores("p1", flat(3))
        .unwrap();
    assert!(run_game(&round, &GameEntry::new(GameMode::BestBall)).is_push());
}

// ---------------------------------------------------------------------------
// Scotch
// ---------------------------------------------------------------------------

#[test]
fn test_scotch_low_ball_and_low_total() {
    let round = foursome([flat(4).with(0, 3), flat(4), flat(4), flat(4)]);
    let result = run_game(&round, &GameEntry::new(GameMode::Scotch));
    assert_eq!(result.net_of("Ann"), 5.0);
    assert_eq!(result.net_of("Cal"), -5.0);
}

#[test]
fn test_scotch_tied_low_ball_scores_total_only() {
    let round = foursome([
        flat(4).with(0, 3),
        flat(4).with(0, 5),
        flat(4).with(0, 3),
        flat(4),
    ]);
    let result = run_game(&round, &GameEntry::new(GameMode::Scotch));
    assert_eq!(result.net_of("Cal"), 3.0);
    assert_eq!(result.net_of("Dee"), 3.0);
    assert_eq!(result.net_of("Ann"), -3.0);
}

// ---------------------------------------------------------------------------
// Sixes
// ---------------------------------------------------------------------------

#[test]
fn test_sixes_rotating_partners() {
    // Bob wins a hole in every segment, so his side takes all three
    let round = foursome([
        flat(4),
        flat(4).with(0, 3).with(6, 3).with(12, 3),
        flat(4),
        flat(4),
    ]);
    let result = run_game(&round, &GameEntry::new(GameMode::Sixes));
    assert_eq!(result.payouts.len(), 12);
    assert_eq!(result.net_of("Bob"), 15.0);
    assert_eq!(result.net_of("Ann"), -5.0);
    assert_eq!(result.net_of("Cal"), -5.0);
    assert_eq!(result.net_of("Dee"), -5.0);
}

#[test]
fn test_sixes_segment_pays_one_stake_regardless_of_margin() {
    let round = foursome([
        flat(4).with(0, 3).with(1, 3).with(2, 3),
        flat(4),
        flat(4),
        flat(4),
    ]);
    let result = run_game(&round, &GameEntry::new(GameMode::Sixes));
    assert_eq!(result.net_of("Ann"), 5.0);
    assert_eq!(result.net_of("Cal"), -5.0);
}

#[test]
fn test_sixes_requires_four_players() {
    let round = Round::new(players(3))
        .unwrap()
        .with_scores("p1", flat(3))
        .unwrap()
        .with_scores("p2", flat(4))
        .unwrap()
        .with_scores("p3", flat(5))
        .unwrap();
    assert!(run_game(&round, &GameEntry::new(GameMode::Sixes)).is_push());
}

// ---------------------------------------------------------------------------
// Wolf
// ---------------------------------------------------------------------------

fn wolf_round(call: WolfHole, cards: [Scorecard; 4]) -> Round {
    let mut annotations = Annotations::default();
    annotations.wolf.set(0, call);
    foursome(cards).with_annotations(annotations)
}

#[test]
fn test_lone_wolf_loss_pays_double() {
    let round = wolf_round(
        WolfHole::lone("p1"),
        [flat(4).with(0, 5), flat(4), flat(4), flat(4)],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Wolf));
    assert_eq!(result.net_of("Ann"), -6.0);
    assert!(result.payouts.iter().all(|p| p.amount == 2.0));
}

#[test]
fn test_partnered_wolf_flat_bet_per_pair() {
    let round = wolf_round(
        WolfHole::partnered("p1", "p2"),
        [flat(4).with(0, 3), flat(4), flat(4), flat(4)],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Wolf));
    assert_eq!(result.payouts.len(), 4);
    assert_eq!(result.net_of("Ann"), 2.0);
    assert_eq!(result.net_of("Bob"), 2.0);
    assert_eq!(result.net_of("Cal"), -2.0);
}

#[test]
fn test_wolf_tie_pushes() {
    let round = wolf_round(WolfHole::lone("p1"), [flat(4), flat(4), flat(4), flat(4)]);
    assert!(run_game(&round, &GameEntry::new(GameMode::Wolf)).is_push());
}

#[test]
fn test_wolf_hole_missing_score_skipped() {
    let mut dee = flat(4);
    dee.clear(0);
    let round = wolf_round(WolfHole::lone("p1"), [flat(4).with(0, 3), flat(4), flat(4), dee]);
    assert!(run_game(&round, &GameEntry::new(GameMode::Wolf)).is_push());
}

#[test]
fn test_wolf_custom_multipliers() {
    let config = GameConfig {
        bet_amount: Some(3.0),
        lone_wolf_win: Some(2.0),
        ..Default::default()
    };
    let round = wolf_round(
        WolfHole::lone("p4"),
        [flat(4), flat(4), flat(4), flat(4).with(0, 2)],
    );
    let result = run_game(&round, &GameEntry::with_config(GameMode::Wolf, config));
    assert_eq!(result.net_of("Dee"), 18.0);
}
