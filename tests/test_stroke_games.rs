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

fn round_of(players: Vec<Player>, cards: Vec<(&str, Scorecard)>) -> Round {
    let mut round = Round::new(players).unwrap();
    for (id, card) in cards {
        round = round.with_scores(id, card).unwrap();
    }
    round
}

fn without_cal(result: &GameResult) -> Vec<Payout> {
    result
        .payouts
        .iter()
        .filter(|p| p.from != "Cal" && p.to != "Cal")
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tax Man
// ---------------------------------------------------------------------------

#[test]
fn test_taxman_every_loser_pays_every_winner() {
    let round = round_of(
        players(4),
        vec![("p1", flat(4)), ("p2", flat(4)), ("p3", flat(6)), ("p4", flat(6))],
    );
    let config = GameConfig {
        tax_amount: Some(3.0),
        ..Default::default()
    };
    let result = run_game(&round, &GameEntry::with_config(GameMode::Taxman, config));
    assert_eq!(result.payouts.len(), 4);
    assert_eq!(result.net_of("Ann"), 6.0);
    assert_eq!(result.net_of("Dee"), -6.0);
}

#[test]
fn test_taxman_on_the_number_is_neutral() {
    // 90 on a tax man of 90
    let round = round_of(players(2), vec![("p1", flat(4)), ("p2", flat(5))]);
    let result = run_game(&round, &GameEntry::new(GameMode::Taxman));
    assert!(result.is_push());
}

#[test]
fn test_taxman_excludes_incomplete_and_zero_totals() {
    let mut partial = flat(4);
    partial.clear(17);
    let round = round_of(
        players(3),
        vec![("p1", partial), ("p2", flat(6)), ("p3", flat(0))],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Taxman));
    assert!(result.is_push());
    assert_eq!(result.net.len(), 3);
}

// ---------------------------------------------------------------------------
// Nassau
// ---------------------------------------------------------------------------

#[test]
fn test_nassau_leg_stakes() {
    let config = GameConfig {
        front_bet: Some(2.0),
        back_bet: Some(3.0),
        total_bet: Some(4.0),
        ..Default::default()
    };
    let round = round_of(players(2), vec![("p1", flat(4)), ("p2", flat(5))]);
    let result = run_game(&round, &GameEntry::with_config(GameMode::Nassau, config));
    let amounts: Vec<f64> = result.payouts.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![2.0, 3.0, 4.0]);
    assert_eq!(result.net_of("Ann"), 9.0);
}

#[test]
fn test_nassau_tied_low_pushes_leg() {
    let round = round_of(
        players(3),
        vec![("p1", flat(4)), ("p2", flat(4)), ("p3", flat(5))],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Nassau));
    assert!(result.is_push());
}

#[test]
fn test_nassau_incomplete_player_sits_out_leg_only() {
    let mut cal = flat(6);
    cal.clear(14);
    let round = round_of(
        players(3),
        vec![("p1", flat(4)), ("p2", flat(5)), ("p3", cal)],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Nassau));
    let cal_lines: Vec<&Payout> = result.payouts.iter().filter(|p| p.from == "Cal").collect();
    assert_eq!(cal_lines.len(), 1);
    assert_eq!(cal_lines[0].game, "nassau-front");
}

#[test]
fn test_nassau_adding_scores_keeps_other_payouts() {
    let mut partial = flat(6);
    partial.clear(14);
    let before = round_of(
        players(3),
        vec![
            ("p1", flat(4)),
            ("p2", HoleSheet::from_values((0..HOLES).map(|h| if h < 9 { 5 } else { 3 }))),
            ("p3", partial),
        ],
    );
    let after = round_of(
        players(3),
        vec![
            ("p1", flat(4)),
            ("p2", HoleSheet::from_values((0..HOLES).map(|h| if h < 9 { 5 } else { 3 }))),
            ("p3", flat(6)),
        ],
    );
    let entry = GameEntry::new(GameMode::Nassau);
    assert_eq!(
        without_cal(&run_game(&before, &entry)),
        without_cal(&run_game(&after, &entry))
    );
}

// ---------------------------------------------------------------------------
// Skins
// ---------------------------------------------------------------------------

#[test]
fn test_skins_skip_holes_missing_a_score() {
    let mut bob = flat(4);
    bob.clear(0);
    let round = round_of(players(2), vec![("p1", flat(4).with(0, 3)), ("p2", bob)]);
    let result = run_game(&round, &GameEntry::new(GameMode::Skins));
    assert!(result.is_push());
}

#[test]
fn test_skins_without_carryover() {
    let round = round_of(
        players(2),
        vec![("p1", flat(4).with(1, 3)), ("p2", flat(4))],
    );
    let carry = run_game(&round, &GameEntry::new(GameMode::Skins));
    // hole 1 ties, so with carryover hole 2 is worth two skins
    assert_eq!(carry.net_of("Ann"), 10.0);

    let config = GameConfig {
        carryover: Some(false),
        bet_per_skin: Some(2.0),
        ..Default::default()
    };
    let dead = run_game(&round, &GameEntry::with_config(GameMode::Skins, config));
    assert_eq!(dead.net_of("Ann"), 2.0);
}

#[test]
fn test_skins_unresolved_carryover_is_void() {
    let round = round_of(players(2), vec![("p1", flat(4)), ("p2", flat(4))]);
    let result = run_game(&round, &GameEntry::new(GameMode::Skins));
    assert!(result.is_push());
}

// ---------------------------------------------------------------------------
// Head to Head
// ---------------------------------------------------------------------------

#[test]
fn test_head_to_head_match_play_flat_stake() {
    let round = round_of(
        players(2),
        vec![("p1", flat(4).with(0, 3).with(1, 2)), ("p2", flat(4))],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::HeadToHead));
    assert_eq!(result.payouts.len(), 1);
    assert_eq!(result.payouts[0].amount, 5.0);
    assert_eq!(result.payouts[0].to, "Ann");
}

#[test]
fn test_head_to_head_stroke_play_pays_per_stroke() {
    let config = GameConfig {
        match_mode: Some(MatchMode::Stroke),
        ..Default::default()
    };
    let round = round_of(
        players(2),
        vec![("p1", flat(4).with(0, 3).with(1, 3)), ("p2", flat(4))],
    );
    let result = run_game(&round, &GameEntry::with_config(GameMode::HeadToHead, config));
    assert_eq!(result.net_of("Ann"), 10.0);
    assert_eq!(result.net_of("Bob"), -10.0);
}

#[test]
fn test_head_to_head_handicap_stroke_halves_hole() {
    let ps = vec![Player::new("p1", "Ann", 80), Player::new("p2", "Bob", 81)];
    // hole 4 is the hardest hole, so Bob's one-stroke allowance lands there
    let round = round_of(ps, vec![("p1", flat(4)), ("p2", flat(4).with(3, 5))]);

    let gross = run_game(&round, &GameEntry::new(GameMode::HeadToHead));
    assert_eq!(gross.net_of("Ann"), 5.0);

    let config = GameConfig {
        use_handicaps: Some(true),
        ..Default::default()
    };
    let net = run_game(&round, &GameEntry::with_config(GameMode::HeadToHead, config));
    assert!(net.is_push());
}

#[test]
fn test_head_to_head_press_settles_separately() {
    let round = round_of(
        players(3),
        vec![
            ("p1", flat(4).with(0, 3)),
            ("p2", flat(4)),
            ("p3", flat(4)),
        ],
    )
    .with_press(Press::new(PressGame::head_to_head("p2", "p1"), 1, 3, 2.0))
    .unwrap();
    let result = run_game(&round, &GameEntry::new(GameMode::HeadToHead));

    let presses: Vec<&Payout> = result
        .payouts
        .iter()
        .filter(|p| p.game == "headToHead-press:p2:p1")
        .collect();
    assert_eq!(presses.len(), 1);
    assert_eq!((presses[0].from.as_str(), presses[0].to.as_str()), ("Bob", "Ann"));
    assert_eq!(presses[0].amount, 2.0);
    // Ann beats both Bob and Cal, plus the press against Bob
    assert_eq!(result.net_of("Ann"), 12.0);
    assert_eq!(result.net_of("Cal"), -5.0);
}

#[test]
fn test_head_to_head_presses_keep_pairs_apart() {
    let round = round_of(
        players(3),
        vec![("p1", flat(4).with(0, 3)), ("p2", flat(4)), ("p3", flat(4))],
    )
    .with_press(Press::new(PressGame::head_to_head("p1", "p2"), 1, 2, 1.0))
    .unwrap()
    .with_press(Press::new(PressGame::head_to_head("p1", "p3"), 1, 2, 1.0))
    .unwrap();
    let result = run_game(&round, &GameEntry::new(GameMode::HeadToHead));
    let mut tags: Vec<&str> = result
        .payouts
        .iter()
        .filter(|p| p.game.starts_with("headToHead-press"))
        .map(|p| p.game.as_str())
        .collect();
    tags.sort_unstable();
    assert_eq!(tags, vec!["headToHead-press:p1:p2", "headToHead-press:p1:p3"]);
}

#[test]
fn test_head_to_head_missing_player_does_not_move_other_pairs() {
    let mut partial = flat(3);
    for hole in 5..HOLES {
        partial.clear(hole);
    }
    let ann = flat(4).with(0, 3).with(9, 5);
    let bob = flat(4).with(2, 3);
    let before = round_of(
        players(3),
        vec![("p1", ann.clone()), ("p2", bob.clone()), ("p3", partial)],
    );
    let after = round_of(players(3), vec![("p1", ann), ("p2", bob), ("p3", flat(3))]);
    let config = GameConfig {
        match_mode: Some(MatchMode::Stroke),
        ..Default::default()
    };
    let entry = GameEntry::with_config(GameMode::HeadToHead, config);
    assert_eq!(
        without_cal(&run_game(&before, &entry)),
        without_cal(&run_game(&after, &entry))
    );
}

// ---------------------------------------------------------------------------
// Stableford and Quota
// ---------------------------------------------------------------------------

#[test]
fn test_stableford_leader_collects_point_difference() {
    let round = round_of(
        players(3),
        vec![
            ("p1", flat(4).with(0, 3).with(1, 3)),
            ("p2", flat(4).with(0, 3)),
            ("p3", flat(5)),
        ],
    );
    let result = run_game(&round, &GameEntry::new(GameMode::Stableford));
    // points: Ann 38, Bob 37, Cal 18
    assert_eq!(result.net_of("Bob"), -1.0);
    assert_eq!(result.net_of("Cal"), -20.0);
    assert_eq!(result.net_of("Ann"), 21.0);
}

#[test]
fn test_stableford_shared_lead_pushes() {
    let round = round_of(
        players(3),
        vec![("p1", flat(4)), ("p2", flat(4)), ("p3", flat(5))],
    );
    assert!(run_game(&round, &GameEntry::new(GameMode::Stableford)).is_push());
}

#[test]
fn test_quota_measures_against_handicap() {
    let ps = vec![Player::new("p1", "Ann", 10), Player::new("p2", "Bob", 20)];
    let round = round_of(ps, vec![("p1", flat(4)), ("p2", flat(4))]);
    let result = run_game(&round, &GameEntry::new(GameMode::Quota));
    // both make 36 points; Ann's quota is 26, Bob's 16
    assert_eq!(result.payouts.len(), 1);
    assert_eq!(result.net_of("Bob"), 10.0);
    assert_eq!(result.net_of("Ann"), -10.0);
}

#[test]
fn test_quota_needs_a_full_round() {
    let ps = vec![Player::new("p1", "Ann", 10), Player::new("p2", "Bob", 20)];
    let mut partial = flat(4);
    partial.clear(10);
    let round = round_of(ps, vec![("p1", flat(4)), ("p2", partial)]);
    assert!(run_game(&round, &GameEntry::new(GameMode::Quota)).is_push());
}
