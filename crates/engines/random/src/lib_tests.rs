use super::*;
use othello_core::legal_moves;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos, Side::Black, SearchLimits::default());

    let mv = result.best_move.unwrap();
    assert!(legal_moves(&pos, Side::Black).contains(&mv));
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let pos: Position = "\
        B B - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - W"
        .parse()
        .unwrap();

    let result = engine.search(&pos, Side::White, SearchLimits::default());

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::with_seed(7);
    let mut b = RandomEngine::with_seed(7);
    let mut pos = Position::startpos();
    let mut side = Side::Black;

    while !pos.is_game_over() {
        let ma = a.search(&pos, side, SearchLimits::default()).best_move;
        let mb = b.search(&pos, side, SearchLimits::default()).best_move;
        assert_eq!(ma, mb);
        if let Some(mv) = ma {
            pos.play(mv, side).unwrap();
        }
        side = side.opponent();
    }
}

#[test]
fn random_engine_eventually_tries_every_opening() {
    let mut engine = RandomEngine::with_seed(1);
    let pos = Position::startpos();
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        if let Some(mv) = engine.search(&pos, Side::Black, SearchLimits::default()).best_move {
            seen.insert(mv);
        }
    }
    assert_eq!(seen.len(), 4);
}
