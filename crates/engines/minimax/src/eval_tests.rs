use super::*;
use othello_core::Position;

fn board(text: &str) -> Position {
    text.parse().expect("valid board text")
}

/// Black corner, white X-square, black near-edge cell. White can still move.
fn corner_fixture() -> Position {
    board(
        "\
        B - - - - - - -
        - W - - - - - -
        - - B - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -",
    )
}

#[test]
fn test_positional_terms_on_fixed_board() {
    let pos = corner_fixture();
    assert!(terminal_score(&pos, Side::Black).is_none());

    assert_eq!(corner_term(&pos, Side::Black), 25);
    // White holding a corner-adjacent cell counts in Black's favour.
    assert_eq!(corner_adjacent_term(&pos, Side::Black), 15);
    assert_eq!(near_edge_term(&pos, Side::Black), 7);
    assert_eq!(evaluate(&pos, Side::Black, EvalMode::Positional), 47);
    assert_eq!(evaluate(&pos, Side::White, EvalMode::Positional), -47);
}

#[test]
fn test_own_corner_adjacent_disk_is_a_liability() {
    let pos = board(
        "\
        - - - - - - - -
        - B - - - - W -
        - - W - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -",
    );
    // Black's (1,1) and White's (1,6) cancel out.
    assert_eq!(corner_adjacent_term(&pos, Side::Black), 0);

    let mut lopsided = pos;
    lopsided.set(Move::new(1, 6), None);
    assert_eq!(corner_adjacent_term(&lopsided, Side::Black), -15);
    assert_eq!(corner_adjacent_term(&lopsided, Side::White), 15);
}

#[test]
fn test_terms_are_antisymmetric_across_a_game() {
    let mut pos = Position::startpos();
    let mut side = Side::Black;
    let mut checked = 0;

    let terms: [(&str, fn(&Position, Side) -> i32); 3] = [
        ("corner", corner_term),
        ("adjacent", corner_adjacent_term),
        ("near edge", near_edge_term),
    ];

    while !pos.is_game_over() {
        for (name, term) in terms {
            assert_eq!(
                term(&pos, Side::Black),
                -term(&pos, Side::White),
                "{name} term not antisymmetric on\n{pos}"
            );
        }
        assert_eq!(
            positional_score(&pos, Side::Black),
            -positional_score(&pos, Side::White)
        );
        checked += 1;

        let moves = pos.legal_moves(side);
        if let Some(&mv) = moves.last() {
            pos.play(mv, side).unwrap();
        }
        side = side.opponent();
    }
    assert!(checked > 10);
}

#[test]
fn test_count_mode_is_raw_disk_count() {
    let pos = Position::startpos().apply(Move::new(2, 3), Side::Black).unwrap();
    assert_eq!(evaluate(&pos, Side::Black, EvalMode::Count), 4);
    assert_eq!(evaluate(&pos, Side::White, EvalMode::Count), 1);
}

#[test]
fn test_terminal_tie_scores_minus_two_thousand_for_both_sides() {
    let pos = board(
        "\
        B - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - W",
    );
    assert!(pos.is_game_over());
    for side in Side::ALL {
        for mode in [EvalMode::Positional, EvalMode::Count] {
            assert_eq!(evaluate(&pos, side, mode), TIE_SCORE);
        }
    }
    assert_eq!(TIE_SCORE, -2000);
}

#[test]
fn test_terminal_win_and_loss() {
    let pos = board(
        "\
        B - - - - - - B
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - W",
    );
    assert_eq!(evaluate(&pos, Side::Black, EvalMode::Positional), WIN_SCORE);
    assert_eq!(evaluate(&pos, Side::White, EvalMode::Count), LOSS_SCORE);
}

#[test]
fn test_leaf_mode_selection() {
    assert_eq!(EvalMode::for_leaf(true, 11, 10), EvalMode::Positional);
    assert_eq!(EvalMode::for_leaf(true, 10, 10), EvalMode::Count);
    assert_eq!(EvalMode::for_leaf(false, 50, 10), EvalMode::Count);
}
