use super::*;

#[test]
fn test_opponent_is_involutive() {
    for side in Side::ALL {
        assert_ne!(side.opponent(), side);
        assert_eq!(side.opponent().opponent(), side);
    }
}

#[test]
fn test_square_round_trip_corners() {
    assert_eq!(Move::new(0, 0).square(), 0);
    assert_eq!(Move::new(0, 7).square(), 7);
    assert_eq!(Move::new(7, 7).square(), 63);
    assert_eq!(Move::from_square(59), Move::new(7, 3));
}

#[test]
fn test_try_new_rejects_out_of_range() {
    assert_eq!(Move::try_new(-1, -1), None);
    assert_eq!(Move::try_new(8, 0), None);
    assert_eq!(Move::try_new(0, 8), None);
    assert_eq!(Move::try_new(2, 3), Some(Move::new(2, 3)));
}

#[test]
fn test_coordinates() {
    assert_eq!(move_to_coord(Move::new(2, 3)), "d3");
    assert_eq!(coord_to_move("d3"), Some(Move::new(2, 3)));
    assert_eq!(coord_to_move("H8"), Some(Move::new(7, 7)));
    assert_eq!(coord_to_move("i1"), None);
    assert_eq!(coord_to_move("a9"), None);
    assert_eq!(coord_to_move("a10"), None);
}

#[test]
fn test_human_form_is_one_based() {
    assert_eq!(Move::new(0, 0).to_human(), "1 1");
    assert_eq!(Move::new(4, 5).to_human(), "5 6");
}

#[test]
fn test_side_display() {
    assert_eq!(Side::Black.to_string(), "BLACK");
    assert_eq!(Side::White.symbol(), 'W');
}
