use seabattle::{
    parse_shot, render_board, side_by_side, Board, Coord, Orientation, ShipClass, ShotOutcome,
};

#[test]
fn test_parse_shot_accepts_two_numbers() {
    assert_eq!(parse_shot("3 5"), Some(Coord::new(2, 4)));
    assert_eq!(parse_shot("  7   1  "), Some(Coord::new(6, 0)));
    assert_eq!(parse_shot("1 1"), Some(Coord::new(0, 0)));
}

#[test]
fn test_parse_shot_rejects_wrong_arity() {
    assert_eq!(parse_shot(""), None);
    assert_eq!(parse_shot("3"), None);
    assert_eq!(parse_shot("3 5 7"), None);
}

#[test]
fn test_parse_shot_rejects_non_numeric() {
    assert_eq!(parse_shot("a b"), None);
    assert_eq!(parse_shot("3 x"), None);
    assert_eq!(parse_shot("-1 5"), None);
}

#[test]
fn test_parse_shot_rejects_zero() {
    // input is 1-indexed, there is no row or column 0
    assert_eq!(parse_shot("0 5"), None);
    assert_eq!(parse_shot("5 0"), None);
}

#[test]
fn test_render_empty_board() {
    let text = render_board(&Board::new());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |");
    assert_eq!(lines[1], "1 | O | O | O | O | O | O | O | O | O |");
    assert_eq!(lines[9], "9 | O | O | O | O | O | O | O | O | O |");
}

#[test]
fn test_render_marks_ship_buffer_hit_and_miss() {
    let mut board = Board::new();
    board
        .place(
            ShipClass::new("Destroyer", 2),
            Coord::new(0, 0),
            Orientation::Horizontal,
        )
        .unwrap();
    assert_eq!(board.fire(Coord::new(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.fire(Coord::new(4, 4)).unwrap(), ShotOutcome::Miss);

    let lines: Vec<String> = render_board(&board).lines().map(String::from).collect();
    assert_eq!(lines[1], "1 | X | ■ | . | O | O | O | O | O | O |");
    assert_eq!(lines[2], "2 | . | . | . | O | O | O | O | O | O |");
    assert_eq!(lines[5], "5 | O | O | O | O | . | O | O | O | O |");
}

#[test]
fn test_hidden_board_conceals_fleet_but_not_shots() {
    let mut board = Board::new();
    board
        .place(
            ShipClass::new("Destroyer", 2),
            Coord::new(0, 0),
            Orientation::Horizontal,
        )
        .unwrap();
    board.fire(Coord::new(0, 0)).unwrap();
    board.fire(Coord::new(4, 4)).unwrap();
    board.set_hidden(true);

    let lines: Vec<String> = render_board(&board).lines().map(String::from).collect();
    // unhit ship cell and placement buffer read as open water
    assert_eq!(lines[1], "1 | X | O | O | O | O | O | O | O | O |");
    assert_eq!(lines[2], "2 | O | O | O | O | O | O | O | O | O |");
    // shots stay visible
    assert_eq!(lines[5], "5 | O | O | O | O | . | O | O | O | O |");
}

#[test]
fn test_side_by_side_joins_with_gutter() {
    let joined = side_by_side("ab\ncdef", "gh");
    let lines: Vec<&str> = joined.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ab     |:|   gh");
    assert_eq!(lines[1], "cdef   |:|   ");
}

#[test]
fn test_side_by_side_renders_two_boards() {
    let left = render_board(&Board::new());
    let right = render_board(&Board::new());
    let joined = side_by_side(&left, &right);
    assert_eq!(joined.lines().count(), 10);
    for line in joined.lines() {
        assert!(line.contains("|:|"));
    }
}
