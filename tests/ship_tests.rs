use seabattle::{BoardError, Coord, Orientation, Ship, ShipClass};

type TestShip = Ship<u32, 5>;

#[test]
fn test_new_and_mask() {
    let class = ShipClass::new("Test", 3);
    let ship = TestShip::new(class, Coord::new(2, 1), Orientation::Horizontal).unwrap();
    for c in 1..4 {
        assert!(ship.mask().get(2, c).unwrap());
    }
    assert_eq!(ship.mask().count_ones(), 3);
    assert_eq!(ship.bow(), Coord::new(2, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_cells_in_order_from_bow() {
    let class = ShipClass::new("Test", 4);
    let ship = TestShip::new(class, Coord::new(0, 0), Orientation::Vertical).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0)
        ]
    );
    for cell in cells {
        assert!(ship.contains(cell));
    }
    assert!(!ship.contains(Coord::new(4, 0)));
}

#[test]
fn test_construction_rejects_overhang() {
    let class = ShipClass::new("Test", 3);
    assert_eq!(
        TestShip::new(class, Coord::new(0, 3), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds
    );
    assert_eq!(
        TestShip::new(class, Coord::new(3, 0), Orientation::Vertical).unwrap_err(),
        BoardError::OutOfBounds
    );
    // bow itself off the board
    assert_eq!(
        TestShip::new(class, Coord::new(5, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds
    );
}

#[test]
fn test_fresh_ship_is_afloat() {
    let class = ShipClass::new("Test", 2);
    let ship = TestShip::new(class, Coord::new(1, 1), Orientation::Horizontal).unwrap();
    assert_eq!(ship.lives(), 2);
    assert!(!ship.is_sunk());
}
