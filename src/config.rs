use core::time::Duration;

use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 9;
pub const NUM_SHIPS: usize = 10;
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Patrol Boat", 1),
    ShipClass::new("Patrol Boat", 1),
    ShipClass::new("Patrol Boat", 1),
    ShipClass::new("Patrol Boat", 1),
];

/// Total placement attempts allowed per candidate board before the fleet
/// generator abandons it and starts over from empty.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Pause before the computer announces its shot. Pacing only.
pub const AGENT_MOVE_DELAY: Duration = Duration::from_secs(3);
