use serde::{Deserialize, Serialize};

/// A single location on the board holding a state in `[0, states)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    state: u8,
}

impl Cell {
    /// Returns the current state of the cell.
    pub fn state(&self) -> u8 {
        self.state
    }

    /// Moves the cell to its next state, wrapping to 0 after `states - 1`.
    /// `states` is a valid state count, 2 to 12.
    pub(crate) fn advance(&mut self, states: usize) {
        self.state = ((self.state as usize + 1) % states) as u8;
    }

    /// Moves the cell to its previous state, wrapping to `states - 1` from 0.
    pub(crate) fn retreat(&mut self, states: usize) {
        self.state = ((self.state as usize + states - 1) % states) as u8;
    }
}

/// Represents the direction an agent is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "python",
    pyo3::pyclass(module = "langton_engine", eq, eq_int)
)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// The orientation after a 90 degree clockwise turn.
    pub fn clockwise(self) -> Orientation {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// The orientation after a 90 degree counter-clockwise turn.
    pub fn counter_clockwise(self) -> Orientation {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Unit offset `(dx, dy)` of one move. `y` grows towards the south.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Orientation::North => (0, -1),
            Orientation::East => (1, 0),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
        }
    }

    /// Glyph used when drawing the agent.
    pub fn glyph(self) -> char {
        match self {
            Orientation::North => '^',
            Orientation::East => '>',
            Orientation::South => 'v',
            Orientation::West => '<',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Position {
        Position { x, y }
    }
}

/// The ant.
///
/// Coordinates are signed and unbounded: the agent only knows how to move
/// and turn, keeping it on the board is the grid's job. Snapshots kept in
/// the history may therefore point outside the board after a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    x: i64,
    y: i64,
    orientation: Orientation,
}

impl Agent {
    /// Creates an agent at `(x, y)` facing west.
    pub fn new(x: i64, y: i64) -> Agent {
        Agent::facing(x, y, Orientation::West)
    }

    pub fn facing(x: i64, y: i64, orientation: Orientation) -> Agent {
        Agent { x, y, orientation }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Moves the agent one cell forward in its current orientation.
    pub fn move_forward(&mut self) {
        let (dx, dy) = self.orientation.offset();
        self.x += dx;
        self.y += dy;
    }

    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.clockwise();
    }

    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.counter_clockwise();
    }

    pub(crate) fn set_position(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }

    /// Shifts the agent by `(dx, dy)` without any bounds handling.
    pub(crate) fn translate(&mut self, dx: i64, dy: i64) {
        self.x += dx;
        self.y += dy;
    }

    /// Whether the agent stands inside a `width` x `height` board.
    pub(crate) fn is_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_advancing_a_cell_the_state_wraps_to_zero_after_the_last_state() {
        let mut cell = Cell::default();

        cell.advance(3);
        assert_eq!(cell.state(), 1);
        cell.advance(3);
        assert_eq!(cell.state(), 2);
        cell.advance(3);
        assert_eq!(cell.state(), 0);
    }

    #[test]
    fn when_retreating_a_cell_in_state_zero_it_wraps_to_the_last_state() {
        let mut cell = Cell::default();

        cell.retreat(12);

        assert_eq!(cell.state(), 11);
    }

    #[test]
    fn when_advancing_and_then_retreating_a_cell_the_state_is_unchanged() {
        for states in 2..=12 {
            for start in 0..states {
                let mut cell = Cell::default();
                for _ in 0..start {
                    cell.advance(states);
                }

                cell.advance(states);
                cell.retreat(states);
                assert_eq!(cell.state() as usize, start);

                cell.retreat(states);
                cell.advance(states);
                assert_eq!(cell.state() as usize, start);
            }
        }
    }

    #[test]
    fn when_creating_an_agent_it_faces_west() {
        let agent = Agent::new(2, 3);

        assert_eq!(agent.position(), Position::new(2, 3));
        assert_eq!(agent.orientation(), Orientation::West);
    }

    #[test]
    fn when_moving_an_agent_it_follows_its_orientation() {
        let mut agent = Agent::facing(5, 5, Orientation::North);
        agent.move_forward();
        assert_eq!(agent.position(), Position::new(5, 4));

        let mut agent = Agent::facing(5, 5, Orientation::East);
        agent.move_forward();
        assert_eq!(agent.position(), Position::new(6, 5));

        let mut agent = Agent::facing(5, 5, Orientation::South);
        agent.move_forward();
        assert_eq!(agent.position(), Position::new(5, 6));

        let mut agent = Agent::facing(0, 0, Orientation::West);
        agent.move_forward();
        // Agents never wrap on their own
        assert_eq!(agent.position(), Position::new(-1, 0));
    }

    #[test]
    fn when_turning_right_four_times_the_agent_visits_every_orientation_clockwise() {
        let mut agent = Agent::facing(0, 0, Orientation::North);
        let mut seen = vec![];
        for _ in 0..4 {
            agent.turn_right();
            seen.push(agent.orientation());
        }

        assert_eq!(
            seen,
            vec![
                Orientation::East,
                Orientation::South,
                Orientation::West,
                Orientation::North
            ]
        );
    }

    #[test]
    fn when_turning_left_the_agent_rotates_counter_clockwise() {
        let mut agent = Agent::new(0, 0);

        agent.turn_left();
        assert_eq!(agent.orientation(), Orientation::South);
        agent.turn_left();
        assert_eq!(agent.orientation(), Orientation::East);
    }

    #[test]
    fn when_copying_an_agent_the_copy_is_independent() {
        let mut agent = Agent::new(1, 1);
        let snapshot = agent;

        agent.move_forward();
        agent.turn_right();

        assert_eq!(snapshot.position(), Position::new(1, 1));
        assert_eq!(snapshot.orientation(), Orientation::West);
    }

    #[test]
    fn when_checking_bounds_negative_and_too_large_coordinates_are_outside() {
        assert!(Agent::new(0, 0).is_within(1, 1));
        assert!(!Agent::new(-1, 0).is_within(3, 3));
        assert!(!Agent::new(0, 3).is_within(3, 3));
        assert!(!Agent::new(0, 0).is_within(0, 3));
    }
}
