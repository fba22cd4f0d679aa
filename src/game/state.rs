use std::collections::VecDeque;
use std::ops::Add;

use super::config::GameConfig;
use super::grid::OccupancyGrid;

/// Points scored per body segment.
pub const POINTS_PER_SEGMENT: u32 = 100;

/// A cell coordinate on the panel, also used as a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const ZERO: GridPoint = GridPoint { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a raw delta.
    pub fn offset_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// What the head ran into on a fatal tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The boundary rectangle around the playfield
    Boundary,
    /// The snake's own body
    Body,
}

/// Complete simulation state
///
/// All fields mutate in place across ticks; there is no reset path. Once
/// `alive` goes false the state is frozen for good.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Body cells, head at the front, tail at the back
    pub body: VecDeque<GridPoint>,
    /// Per-tick displacement of the head; `GridPoint::ZERO` means idle
    pub velocity: GridPoint,
    /// Current apple cell, `None` while absent
    pub apple: Option<GridPoint>,
    /// Remaining ticks on which a move keeps the tail
    pub pending_growth: u8,
    pub alive: bool,
    /// Occupancy of every panel cell: border, body, and apple. The sole
    /// collision oracle; kept in lockstep with the canvas.
    pub occupancy: OccupancyGrid,
    /// Live ticks processed so far
    pub ticks: u64,
    /// Timestamp handed to the most recent live tick
    pub last_tick_ms: u64,
    pub width: i32,
    pub height: i32,
    pub hud_height: i32,
}

impl GameState {
    /// Create a state around the given body, with the boundary outline and
    /// body cells already marked occupied.
    pub fn new(body: VecDeque<GridPoint>, config: &GameConfig) -> Self {
        let mut occupancy = OccupancyGrid::new(config.width, config.height);
        occupancy.set_outline(
            GridPoint::new(0, config.hud_height),
            config.width,
            config.height - config.hud_height,
        );
        for &cell in &body {
            occupancy.set(cell);
        }

        Self {
            body,
            velocity: GridPoint::ZERO,
            apple: None,
            pending_growth: 0,
            alive: true,
            occupancy,
            ticks: 0,
            last_tick_ms: 0,
            width: config.width,
            height: config.height,
            hud_height: config.hud_height,
        }
    }

    pub fn head(&self) -> GridPoint {
        *self.body.front().unwrap()
    }

    pub fn tail(&self) -> GridPoint {
        *self.body.back().unwrap()
    }

    /// Derived score, recomputed from the body length.
    pub fn score(&self) -> u32 {
        self.body.len() as u32 * POINTS_PER_SEGMENT
    }

    /// Whether a cell lies on the boundary rectangle around the playfield.
    pub fn on_border(&self, p: GridPoint) -> bool {
        let (left, right) = (0, self.width - 1);
        let (top, bottom) = (self.hud_height, self.height - 1);
        if p.x < left || p.x > right || p.y < top || p.y > bottom {
            return false;
        }
        p.x == left || p.x == right || p.y == top || p.y == bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_body(head: GridPoint, len: i32) -> VecDeque<GridPoint> {
        (0..len).map(|i| head.offset_by(i, 0)).collect()
    }

    #[test]
    fn test_point_addition() {
        let p = GridPoint::new(5, 5);
        assert_eq!(p + GridPoint::new(1, 0), GridPoint::new(6, 5));
        assert_eq!(p + GridPoint::new(0, -1), GridPoint::new(5, 4));
        assert_eq!(p + GridPoint::ZERO, p);
    }

    #[test]
    fn test_head_tail_and_score() {
        let config = GameConfig::small();
        let state = GameState::new(straight_body(GridPoint::new(5, 5), 3), &config);

        assert_eq!(state.head(), GridPoint::new(5, 5));
        assert_eq!(state.tail(), GridPoint::new(7, 5));
        assert_eq!(state.score(), 300);
    }

    #[test]
    fn test_new_state_marks_border_and_body() {
        let config = GameConfig::small();
        let state = GameState::new(straight_body(GridPoint::new(5, 5), 3), &config);

        assert!(state.occupancy.is_occupied(GridPoint::new(0, 0)));
        assert!(state
            .occupancy
            .is_occupied(GridPoint::new(config.width - 1, config.height - 1)));
        assert!(state.occupancy.is_occupied(GridPoint::new(6, 5)));
        assert!(!state.occupancy.is_occupied(GridPoint::new(5, 6)));
        assert!(state.alive);
        assert_eq!(state.velocity, GridPoint::ZERO);
        assert_eq!(state.apple, None);
    }

    #[test]
    fn test_border_classification() {
        let config = GameConfig::new(16, 24);
        let state = GameState::new(straight_body(GridPoint::new(8, 16), 3), &config);

        // top of the playfield sits below the HUD strip
        assert!(state.on_border(GridPoint::new(4, config.hud_height)));
        assert!(state.on_border(GridPoint::new(0, 12)));
        assert!(state.on_border(GridPoint::new(15, 23)));
        assert!(!state.on_border(GridPoint::new(4, config.hud_height + 1)));
        // the HUD strip itself is not part of the playfield
        assert!(!state.on_border(GridPoint::new(4, 0)));
        assert!(!state.on_border(GridPoint::new(-1, 12)));
    }
}
