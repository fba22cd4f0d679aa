use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Configuration for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Panel width in cells
    pub width: i32,
    /// Panel height in cells
    pub height: i32,
    /// Height of the text strip above the playfield
    pub hud_height: i32,
    /// Number of cells the snake starts with
    pub initial_snake_length: usize,
    /// Ticks of growth granted by one apple
    pub growth_per_apple: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        // The 128x64 panel is driven rotated, so the grid is tall.
        Self {
            width: 64,
            height: 128,
            hud_height: 8,
            initial_snake_length: 11,
            growth_per_apple: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom panel size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small panel for testing.
    pub fn small() -> Self {
        Self {
            width: 16,
            height: 16,
            hud_height: 0,
            initial_snake_length: 3,
            growth_per_apple: 10,
        }
    }

    /// Columns strictly inside the playfield, border excluded.
    pub fn interior_x(&self) -> Range<i32> {
        1..self.width - 1
    }

    /// Rows strictly inside the playfield, border excluded.
    pub fn interior_y(&self) -> Range<i32> {
        self.hud_height + 1..self.height - 1
    }
}
