use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use super::canvas::Canvas;
use super::command::Command;
use super::config::GameConfig;
use super::grid::OccupancyGrid;
use super::state::{CollisionKind, GameState, GridPoint};

/// Height of one text row in the overlay layer.
const TEXT_ROW: i32 = 8;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the head advanced this tick
    pub moved: bool,
    /// Whether the apple was consumed this tick
    pub ate_apple: bool,
    /// Set when this tick was fatal
    pub collision: Option<CollisionKind>,
}

/// The simulation engine
///
/// Owns the configuration and the randomness; mutates a [`GameState`] one
/// grid move at a time and mirrors every change onto the canvas.
pub struct SnakeEngine {
    config: GameConfig,
    rng: SmallRng,
}

impl SnakeEngine {
    /// Create an engine seeded from entropy.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an engine with deterministic apple placement.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the fixed initial state: the body extends from the panel center
    /// toward +x, idle, apple absent.
    pub fn reset(&self) -> GameState {
        let center = GridPoint::new(self.config.width / 2, self.config.height / 2);
        let mut body = VecDeque::with_capacity(self.config.initial_snake_length);
        body.push_back(center);
        for _ in 1..self.config.initial_snake_length {
            let prev = *body.back().unwrap();
            body.push_back(prev.offset_by(1, 0));
        }
        GameState::new(body, &self.config)
    }

    /// Draw the first frame: prompt, boundary rectangle, body.
    pub fn initialize<C: Canvas>(&self, state: &GameState, canvas: &mut C) {
        canvas.draw_text(GridPoint::new(0, 0), "Press any!");
        canvas.draw_rect(
            GridPoint::new(0, self.config.hud_height),
            self.config.width,
            self.config.height - self.config.hud_height,
        );
        for &cell in &state.body {
            canvas.draw_pixel(cell, true);
        }
        canvas.present();
    }

    /// Advance the simulation by one grid move and re-render.
    pub fn tick<C: Canvas>(
        &mut self,
        state: &mut GameState,
        command: Command,
        now_ms: u64,
        canvas: &mut C,
    ) -> TickResult {
        let mut result = TickResult {
            moved: false,
            ate_apple: false,
            collision: None,
        };

        // The score overlay is refreshed on every tick, dead or alive.
        canvas.draw_text(GridPoint::new(0, 0), &state.score().to_string());

        if !state.alive {
            return result;
        }

        state.ticks += 1;
        state.last_tick_ms = now_ms;

        self.refresh_apple(state, canvas);
        self.steer(state, command);

        if state.velocity == GridPoint::ZERO {
            canvas.present();
            return result;
        }

        let tail = state.tail();
        let new_head = state.head() + state.velocity;

        if state.occupancy.is_occupied(new_head) {
            if state.apple == Some(new_head) {
                state.pending_growth = self.config.growth_per_apple;
                state.apple = None;
                result.ate_apple = true;
            } else if new_head == tail {
                // The tail vacates this cell on the same tick.
            } else {
                state.alive = false;
                result.collision = Some(if state.on_border(new_head) {
                    CollisionKind::Boundary
                } else {
                    CollisionKind::Body
                });
                canvas.draw_text(GridPoint::new(0, TEXT_ROW), "DEAD!");
                canvas.present();
                return result;
            }
        }

        // Slide: the old tail cell goes dark even while growing, leaving a
        // stale back entry in the body until the growth counter drains.
        state.occupancy.clear(tail);
        canvas.draw_pixel(tail, false);
        state.body.push_front(new_head);
        state.occupancy.set(new_head);
        canvas.draw_pixel(new_head, true);

        if state.pending_growth > 0 {
            state.pending_growth -= 1;
        } else {
            state.body.pop_back();
        }

        result.moved = true;
        canvas.present();
        result
    }

    /// Spawn the apple if absent, then (re)draw it.
    fn refresh_apple<C: Canvas>(&mut self, state: &mut GameState, canvas: &mut C) {
        let apple = match state.apple {
            Some(p) => p,
            None => {
                let p = self.sample_apple(&state.occupancy);
                state.apple = Some(p);
                state.occupancy.set(p);
                p
            }
        };
        canvas.draw_pixel(apple, true);
    }

    /// Uniform rejection sampling over the playfield interior.
    fn sample_apple(&mut self, occupancy: &OccupancyGrid) -> GridPoint {
        loop {
            let p = GridPoint::new(
                self.rng.gen_range(self.config.interior_x()),
                self.rng.gen_range(self.config.interior_y()),
            );
            if !occupancy.is_occupied(p) {
                return p;
            }
        }
    }

    /// Resolve the command against the current velocity.
    fn steer(&self, state: &mut GameState, command: Command) {
        let candidate = match command {
            // A rightward press only registers once the snake is in motion.
            Command::Right if state.velocity == GridPoint::ZERO => GridPoint::ZERO,
            _ => command.delta(),
        };

        // A command whose vector cancels the current velocity is dropped, so
        // an exact 180-degree reversal never registers.
        if state.velocity + candidate == GridPoint::ZERO {
            return;
        }

        state.velocity = candidate;
    }
}
