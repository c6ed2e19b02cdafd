//! Grid movement and collision lookahead for a snake-style game.
//!
//! Standalone helpers: every function consumes a position list and the grid
//! dimensions and returns fresh values. The snake is ordered tail first, so
//! the last element of the list is the head. Nothing here touches the card
//! types.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::IndexedRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column, zero-based from the left.
    pub x: i32,
    /// Row, zero-based from the bottom.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A unit movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Step along x.
    pub dx: i32,
    /// Step along y.
    pub dy: i32,
}

impl Direction {
    /// One step up.
    pub const UP: Self = Self { dx: 0, dy: 1 };
    /// One step down.
    pub const DOWN: Self = Self { dx: 0, dy: -1 };
    /// One step left.
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    /// One step right.
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };
}

/// Playing field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl Grid {
    /// Creates a grid.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The snake after one step in `direction`: the tail cell is dropped and
/// the new head appended. An empty snake stays empty.
#[must_use]
pub fn advance(snake: &[Position], direction: Direction) -> Vec<Position> {
    let Some(new_head) = stepped(snake, direction) else {
        return Vec::new();
    };
    let mut moved: Vec<Position> = snake[1..].to_vec();
    moved.push(new_head);
    moved
}

/// The snake after eating: like [`advance`], but the tail cell is kept.
#[must_use]
pub fn grow(snake: &[Position], direction: Direction) -> Vec<Position> {
    let Some(new_head) = stepped(snake, direction) else {
        return Vec::new();
    };
    let mut grown = snake.to_vec();
    grown.push(new_head);
    grown
}

/// Returns whether stepping in `direction` leaves the grid or collides with
/// the snake.
///
/// The cell the tail is about to vacate still counts as occupied.
#[must_use]
pub fn obstacle_ahead(snake: &[Position], direction: Direction, grid: Grid) -> bool {
    let moved = advance(snake, direction);
    let Some(&new_head) = moved.last() else {
        return false;
    };

    if outside(new_head.x, grid.width) || outside(new_head.y, grid.height) {
        return true;
    }
    moved[..moved.len() - 1].contains(&new_head) || snake.contains(&new_head)
}

/// Returns whether an obstacle lies within the next two steps in
/// `direction`.
#[must_use]
pub fn danger(snake: &[Position], direction: Direction, grid: Grid) -> bool {
    obstacle_ahead(snake, direction, grid)
        || obstacle_ahead(&advance(snake, direction), direction, grid)
}

/// Picks a uniformly random free cell for the next food item.
///
/// Cells covered by existing food or the snake are excluded; `None` when no
/// cell is free.
pub fn spawn_food<R: Rng + ?Sized>(
    grid: Grid,
    food: &[Position],
    snake: &[Position],
    rng: &mut R,
) -> Option<Position> {
    free_positions(grid, food, snake).choose(rng).copied()
}

/// Every cell not covered by food or the snake, in column-major order.
#[must_use]
pub fn free_positions(grid: Grid, food: &[Position], snake: &[Position]) -> Vec<Position> {
    let occupied: HashSet<Position> = food.iter().chain(snake.iter()).copied().collect();

    let mut free = Vec::new();
    for x in 0..grid.width {
        for y in 0..grid.height {
            let cell = Position::new(x, y);
            if !occupied.contains(&cell) {
                free.push(cell);
            }
        }
    }
    free
}

fn stepped(snake: &[Position], direction: Direction) -> Option<Position> {
    snake
        .last()
        .map(|head| Position::new(head.x + direction.dx, head.y + direction.dy))
}

const fn outside(coordinate: i32, length: i32) -> bool {
    coordinate < 0 || coordinate >= length
}
