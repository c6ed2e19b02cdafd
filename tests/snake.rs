//! Grid movement and lookahead tests.

use deckrs::snake::{
    Direction, Grid, Position, advance, danger, free_positions, grow, obstacle_ahead, spawn_food,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

const GRID: Grid = Grid::new(10, 10);

#[test]
fn advance_drops_the_tail_and_adds_a_head() {
    let snake = [at(1, 1), at(1, 2)];
    assert_eq!(advance(&snake, Direction::UP), vec![at(1, 2), at(1, 3)]);
    assert_eq!(advance(&snake, Direction::RIGHT), vec![at(1, 2), at(2, 2)]);
}

#[test]
fn grow_keeps_the_tail() {
    let snake = [at(1, 1), at(1, 2)];
    assert_eq!(
        grow(&snake, Direction::UP),
        vec![at(1, 1), at(1, 2), at(1, 3)]
    );
}

#[test]
fn an_empty_snake_goes_nowhere() {
    assert_eq!(advance(&[], Direction::UP), Vec::new());
    assert_eq!(grow(&[], Direction::UP), Vec::new());
    assert!(!obstacle_ahead(&[], Direction::UP, GRID));
}

#[test]
fn walls_are_obstacles() {
    let snake = [at(0, 1), at(0, 0)];
    assert!(obstacle_ahead(&snake, Direction::DOWN, GRID));
    assert!(obstacle_ahead(&snake, Direction::LEFT, GRID));
    assert!(!obstacle_ahead(&snake, Direction::RIGHT, GRID));
}

#[test]
fn own_body_is_an_obstacle() {
    // Head at (1, 0); stepping left hits the cell the tail still occupies.
    let snake = [at(0, 0), at(0, 1), at(1, 1), at(1, 0)];
    assert!(obstacle_ahead(&snake, Direction::LEFT, GRID));
    assert!(!obstacle_ahead(&snake, Direction::RIGHT, GRID));
}

#[test]
fn open_field_is_safe() {
    let snake = [at(0, 0), at(1, 0)];
    assert!(!obstacle_ahead(&snake, Direction::RIGHT, GRID));
    assert!(!danger(&snake, Direction::RIGHT, GRID));
}

#[test]
fn danger_looks_two_steps_out() {
    // One free cell before the wall: nothing ahead, but danger in two.
    let snake = [at(7, 0), at(8, 0)];
    assert!(!obstacle_ahead(&snake, Direction::RIGHT, GRID));
    assert!(danger(&snake, Direction::RIGHT, GRID));
}

#[test]
fn free_positions_excludes_food_and_snake() {
    let grid = Grid::new(2, 2);
    let food = [at(0, 0)];
    let snake = [at(0, 1), at(1, 1)];

    assert_eq!(free_positions(grid, &food, &snake), vec![at(1, 0)]);
}

#[test]
fn spawn_food_picks_the_only_free_cell() {
    let grid = Grid::new(2, 2);
    let food = [at(0, 0)];
    let snake = [at(0, 1), at(1, 1)];
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert_eq!(spawn_food(grid, &food, &snake, &mut rng), Some(at(1, 0)));
}

#[test]
fn spawn_food_on_a_full_grid_is_absent() {
    let grid = Grid::new(1, 2);
    let snake = [at(0, 0), at(0, 1)];
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert_eq!(spawn_food(grid, &[], &snake, &mut rng), None);
}

#[test]
fn spawn_food_lands_on_a_free_cell() {
    let food = [at(3, 3)];
    let snake = [at(4, 4), at(4, 5)];
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let spawned = spawn_food(GRID, &food, &snake, &mut rng).unwrap();
        assert!(!food.contains(&spawned));
        assert!(!snake.contains(&spawned));
        assert!((0..10).contains(&spawned.x) && (0..10).contains(&spawned.y));
    }
}
