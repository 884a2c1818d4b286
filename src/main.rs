use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use botkit::{AStar, Cell, Grid, Scheduler, SearchStatus, Updatable, clean_path, line_of_sight};

fn get_env_var_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|val| val.parse::<i32>().ok())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("botkit=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// Walks one waypoint per fixed step.
struct Courier {
    waypoints: Vec<Cell>,
    at: usize,
}

impl Courier {
    fn arrived(&self) -> bool {
        self.at + 1 >= self.waypoints.len()
    }
}

impl Updatable for Courier {
    fn tick(&mut self, _dt: f32) {
        if !self.arrived() {
            self.at += 1;
            let here = self.waypoints[self.at];
            tracing::debug!(x = here.x, y = here.y, "courier moved");
        }
    }
}

fn main() {
    init_logging();

    let width = get_env_var_i32("BOTKIT_WIDTH").unwrap_or(20);
    let height = get_env_var_i32("BOTKIT_HEIGHT").unwrap_or(12);
    let seed = get_env_var_i32("BOTKIT_SEED");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed as u64),
        None => StdRng::from_os_rng(),
    };

    let start = Cell::new(0, 0);
    let goal = Cell::new(width - 1, height - 1);

    let mut grid = Grid::new(width, height, 1.0);
    for x in 0..width {
        for y in 0..height {
            let cell = Cell::new(x, y);
            if cell != start && cell != goal && rng.random_bool(0.25) {
                grid.set_blocked(cell, true);
            }
        }
    }

    let budget = (width * height) as usize;
    let result = AStar::run(
        start,
        |c: &Cell| *c == goal,
        |c: &Cell| grid.walkable_neighbors(*c),
        |_: &Cell, _: &Cell| 1.0,
        |c: &Cell| c.manhattan(&goal) as f64,
        budget,
    );

    match result.status {
        SearchStatus::Found => {
            let waypoints =
                clean_path(&result.path, |a: &Cell, b: &Cell| line_of_sight(&grid, *a, *b));
            tracing::info!(
                raw = result.path.len(),
                cleaned = waypoints.len(),
                "path found"
            );
            render(&grid, &result.path, &waypoints);
            replay(waypoints);
        }
        SearchStatus::NoPath => tracing::warn!("no path through this layout"),
        SearchStatus::BudgetExhausted => tracing::warn!(budget, "search budget exhausted"),
    }
}

/// Drive a courier along the waypoints with a fixed-timestep scheduler.
fn replay(waypoints: Vec<Cell>) {
    let courier = Rc::new(RefCell::new(Courier { waypoints, at: 0 }));

    let mut scheduler = Scheduler::new(0.1);
    scheduler.subscribe(Rc::clone(&courier));

    let mut ticks = 0u32;
    while !courier.borrow().arrived() {
        ticks += scheduler.advance(0.1);
    }
    tracing::info!(ticks, "courier reached the goal");
}

fn render(grid: &Grid, path: &[Cell], waypoints: &[Cell]) {
    for y in 0..grid.height {
        let mut row = String::with_capacity(grid.width as usize);
        for x in 0..grid.width {
            let cell = Cell::new(x, y);
            let ch = if waypoints.contains(&cell) {
                '@'
            } else if path.contains(&cell) {
                '*'
            } else if !grid.is_walkable(cell) {
                '#'
            } else {
                '.'
            };
            row.push(ch);
        }
        println!("{row}");
    }
}
