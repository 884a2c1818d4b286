use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors(&self) -> [Cell; 4] {
        [
            Cell::new(self.x, self.y - 1), // North
            Cell::new(self.x + 1, self.y), // East
            Cell::new(self.x, self.y + 1), // South
            Cell::new(self.x - 1, self.y), // West
        ]
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

/// 2D occupancy grid anchored in world space.
///
/// Cells outside the bounds or in the blocked set are not walkable. World
/// coordinates map to cells through `cell_size` and `origin`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    pub origin: (f32, f32),
    blocked: HashSet<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self::with_origin(width, height, cell_size, (0.0, 0.0))
    }

    pub fn with_origin(width: i32, height: i32, cell_size: f32, origin: (f32, f32)) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin,
            blocked: HashSet::new(),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if blocked {
            self.blocked.insert(cell);
        } else {
            self.blocked.remove(&cell);
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.blocked.contains(&cell)
    }

    /// In-bounds, unblocked 4-directional neighbors.
    pub fn walkable_neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neighbors()
            .into_iter()
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        (
            self.origin.0 + (cell.x as f32 + 0.5) * self.cell_size,
            self.origin.1 + (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Cell containing a world position, if any.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        let cell = Cell::new(
            ((x - self.origin.0) / self.cell_size).floor() as i32,
            ((y - self.origin.1) / self.cell_size).floor() as i32,
        );
        self.contains(cell).then_some(cell)
    }
}
