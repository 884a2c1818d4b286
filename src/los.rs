use crate::grid::{Cell, Grid};

/// Cells crossed by the segment from `a` to `b`, endpoints included.
pub fn bresenham(a: Cell, b: Cell) -> Vec<Cell> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx - dy) as usize + 1);
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);

    loop {
        cells.push(Cell::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    cells
}

/// True when every cell on the segment between `a` and `b` is walkable.
pub fn line_of_sight(grid: &Grid, a: Cell, b: Cell) -> bool {
    bresenham(a, b).into_iter().all(|c| grid.is_walkable(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bresenham_includes_endpoints() {
        let line = bresenham(Cell::new(0, 0), Cell::new(3, 0));

        assert_eq!(line.first(), Some(&Cell::new(0, 0)));
        assert_eq!(line.last(), Some(&Cell::new(3, 0)));
        assert_eq!(line.len(), 4);
    }

    #[test]
    fn test_bresenham_single_cell() {
        assert_eq!(bresenham(Cell::new(2, 2), Cell::new(2, 2)), vec![Cell::new(2, 2)]);
    }

    #[test]
    fn test_bresenham_diagonal() {
        let line = bresenham(Cell::new(0, 0), Cell::new(3, 3));

        assert_eq!(
            line,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 1),
                Cell::new(2, 2),
                Cell::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_clear_line_of_sight() {
        let grid = Grid::new(5, 5, 1.0);

        assert!(line_of_sight(&grid, Cell::new(0, 0), Cell::new(4, 4)));
        assert!(line_of_sight(&grid, Cell::new(4, 4), Cell::new(0, 0)));
    }

    #[test]
    fn test_wall_blocks_sight() {
        let mut grid = Grid::new(5, 5, 1.0);
        for y in 0..5 {
            grid.set_blocked(Cell::new(2, y), true);
        }

        assert!(!line_of_sight(&grid, Cell::new(0, 2), Cell::new(4, 2)));
    }

    #[test]
    fn test_sight_outside_grid_fails() {
        let grid = Grid::new(3, 3, 1.0);

        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(5, 0)));
    }
}
