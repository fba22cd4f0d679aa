use super::state::GridPoint;

/// Per-cell occupancy of the whole panel
///
/// The simulation owns this; collision checks never go back to the display.
/// Queries outside the panel read as free, the way a panel driver's pixel
/// query does — the boundary outline keeps the head from ever getting there.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    fn index(&self, p: GridPoint) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    pub fn set(&mut self, p: GridPoint) {
        if let Some(i) = self.index(p) {
            self.cells[i] = true;
        }
    }

    pub fn clear(&mut self, p: GridPoint) {
        if let Some(i) = self.index(p) {
            self.cells[i] = false;
        }
    }

    pub fn is_occupied(&self, p: GridPoint) -> bool {
        self.index(p).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Mark the outline of a rectangle, matching the display's boundary rect.
    pub fn set_outline(&mut self, origin: GridPoint, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        for x in origin.x..origin.x + width {
            self.set(GridPoint::new(x, origin.y));
            self.set(GridPoint::new(x, origin.y + height - 1));
        }
        for y in origin.y..origin.y + height {
            self.set(GridPoint::new(origin.x, y));
            self.set(GridPoint::new(origin.x + width - 1, y));
        }
    }

    /// Iterate over every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(move |(i, _)| GridPoint::new(i as i32 % width, i as i32 / width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_set_clear_query() {
        let mut grid = OccupancyGrid::new(8, 8);
        let p = GridPoint::new(3, 4);

        assert!(!grid.is_occupied(p));
        grid.set(p);
        assert!(grid.is_occupied(p));
        grid.clear(p);
        assert!(!grid.is_occupied(p));
    }

    #[test]
    fn test_out_of_bounds_reads_free() {
        let mut grid = OccupancyGrid::new(8, 8);
        grid.set(GridPoint::new(-1, 0));
        grid.set(GridPoint::new(0, 8));

        assert!(!grid.is_occupied(GridPoint::new(-1, 0)));
        assert!(!grid.is_occupied(GridPoint::new(0, 8)));
        assert!(!grid.is_occupied(GridPoint::new(100, 100)));
    }

    #[test]
    fn test_outline_marks_perimeter_only() {
        let mut grid = OccupancyGrid::new(8, 8);
        grid.set_outline(GridPoint::new(1, 1), 5, 4);

        assert!(grid.is_occupied(GridPoint::new(1, 1)));
        assert!(grid.is_occupied(GridPoint::new(5, 1)));
        assert!(grid.is_occupied(GridPoint::new(1, 4)));
        assert!(grid.is_occupied(GridPoint::new(5, 4)));
        assert!(grid.is_occupied(GridPoint::new(3, 1)));
        assert!(!grid.is_occupied(GridPoint::new(3, 2)));
        assert!(!grid.is_occupied(GridPoint::new(0, 0)));
    }

    #[test]
    fn test_occupied_iterator() {
        let mut grid = OccupancyGrid::new(4, 4);
        grid.set(GridPoint::new(0, 0));
        grid.set(GridPoint::new(3, 2));

        let cells: HashSet<GridPoint> = grid.occupied().collect();
        assert_eq!(
            cells,
            HashSet::from([GridPoint::new(0, 0), GridPoint::new(3, 2)])
        );
    }
}
