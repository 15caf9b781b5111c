//! Grid map backing tower placement and the zombie path.
//!
//! The board is a dense grid of square cells. Cells crossed by the path
//! polyline are rasterized once at construction and stay unbuildable for the
//! lifetime of the map; the remaining cells toggle between empty and
//! tower-occupied as the player builds and sells.

use outbreak_defence_core::{GridCoord, Position, TowerId};

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellKind {
    Empty,
    Path,
    Tower(TowerId),
}

#[derive(Clone, Debug)]
pub(crate) struct Map {
    columns: u32,
    rows: u32,
    tile_size: f32,
    cells: Vec<CellKind>,
    path: Vec<Position>,
}

impl Map {
    pub(crate) fn new(width: f32, height: f32, tile_size: f32, path: Vec<Position>) -> Self {
        let columns = (width / tile_size).ceil() as u32;
        let rows = (height / tile_size).ceil() as u32;
        let capacity = columns as usize * rows as usize;
        let mut map = Self {
            columns,
            rows,
            tile_size,
            cells: vec![CellKind::Empty; capacity],
            path,
        };
        map.rasterize_path();
        map
    }

    pub(crate) const fn columns(&self) -> u32 {
        self.columns
    }

    pub(crate) const fn rows(&self) -> u32 {
        self.rows
    }

    pub(crate) const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub(crate) fn path(&self) -> &[Position] {
        &self.path
    }

    pub(crate) fn start(&self) -> Position {
        self.path[0]
    }

    /// Cell containing the provided point, if it lies on the board.
    pub(crate) fn cell_at(&self, position: Position) -> Option<GridCoord> {
        if position.x() < 0.0 || position.y() < 0.0 {
            return None;
        }
        let column = (position.x() / self.tile_size).floor() as u32;
        let row = (position.y() / self.tile_size).floor() as u32;
        if column < self.columns && row < self.rows {
            Some(GridCoord::new(column, row))
        } else {
            None
        }
    }

    /// Center of the provided cell in world units.
    pub(crate) fn cell_center(&self, cell: GridCoord) -> Position {
        Position::new(
            cell.column() as f32 * self.tile_size + self.tile_size / 2.0,
            cell.row() as f32 * self.tile_size + self.tile_size / 2.0,
        )
    }

    pub(crate) fn kind(&self, cell: GridCoord) -> CellKind {
        match self.index(cell) {
            Some(index) => self.cells[index],
            None => CellKind::Empty,
        }
    }

    pub(crate) fn can_build(&self, cell: GridCoord) -> bool {
        matches!(self.kind(cell), CellKind::Empty)
    }

    pub(crate) fn place_tower(&mut self, cell: GridCoord, tower: TowerId) {
        if let Some(index) = self.index(cell) {
            if self.cells[index] == CellKind::Empty {
                self.cells[index] = CellKind::Tower(tower);
            }
        }
    }

    pub(crate) fn remove_tower(&mut self, cell: GridCoord) {
        if let Some(index) = self.index(cell) {
            if matches!(self.cells[index], CellKind::Tower(_)) {
                self.cells[index] = CellKind::Empty;
            }
        }
    }

    /// Clears tower occupancy while leaving path cells marked.
    pub(crate) fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(cell, CellKind::Tower(_)) {
                *cell = CellKind::Empty;
            }
        }
    }

    fn index(&self, cell: GridCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            Some(cell.row() as usize * self.columns as usize + cell.column() as usize)
        } else {
            None
        }
    }

    fn rasterize_path(&mut self) {
        for pair in 0..self.path.len().saturating_sub(1) {
            let start = self.path[pair];
            let end = self.path[pair + 1];
            self.mark_segment(start, end);
        }
    }

    /// Bresenham walk over cell indices between two path waypoints.
    fn mark_segment(&mut self, start: Position, end: Position) {
        let start_column = (start.x() / self.tile_size).floor() as i64;
        let start_row = (start.y() / self.tile_size).floor() as i64;
        let end_column = (end.x() / self.tile_size).floor() as i64;
        let end_row = (end.y() / self.tile_size).floor() as i64;

        let dx = (end_column - start_column).abs();
        let dy = (end_row - start_row).abs();
        let step_x = if start_column < end_column { 1 } else { -1 };
        let step_y = if start_row < end_row { 1 } else { -1 };
        let mut err = dx - dy;

        let mut column = start_column;
        let mut row = start_row;

        loop {
            if column >= 0
                && row >= 0
                && (column as u32) < self.columns
                && (row as u32) < self.rows
            {
                let index = row as usize * self.columns as usize + column as usize;
                self.cells[index] = CellKind::Path;
            }

            if column == end_column && row == end_row {
                break;
            }

            let doubled = 2 * err;
            if doubled > -dy {
                err -= dy;
                column += step_x;
            }
            if doubled < dx {
                err += dx;
                row += step_y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_map() -> Map {
        Map::new(
            400.0,
            200.0,
            40.0,
            vec![Position::new(20.0, 100.0), Position::new(380.0, 100.0)],
        )
    }

    #[test]
    fn grid_dimensions_round_up() {
        let map = Map::new(410.0, 190.0, 40.0, vec![
            Position::new(20.0, 20.0),
            Position::new(60.0, 20.0),
        ]);
        assert_eq!(map.columns(), 11);
        assert_eq!(map.rows(), 5);
    }

    #[test]
    fn path_cells_are_unbuildable() {
        let map = straight_map();
        for column in 0..map.columns() {
            let cell = GridCoord::new(column, 2);
            assert_eq!(map.kind(cell), CellKind::Path);
            assert!(!map.can_build(cell));
        }
        assert!(map.can_build(GridCoord::new(3, 0)));
    }

    #[test]
    fn cell_lookup_rejects_points_off_the_board() {
        let map = straight_map();
        assert_eq!(map.cell_at(Position::new(-1.0, 50.0)), None);
        assert_eq!(map.cell_at(Position::new(50.0, 500.0)), None);
        assert_eq!(
            map.cell_at(Position::new(85.0, 45.0)),
            Some(GridCoord::new(2, 1))
        );
    }

    #[test]
    fn cell_center_is_midpoint() {
        let map = straight_map();
        let center = map.cell_center(GridCoord::new(2, 1));
        assert_eq!(center.x(), 100.0);
        assert_eq!(center.y(), 60.0);
    }

    #[test]
    fn tower_placement_round_trips() {
        let mut map = straight_map();
        let cell = GridCoord::new(4, 0);
        let tower = TowerId::new(9);

        map.place_tower(cell, tower);
        assert_eq!(map.kind(cell), CellKind::Tower(tower));
        assert!(!map.can_build(cell));

        map.remove_tower(cell);
        assert!(map.can_build(cell));
    }

    #[test]
    fn placement_never_overwrites_path() {
        let mut map = straight_map();
        let path_cell = GridCoord::new(3, 2);
        map.place_tower(path_cell, TowerId::new(1));
        assert_eq!(map.kind(path_cell), CellKind::Path);
    }

    #[test]
    fn reset_clears_towers_and_keeps_path() {
        let mut map = straight_map();
        let cell = GridCoord::new(4, 0);
        map.place_tower(cell, TowerId::new(2));

        map.reset();

        assert!(map.can_build(cell));
        assert_eq!(map.kind(GridCoord::new(3, 2)), CellKind::Path);
    }
}
