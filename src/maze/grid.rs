use super::Position;

/// Fixed-size, row-major storage indexed by [`Position`].
///
/// Holds the maze cells as well as the per-search scratch maps
/// (parents, costs, settled flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        let data = vec![value; rows * cols].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from already row-major data. `data.len()` must be `rows * cols`.
    pub(crate) fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.is_in_bounds(pos).then(|| &self.data[self.ravel_index(pos)])
    }

    pub fn set(&mut self, pos: Position, value: T) {
        let idx = self.ravel_index(pos);
        self.data[idx] = value;
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks` happy for a zero-column grid; such a grid has no data anyway.
        self.data.chunks(self.cols.max(1))
    }

    /// Iterates over every position with its value, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Position::new(i / cols, i % cols), v))
    }

    fn ravel_index(&self, pos: Position) -> usize {
        debug_assert!(self.is_in_bounds(pos), "{pos} is out of bounds");
        pos.row * self.cols + pos.col
    }
}

impl<T> std::ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

impl<T> std::ops::IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let idx = self.ravel_index(pos);
        &mut self.data[idx]
    }
}
