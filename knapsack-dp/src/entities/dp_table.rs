use ndarray::{Array2, ArrayView1, Axis};

/// Fixed-size, row-major table of best values.
/// Cell `[i][w]` holds the maximum value achievable with the first `i` items and a budget of `w`.
///
/// The table is allocated once with `n + 1` rows and `W + 1` columns, all zero.
/// Row 0 (no items) therefore never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DPTable {
    cells: Array2<u64>,
}

impl DPTable {
    pub fn new(n_items: usize, capacity: usize) -> Self {
        Self {
            cells: Array2::zeros((n_items + 1, capacity + 1)),
        }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, w: usize) -> u64 {
        self.cells[[i, w]]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, w: usize, value: u64) {
        self.cells[[i, w]] = value;
    }

    /// Number of rows, `n + 1`
    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns, `W + 1`
    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u64> {
        self.cells.row(i)
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, u64>> + '_ {
        self.cells.axis_iter(Axis(0))
    }

    pub fn column(&self, w: usize) -> ArrayView1<'_, u64> {
        self.cells.column(w)
    }

    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, u64>> + '_ {
        self.cells.axis_iter(Axis(1))
    }

    /// Row `n`: the best values for every capacity using all items.
    pub fn last_row(&self) -> ArrayView1<'_, u64> {
        self.cells.row(self.n_rows() - 1)
    }

    /// Cell `[n][W]`, the optimal value of the instance.
    pub fn final_value(&self) -> u64 {
        self.cells[[self.n_rows() - 1, self.n_cols() - 1]]
    }

    /// Copies the table into nested rows, e.g. for serialization.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_zeroed() {
        let table = DPTable::new(3, 50);
        assert_eq!(table.n_rows(), 4);
        assert_eq!(table.n_cols(), 51);
        assert_eq!(table.n_cells(), 4 * 51);
        assert!(table.rows().all(|r| r.iter().all(|&c| c == 0)));
        assert_eq!(table.final_value(), 0);
    }

    #[test]
    fn empty_instance_still_has_a_cell() {
        let table = DPTable::new(0, 0);
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.n_cols(), 1);
        assert_eq!(table.final_value(), 0);
    }

    #[test]
    fn rows_and_columns_are_row_major_views() {
        let mut table = DPTable::new(1, 2);
        table.set(1, 1, 7);
        table.set(1, 2, 9);
        assert_eq!(table.row(1).to_vec(), vec![0, 7, 9]);
        assert_eq!(table.column(2).to_vec(), vec![0, 9]);
        assert_eq!(table.columns().count(), 3);
        assert_eq!(table.to_rows(), vec![vec![0, 0, 0], vec![0, 7, 9]]);
        assert_eq!(table.final_value(), 9);
    }
}
