use super::*;

impl Grid {
    // === Swap two cells (all bytes) ===

    /// Exchange two cells and mark both processed so neither is visited
    /// again this pass. Returns false (and does nothing) if either side is
    /// out of range.
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let (Some(idx1), Some(idx2)) = (self.checked_index(x1, y1), self.checked_index(x2, y2)) else {
            return false;
        };
        self.swap_idx(idx1, idx2);
        true
    }

    #[inline]
    pub(crate) fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        if idx1 != idx2 {
            let (a, b) = (idx1 * CELL_STRIDE, idx2 * CELL_STRIDE);
            for offset in 0..CELL_STRIDE {
                self.cells.swap(a + offset, b + offset);
            }
        }
        self.updated[idx1] = 1;
        self.updated[idx2] = 1;
    }
}
