use super::super::*;

impl Grid {
    // === Updated flag ===

    /// Out-of-range cells read as already processed
    #[inline]
    pub fn is_updated(&self, x: i32, y: i32) -> bool {
        match self.checked_index(x, y) {
            Some(idx) => self.updated[idx] == 1,
            None => true,
        }
    }

    #[inline]
    pub fn mark_updated(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.checked_index(x, y) {
            self.updated[idx] = 1;
        }
    }

    /// Reset updated flags for all cells
    #[inline]
    pub fn reset_updated(&mut self) {
        self.updated.fill(0);
    }
}
