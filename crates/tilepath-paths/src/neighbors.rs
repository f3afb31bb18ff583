use tilepath_core::Cell;

/// Cached neighbor computation helper.
///
/// Enumerates the four orthogonal neighbours of a cell in the fixed order
/// left, right, up, down, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `c` for which `keep` returns
    /// `true`. Cells that would need a negative coordinate are never
    /// offered to `keep`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4().into_iter().flatten() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_keeps_order_and_filters() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Cell::new(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );

        let got = nb.cardinal(Cell::new(1, 1), |c| c.y == 1);
        assert_eq!(got, &[Cell::new(0, 1), Cell::new(2, 1)]);
    }

    #[test]
    fn cardinal_at_corner() {
        let mut nb = Neighbors::default();
        let got = nb.cardinal(Cell::ZERO, |_| true);
        assert_eq!(got, &[Cell::new(1, 0), Cell::new(0, 1)]);
    }
}
