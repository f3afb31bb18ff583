use tilepath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for four-connected unit-cost movement.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 7);
        let b = Cell::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_does_not_overflow() {
        let a = Cell::ZERO;
        let b = Cell::new(u32::MAX, u32::MAX);
        assert_eq!(manhattan(a, b), 2 * u64::from(u32::MAX));
    }
}
