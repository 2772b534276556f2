use pathviz_core::{Bounds, Point};

use crate::traits::{Pather, WeightedPather};

/// Unit-cost 4-connected movement inside a rectangle.
///
/// Walls are not filtered here: the search relaxes wall neighbours like any
/// other and only refuses to expand from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourConnected {
    bounds: Bounds,
}

impl FourConnected {
    /// Create a pather for the given grid dimensions.
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl Pather for FourConnected {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.bounds.contains(n)),
        );
    }
}

impl WeightedPather for FourConnected {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let pather = FourConnected::new(Bounds::new(3, 3));
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn interior_order_is_up_down_left_right() {
        let pather = FourConnected::new(Bounds::new(3, 3));
        let mut buf = Vec::new();
        pather.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
        assert_eq!(pather.cost(Point::new(1, 1), Point::new(0, 1)), 1);
    }
}
