use crate::geometry::Rect;

/// Default distance between grid lines, in canvas pixels.
pub const DEFAULT_SPACING: i32 = 20;

/// Snaps coordinates and sizes to multiples of a fixed spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    spacing: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl Grid {
    /// A grid with the given spacing. Spacings below 1 are raised to 1.
    pub fn new(spacing: i32) -> Self {
        Self {
            spacing: spacing.max(1),
        }
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Nearest multiple of the spacing, with halves rounded away from zero.
    ///
    /// `quantize(10) == 20` and `quantize(-10) == -20` at spacing 20.
    pub fn quantize(&self, v: i32) -> i32 {
        let s = i64::from(self.spacing);
        let v = i64::from(v);
        let snapped = (v.abs() + s / 2) / s * s;
        let snapped = if v < 0 { -snapped } else { snapped };
        self.saturate(snapped)
    }

    /// Smallest multiple of the spacing that is at least `v`.
    pub fn ceil(&self, v: i32) -> i32 {
        let s = i64::from(self.spacing);
        self.saturate((i64::from(v) + s - 1).div_euclid(s) * s)
    }

    /// Clamp an aligned value into the aligned part of the `i32` range.
    fn saturate(&self, v: i64) -> i32 {
        let s = i64::from(self.spacing);
        let max = i64::from(i32::MAX) / s * s;
        let min = i64::from(i32::MIN) / s * s;
        v.clamp(min, max) as i32
    }

    /// Snap only the origin, keeping the size.
    pub fn snap_origin(&self, r: Rect) -> Rect {
        r.with_origin(self.quantize(r.x), self.quantize(r.y))
    }

    /// Snap only the size, keeping the origin.
    pub fn snap_size(&self, r: Rect) -> Rect {
        r.with_size(self.quantize(r.width), self.quantize(r.height))
    }

    pub fn is_aligned(&self, v: i32) -> bool {
        v % self.spacing == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_multiple() {
        let g = Grid::default();
        assert_eq!(g.quantize(0), 0);
        assert_eq!(g.quantize(9), 0);
        assert_eq!(g.quantize(11), 20);
        assert_eq!(g.quantize(29), 20);
        assert_eq!(g.quantize(31), 40);
        assert_eq!(g.quantize(107), 100);
    }

    #[test]
    fn halves_round_away_from_zero() {
        let g = Grid::default();
        assert_eq!(g.quantize(10), 20);
        assert_eq!(g.quantize(50), 60);
        assert_eq!(g.quantize(-10), -20);
        assert_eq!(g.quantize(-30), -40);
    }

    #[test]
    fn negative_values_mirror_positive() {
        let g = Grid::default();
        assert_eq!(g.quantize(-9), 0);
        assert_eq!(g.quantize(-11), -20);
    }

    #[test]
    fn spacing_is_at_least_one() {
        let g = Grid::new(0);
        assert_eq!(g.spacing(), 1);
        assert_eq!(g.quantize(17), 17);
    }

    #[test]
    fn extremes_stay_on_the_grid() {
        let g = Grid::default();
        assert_eq!(g.quantize(i32::MAX), 2_147_483_640);
        assert_eq!(g.quantize(i32::MIN), -2_147_483_640);
        assert!(g.is_aligned(g.quantize(i32::MAX - 5)));
        assert_eq!(g.ceil(i32::MAX), 2_147_483_640);
    }

    #[test]
    fn ceil_rounds_up_to_a_multiple() {
        let g = Grid::default();
        assert_eq!(g.ceil(50), 60);
        assert_eq!(g.ceil(60), 60);
        assert_eq!(g.ceil(1), 20);
        assert_eq!(g.ceil(0), 0);
        assert_eq!(g.ceil(-15), 0);
        assert_eq!(Grid::new(40).ceil(50), 80);
    }

    #[test]
    fn snap_origin_keeps_size() {
        let g = Grid::default();
        let r = g.snap_origin(Rect::new(13, 47, 105, 33));
        assert_eq!(r, Rect::new(20, 40, 105, 33));
    }

    #[test]
    fn snap_size_keeps_origin() {
        let g = Grid::default();
        let r = g.snap_size(Rect::new(13, 47, 105, 33));
        assert_eq!(r, Rect::new(13, 47, 100, 40));
    }
}
