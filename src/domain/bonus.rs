//! Power grid bonuses.
//!
//! Two kinds exist:
//!
//! - `Additive`: a flat MW increase, scaled by the Power Grid Management skill
//! - `Multiplicative`: a percentage of the current grid
//!
//! Addition and multiplication do not commute, so when bonuses are stacked
//! every additive bonus must be applied before any multiplicative one:
//!
//! `(g + a) × m != g × m + a`
//!
//! [`Bonus::rank`] is the sort key the catalog uses to enforce that order.

/// Fractional increase of additive bonuses per Power Grid Management level.
pub const PGM_BONUS_PER_LEVEL: f64 = 0.05;

/// A single module's effect on the hull power grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bonus {
    /// Flat increase in MW, already scaled by skill.
    Additive { increase: f64 },
    /// Grid multiplier (`1 + percent / 100`).
    Multiplicative { multiplier: f64 },
}

impl Bonus {
    /// Flat bonus of `raw` MW scaled by `1 + pgm_level × 0.05`.
    pub fn additive(raw: f64, pgm_level: u8) -> Self {
        Bonus::Additive {
            increase: raw * (1.0 + f64::from(pgm_level) * PGM_BONUS_PER_LEVEL),
        }
    }

    /// Percentage bonus, e.g. `percent(15.0)` multiplies the grid by `1.15`.
    pub fn percent(percent: f64) -> Self {
        Bonus::Multiplicative {
            multiplier: 1.0 + percent / 100.0,
        }
    }

    /// Apply this bonus once to `grid`.
    pub fn apply(self, grid: f64) -> f64 {
        match self {
            Bonus::Additive { increase } => grid + increase,
            Bonus::Multiplicative { multiplier } => grid * multiplier,
        }
    }

    /// Application order: lower ranks are applied first.
    pub fn rank(self) -> u8 {
        match self {
            Bonus::Additive { .. } => 0,
            Bonus::Multiplicative { .. } => 1,
        }
    }

    /// Short label for terminal output (`+12.50 MW`, `+15.00%`).
    pub fn describe(self) -> String {
        match self {
            Bonus::Additive { increase } => format!("{increase:+.2} MW"),
            Bonus::Multiplicative { multiplier } => format!("{:+.2}%", (multiplier - 1.0) * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_scales_with_skill_level() {
        assert!((Bonus::additive(10.0, 5).apply(90.0) - 102.5).abs() < 1e-12);
        assert!((Bonus::additive(10.0, 0).apply(90.0) - 100.0).abs() < 1e-12);
        assert!((Bonus::additive(12.0, 3).apply(0.0) - 13.8).abs() < 1e-12);
    }

    #[test]
    fn percent_multiplies_current_grid() {
        let g = Bonus::percent(10.0).apply(100.0);
        assert!((g - 110.0).abs() < 1e-12);
        let g = Bonus::percent(15.0).apply(g);
        assert!((g - 126.5).abs() < 1e-9);
    }

    #[test]
    fn additive_ranks_before_multiplicative() {
        assert!(Bonus::additive(1.0, 5).rank() < Bonus::percent(1.0).rank());
    }

    #[test]
    fn order_of_application_matters() {
        let add = Bonus::additive(10.0, 5);
        let mul = Bonus::percent(10.0);
        let add_first = mul.apply(add.apply(100.0));
        let mul_first = add.apply(mul.apply(100.0));
        assert!((add_first - 123.75).abs() < 1e-9);
        assert!((mul_first - 122.5).abs() < 1e-9);
    }

    #[test]
    fn describe_formats_both_kinds() {
        assert_eq!(Bonus::additive(10.0, 5).describe(), "+12.50 MW");
        assert_eq!(Bonus::percent(15.5).describe(), "+15.50%");
    }
}
