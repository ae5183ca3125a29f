//! Discretization of continuous columns into ordinal labels
//!
//! Two policies share one label vocabulary:
//! - fixed-interval cuts at [`RATE_BOUNDARIES`], used for per-game rates
//! - quantile cuts into five equal-population groups by rank, recomputed from
//!   whatever column is passed in
//!
//! A value equal to a boundary falls into the higher bucket. Only NaN inputs
//! produce `None`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Boundaries between the five rate buckets
pub const RATE_BOUNDARIES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

pub const QUANTILE_BUCKETS: usize = 5;

/// Height boundaries in centimetres
pub const HEIGHT_BOUNDARIES: [f64; 3] = [175.0, 185.0, 195.0];
pub const HEIGHT_LABELS: [&str; 4] = ["<175", "175-185", "185-195", "GIANT"];

/// Weight boundaries in kilograms
pub const WEIGHT_BOUNDARIES: [f64; 6] = [75.0, 85.0, 95.0, 105.0, 115.0, 130.0];
pub const WEIGHT_LABELS: [&str; 7] = [
    "<75",
    "75-85",
    "85-95",
    "95-105",
    "105-115",
    "115-130",
    "MAXICHONKER",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::VeryLow,
        Category::Low,
        Category::Medium,
        Category::High,
        Category::VeryHigh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::VeryLow => "very low",
            Category::Low => "low",
            Category::Medium => "medium",
            Category::High => "high",
            Category::VeryHigh => "very high",
        }
    }

    fn from_index(idx: usize) -> Self {
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Index of the bucket `value` falls in: the number of boundaries at or below it
pub fn bucket_index(value: f64, boundaries: &[f64]) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    Some(boundaries.iter().take_while(|b| value >= **b).count())
}

/// Fixed-interval rate category
pub fn fixed_cut(value: f64) -> Option<Category> {
    bucket_index(value, &RATE_BOUNDARIES).map(Category::from_index)
}

/// Quantile categories aligned with `values`. Defined values are ranked
/// ascending (ties keep input order) and split into five groups whose sizes
/// differ by at most one.
pub fn quantile_cut(values: &[f64]) -> Vec<Option<Category>> {
    let mut ranked: Vec<usize> = (0..values.len()).filter(|&i| !values[i].is_nan()).collect();
    ranked.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let n = ranked.len();
    let mut out = vec![None; values.len()];
    for (rank, idx) in ranked.into_iter().enumerate() {
        out[idx] = Some(Category::from_index(rank * QUANTILE_BUCKETS / n));
    }
    out
}

/// Quantile categories over an optional column; `None` counts as undefined
pub fn quantile_cut_opt(values: &[Option<f64>]) -> Vec<Option<Category>> {
    let values: Vec<f64> = values.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    quantile_cut(&values)
}

pub fn height_bin(height_cm: Option<f64>) -> Option<&'static str> {
    bucket_index(height_cm?, &HEIGHT_BOUNDARIES).map(|i| HEIGHT_LABELS[i])
}

pub fn weight_bin(weight_kg: Option<f64>) -> Option<&'static str> {
    bucket_index(weight_kg?, &WEIGHT_BOUNDARIES).map(|i| WEIGHT_LABELS[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_fixed_cut_boundaries_go_up() {
        assert_eq!(fixed_cut(0.0), Some(Category::VeryLow));
        assert_eq!(fixed_cut(0.19999), Some(Category::VeryLow));
        assert_eq!(fixed_cut(0.2), Some(Category::Low));
        assert_eq!(fixed_cut(0.4), Some(Category::Medium));
        assert_eq!(fixed_cut(0.6), Some(Category::High));
        assert_eq!(fixed_cut(0.8), Some(Category::VeryHigh));
        assert_eq!(fixed_cut(3.5), Some(Category::VeryHigh));
        assert_eq!(fixed_cut(-1.0), Some(Category::VeryLow));
    }

    #[test]
    fn test_fixed_cut_nan_has_no_bucket() {
        assert_eq!(fixed_cut(f64::NAN), None);
    }

    #[test]
    fn test_quantile_cut_equal_groups() {
        let values: Vec<f64> = (0..25).rev().map(|v| v as f64).collect();
        let cats = quantile_cut(&values);

        let mut counts: HashMap<Category, usize> = HashMap::new();
        for c in cats.iter().flatten() {
            *counts.entry(*c).or_default() += 1;
        }
        for c in Category::ALL {
            assert_eq!(counts[&c], 5, "{}", c);
        }
        // Largest value first in input, highest bucket
        assert_eq!(cats[0], Some(Category::VeryHigh));
        assert_eq!(cats[24], Some(Category::VeryLow));
    }

    #[test]
    fn test_quantile_cut_uneven_population() {
        let values: Vec<f64> = (0..7).map(|v| v as f64).collect();
        let cats = quantile_cut(&values);
        let mut counts = [0usize; 5];
        for c in cats.iter().flatten() {
            counts[*c as usize] += 1;
        }
        assert_eq!(counts.iter().sum::<usize>(), 7);
        assert!(counts.iter().all(|&c| (1..=2).contains(&c)));
    }

    #[test]
    fn test_quantile_cut_skips_nan_and_keeps_rows() {
        let values = [3.0, f64::NAN, 1.0, 2.0, 5.0, 4.0];
        let cats = quantile_cut(&values);
        assert_eq!(cats.len(), values.len());
        assert_eq!(cats[1], None);
        assert_eq!(cats[2], Some(Category::VeryLow));
        assert_eq!(cats[4], Some(Category::VeryHigh));
    }

    #[test]
    fn test_quantile_cut_ties_split_by_input_order() {
        let values = [1.0; 10];
        let cats = quantile_cut(&values);
        assert_eq!(cats[0], Some(Category::VeryLow));
        assert_eq!(cats[9], Some(Category::VeryHigh));
    }

    #[test]
    fn test_quantile_cut_empty() {
        assert!(quantile_cut(&[]).is_empty());
        assert_eq!(quantile_cut_opt(&[None, None]), vec![None, None]);
    }

    #[test]
    fn test_height_and_weight_bins() {
        assert_eq!(height_bin(Some(174.9)), Some("<175"));
        assert_eq!(height_bin(Some(185.0)), Some("185-195"));
        assert_eq!(height_bin(Some(203.0)), Some("GIANT"));
        assert_eq!(height_bin(None), None);
        assert_eq!(weight_bin(Some(90.0)), Some("85-95"));
        assert_eq!(weight_bin(Some(130.0)), Some("MAXICHONKER"));
    }

    #[test]
    fn test_category_parses_its_label() {
        for c in Category::ALL {
            assert_eq!(c.label().to_uppercase().parse::<Category>(), Ok(c));
        }
    }
}
