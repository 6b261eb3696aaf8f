//! Grid filter and sort options.

use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// An inclusive price window.
///
/// Written as `"min-max"`. An empty min means no lower bound; an empty or
/// zero max means no upper bound, so `"1000-"` and `"1000-0"` both mean
/// "1000 and up".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max: max.filter(|m| *m != 0.0),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        if self.min.is_some_and(|min| price < min) {
            return false;
        }
        !self.max.is_some_and(|max| price > max)
    }
}

impl FromStr for PriceRange {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(2, '-');
        let min = parse_bound(parts.next().unwrap_or(""), s)?;
        let max = parse_bound(parts.next().unwrap_or(""), s)?;
        Ok(Self::new(min, max))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{}", min)?;
        }
        write!(f, "-")?;
        if let Some(max) = self.max {
            write!(f, "{}", max)?;
        }
        Ok(())
    }
}

fn parse_bound(part: &str, whole: &str) -> Result<Option<f64>, CartError> {
    let part = part.trim();
    if part.is_empty() {
        return Ok(None);
    }
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| CartError::InvalidPriceRange(whole.to_string()))
}

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Keep the current order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by title A-Z.
    Name,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Name => "Name: A-Z",
        }
    }

    /// Parse a sort value. Unknown values keep the current order.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-low" => SortOption::PriceLow,
            "price-high" => SortOption::PriceHigh,
            "name" => SortOption::Name,
            _ => SortOption::Featured,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
