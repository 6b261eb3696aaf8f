//! The product grid: display order plus per-card visibility.

use std::cmp::Ordering;

use crate::catalog::{PriceRange, ProductCard, SortOption, ALL_CATEGORIES};

#[derive(Debug, Clone, PartialEq)]
struct GridEntry {
    card: ProductCard,
    visible: bool,
}

/// Product cards in display order, each shown or hidden.
///
/// `filter` and `search` each recompute visibility for every card from
/// scratch; the last one applied wins. `sort` only reorders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductGrid {
    entries: Vec<GridEntry>,
}

impl ProductGrid {
    /// Build a grid with every card visible.
    pub fn new(cards: impl IntoIterator<Item = ProductCard>) -> Self {
        Self {
            entries: cards
                .into_iter()
                .map(|card| GridEntry {
                    card,
                    visible: true,
                })
                .collect(),
        }
    }

    /// Show only cards in `category` whose price falls in `range`.
    ///
    /// `None` or `"all"` for the category matches every card; `None` for the
    /// range matches every price.
    pub fn filter(&mut self, category: Option<&str>, range: Option<&PriceRange>) {
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        for entry in &mut self.entries {
            let category_ok = category.map_or(true, |c| entry.card.category == c);
            let price_ok = range.map_or(true, |r| r.contains(entry.card.price));
            entry.visible = category_ok && price_ok;
        }
        tracing::debug!(?category, ?range, visible = self.visible_count(), "grid filtered");
    }

    /// Reorder the cards. [`SortOption::Featured`] leaves the order as is.
    pub fn sort(&mut self, option: SortOption) {
        match option {
            SortOption::Featured => {}
            SortOption::PriceLow => self
                .entries
                .sort_by(|a, b| compare_price(a.card.price, b.card.price)),
            SortOption::PriceHigh => self
                .entries
                .sort_by(|a, b| compare_price(b.card.price, a.card.price)),
            SortOption::Name => self
                .entries
                .sort_by(|a, b| compare_title(&a.card.title, &b.card.title)),
        }
    }

    /// Show cards whose title or description contains `query`, ignoring case.
    pub fn search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        for entry in &mut self.entries {
            entry.visible = entry.card.matches_lowercase(&needle);
        }
        tracing::debug!(query, visible = self.visible_count(), "grid searched");
    }

    /// Make every card visible again.
    pub fn show_all(&mut self) {
        for entry in &mut self.entries {
            entry.visible = true;
        }
    }

    /// All cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &ProductCard> {
        self.entries.iter().map(|e| &e.card)
    }

    /// Visible cards in display order.
    pub fn visible(&self) -> impl Iterator<Item = &ProductCard> {
        self.entries.iter().filter(|e| e.visible).map(|e| &e.card)
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    /// Visibility of the card with `id`; `None` if it isn't in the grid.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.card.id.as_str() == id)
            .map(|e| e.visible)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compare_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn card(id: &str, title: &str, category: &str, price: f64) -> ProductCard {
        ProductCard {
            id: ProductId::new(id),
            title: title.to_string(),
            description: None,
            category: category.to_string(),
            price,
            image: String::new(),
        }
    }

    fn grid() -> ProductGrid {
        ProductGrid::new(vec![
            card("ring", "Silver Ring", "rings", 120.0),
            card("necklace", "Gold Necklace", "necklaces", 1500.0),
            card("earrings", "pearl Earrings", "earrings", 300.0),
            card("band", "Wedding Band", "rings", 800.0),
        ])
    }

    fn visible_ids(grid: &ProductGrid) -> Vec<&str> {
        grid.visible().map(|c| c.id.as_str()).collect()
    }

    fn order(grid: &ProductGrid) -> Vec<&str> {
        grid.cards().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_new_grid_all_visible() {
        let grid = grid();
        assert_eq!(grid.visible_count(), 4);
    }

    #[test]
    fn test_search_ring() {
        let mut grid = grid();
        grid.search("ring");
        assert_eq!(grid.is_visible("ring"), Some(true));
        assert_eq!(grid.is_visible("necklace"), Some(false));
        // "Earrings" contains "ring" as well.
        assert_eq!(visible_ids(&grid), vec!["ring", "earrings"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut grid = grid();
        grid.search("GOLD");
        assert_eq!(visible_ids(&grid), vec!["necklace"]);
    }

    #[test]
    fn test_search_description() {
        let mut grid = ProductGrid::new(vec![ProductCard {
            description: Some("Hand-made sterling piece".to_string()),
            ..card("x", "Charm", "charms", 10.0)
        }]);
        grid.search("sterling");
        assert_eq!(grid.visible_count(), 1);
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let mut grid = grid();
        grid.search("necklace");
        grid.search("");
        assert_eq!(grid.visible_count(), 4);
    }

    #[test]
    fn test_filter_category() {
        let mut grid = grid();
        grid.filter(Some("rings"), None);
        assert_eq!(visible_ids(&grid), vec!["ring", "band"]);

        grid.filter(Some("all"), None);
        assert_eq!(grid.visible_count(), 4);
    }

    #[test]
    fn test_filter_category_and_price() {
        let mut grid = grid();
        let range: PriceRange = "200-1000".parse().unwrap();
        grid.filter(Some("rings"), Some(&range));
        assert_eq!(visible_ids(&grid), vec!["band"]);

        grid.filter(None, Some(&range));
        assert_eq!(visible_ids(&grid), vec!["earrings", "band"]);
    }

    #[test]
    fn test_sort_price() {
        let mut grid = grid();
        grid.sort(SortOption::PriceLow);
        assert_eq!(order(&grid), vec!["ring", "earrings", "band", "necklace"]);

        grid.sort(SortOption::PriceHigh);
        assert_eq!(order(&grid), vec!["necklace", "band", "earrings", "ring"]);
    }

    #[test]
    fn test_sort_name_ignores_case() {
        let mut grid = grid();
        grid.sort(SortOption::Name);
        assert_eq!(order(&grid), vec!["necklace", "earrings", "ring", "band"]);
    }

    #[test]
    fn test_sort_featured_keeps_order() {
        let mut grid = grid();
        grid.sort(SortOption::Featured);
        assert_eq!(order(&grid), vec!["ring", "necklace", "earrings", "band"]);
    }

    #[test]
    fn test_sort_keeps_visibility() {
        let mut grid = grid();
        grid.search("ring");
        grid.sort(SortOption::PriceHigh);
        assert_eq!(visible_ids(&grid), vec!["earrings", "ring"]);
    }

    #[test]
    fn test_unknown_card() {
        assert_eq!(grid().is_visible("missing"), None);
    }
}
