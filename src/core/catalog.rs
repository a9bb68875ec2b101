//! Item catalog - the static pool of sortable items
//!
//! Sixteen candidate items, half compostable and half trash. A session draws
//! a random subset without replacement at setup time.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::Category;

/// Number of entries in [`CATALOG`].
pub const CATALOG_LEN: usize = 16;

/// A candidate item: display glyph plus its correct disposal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub glyph: char,
    pub category: Category,
}

const fn entry(glyph: char, category: Category) -> CatalogEntry {
    CatalogEntry { glyph, category }
}

/// All sortable items.
pub const CATALOG: [CatalogEntry; CATALOG_LEN] = [
    // Compost
    entry('🍎', Category::Compost),
    entry('🍌', Category::Compost),
    entry('🥕', Category::Compost),
    entry('🥬', Category::Compost),
    entry('🥚', Category::Compost),
    entry('🍞', Category::Compost),
    entry('🍂', Category::Compost),
    entry('☕', Category::Compost),
    // Trash
    entry('🍼', Category::Trash),
    entry('🥤', Category::Trash),
    entry('🔋', Category::Trash),
    entry('🛍', Category::Trash),
    entry('🍟', Category::Trash),
    entry('🥡', Category::Trash),
    entry('💡', Category::Trash),
    entry('🧃', Category::Trash),
];

/// Draw `count` catalog entries without replacement, order randomized.
///
/// Returns `None` when `count` exceeds the catalog size. Sampling more items
/// than exist is a configuration bug, so the call fails fast instead of
/// silently truncating.
pub fn sample(rng: &mut SimpleRng, count: usize) -> Option<ArrayVec<CatalogEntry, CATALOG_LEN>> {
    if count > CATALOG_LEN {
        return None;
    }

    let mut pool = CATALOG;
    rng.shuffle(&mut pool);

    Some(pool.iter().take(count).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_evenly_split() {
        let compost = CATALOG
            .iter()
            .filter(|e| e.category == Category::Compost)
            .count();
        assert_eq!(compost, CATALOG_LEN / 2);
    }

    #[test]
    fn test_sample_returns_requested_count() {
        let mut rng = SimpleRng::new(42);
        let picked = sample(&mut rng, 10).unwrap();
        assert_eq!(picked.len(), 10);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let mut rng = SimpleRng::new(42);
        let picked = sample(&mut rng, 10).unwrap();

        for (i, a) in picked.iter().enumerate() {
            for b in picked.iter().skip(i + 1) {
                assert_ne!(a.glyph, b.glyph, "duplicate glyph in sample");
            }
        }
    }

    #[test]
    fn test_sample_full_catalog() {
        let mut rng = SimpleRng::new(7);
        let picked = sample(&mut rng, CATALOG_LEN).unwrap();
        assert_eq!(picked.len(), CATALOG_LEN);
    }

    #[test]
    fn test_sample_rejects_oversized_count() {
        let mut rng = SimpleRng::new(7);
        assert!(sample(&mut rng, CATALOG_LEN + 1).is_none());
    }

    #[test]
    fn test_sample_is_deterministic_per_seed() {
        let a = sample(&mut SimpleRng::new(5), 6).unwrap();
        let b = sample(&mut SimpleRng::new(5), 6).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
