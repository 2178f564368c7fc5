use std::collections::HashMap;

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::errors::{Error, Result};
use crate::style::types::Category;

static REGISTRY: Lazy<CodeRegistry> = Lazy::new(CodeRegistry::build);

/// Shared process-wide registry. Built on first access, read-only after.
pub fn global() -> &'static CodeRegistry {
    &REGISTRY
}

/// Lookup table from (category character, attribute character) to SGR
/// parameter strings.
///
/// The table is derived from the enums in [`crate::style::types`], which
/// remain the single source of truth for the code alphabets.
#[derive(Debug)]
pub struct CodeRegistry {
    categories: HashMap<char, CategoryEntry>,
}

#[derive(Debug)]
struct CategoryEntry {
    category: Category,
    params: HashMap<char, &'static str>,
}

impl CodeRegistry {
    fn build() -> Self {
        let mut categories = HashMap::new();
        for category in Category::iter() {
            let params = category.attributes().into_iter().collect();
            categories.insert(category.code_char(), CategoryEntry { category, params });
        }
        Self { categories }
    }

    /// Resolves one character pair to its SGR parameter string.
    pub fn param(&self, category: char, attribute: char) -> Result<&'static str> {
        let entry = self
            .categories
            .get(&category)
            .ok_or(Error::UnknownCategory { category })?;
        entry
            .params
            .get(&attribute)
            .copied()
            .ok_or(Error::UnknownAttribute {
                category: entry.category,
                attribute,
            })
    }

    /// The category selected by `ch`, if any.
    pub fn category(&self, ch: char) -> Option<Category> {
        self.categories.get(&ch).map(|entry| entry.category)
    }

    /// Number of categories in the table.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
