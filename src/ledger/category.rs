/// Name of the category every ledger starts with.
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// A named grouping used to tag transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-insensitive exact comparison against `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case_only() {
        let category = Category::new(2, "Food");
        assert!(category.matches_name("food"));
        assert!(category.matches_name("FOOD"));
        assert!(!category.matches_name(" food"));
        assert!(!category.matches_name("foods"));
    }

    #[test]
    fn name_match_handles_non_ascii() {
        let category = Category::new(3, "Über");
        assert!(category.matches_name("über"));
    }
}
