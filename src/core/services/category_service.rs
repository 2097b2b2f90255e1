use crate::ledger::{Category, Ledger};

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    /// Registers a category after trimming its name. Names must be non-blank
    /// and unique ignoring case.
    pub fn add(ledger: &mut Ledger, raw_name: &str) -> ServiceResult<Category> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(ServiceError::EmptyCategoryName);
        }
        if ledger.find_category_by_name(name).is_some() {
            return Err(ServiceError::DuplicateCategoryName(name.to_string()));
        }
        Ok(ledger.add_category(name).clone())
    }

    pub fn list(ledger: &Ledger) -> &[Category] {
        ledger.categories()
    }

    /// Registered names joined for display, e.g. `General, Food`.
    pub fn joined_names(ledger: &Ledger) -> String {
        Self::list(ledger)
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
