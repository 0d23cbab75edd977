//! Category navigation menu.
//!
//! The header carries a togglable category menu. The list is fetched fresh
//! on every mount (no caching), name ascending; a fetch failure yields an
//! empty menu with no retry and no surfaced error. Selecting an entry
//! closes the menu and navigates to the category's listing route.

use tracing::warn;

use perfume_house_core::{Category, CategoryId};

use crate::gateway::StoreGateway;

/// The category selection menu.
#[derive(Debug, Clone, Default)]
pub struct CategoryMenu {
    categories: Vec<Category>,
    open: bool,
}

impl CategoryMenu {
    /// Fetch the category list for a fresh mount.
    pub async fn load(gateway: &dyn StoreGateway) -> Self {
        let categories = match gateway.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!("category fetch failed: {e}; menu renders empty");
                Vec::new()
            }
        };

        Self {
            categories,
            open: false,
        }
    }

    /// The entries, in fetch order (name ascending).
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the dropdown.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Select an entry: closes the menu and returns the route to navigate
    /// to.
    pub fn select(&mut self, id: CategoryId) -> String {
        self.open = false;
        format!("/category/{id}")
    }
}
