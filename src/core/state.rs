//! # Application State
//!
//! Core business state for the storefront. Domain logic only; presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: CatalogViewModel           // load lifecycle + products
//! ├── coordinator: ProductListCoordinator // detail-screen history
//! └── selected: usize                     // highlighted row on the list
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::catalog::{CatalogService, Product};
use crate::core::coordinator::ProductListCoordinator;
use crate::core::view_model::CatalogViewModel;

pub struct App {
    pub catalog: CatalogViewModel,
    pub coordinator: ProductListCoordinator,
    pub selected: usize,
}

impl App {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog: CatalogViewModel::new(service),
            coordinator: ProductListCoordinator::new(),
            selected: 0,
        }
    }

    /// The highlighted product, clamped to whatever list is loaded now.
    pub fn selected_product(&self) -> Option<Product> {
        let products = self.catalog.products();
        let index = self.selected.min(products.len().checked_sub(1)?);
        products.into_iter().nth(index)
    }
}
