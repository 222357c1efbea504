//! # Navigation Coordinator
//!
//! Keeps the history of detail screens the user has opened. The list screen
//! is the implicit root, so an empty path means "showing the list".

use log::debug;

use crate::catalog::Product;

#[derive(Debug, Default)]
pub struct ProductListCoordinator {
    path: Vec<Product>,
}

impl ProductListCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle hook run once when the root screen first appears.
    pub fn start(&mut self) {
        debug!("Coordinator started");
        self.pop_to_root();
    }

    /// Pushes a detail screen. Repeats are allowed; this is history, not a set.
    pub fn show_product_detail(&mut self, product: Product) {
        debug!(
            "Navigating to detail for {:?} (depth {})",
            product.name,
            self.path.len() + 1
        );
        self.path.push(product);
    }

    /// Pops one screen. Does nothing at the root.
    pub fn go_back(&mut self) {
        if self.path.pop().is_some() {
            debug!("Navigated back (depth {})", self.path.len());
        }
    }

    pub fn pop_to_root(&mut self) {
        self.path.clear();
    }

    pub fn path(&self) -> &[Product] {
        &self.path
    }

    /// The detail screen currently on top, if any.
    pub fn top(&self) -> Option<&Product> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }
}
