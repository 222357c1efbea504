//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: catalog title, counts, last refresh
//! - `ProductDetail`: the product on top of the navigation stack
//! - `LoadingView` / `ErrorView`: centered overlays for the load lifecycle
//!
//! ## Stateful Components
//!
//! - `ProductList`: scrollable root list, borrows its `ListState` from `TuiState`
//!
//! Components receive external data as props rather than reading `App`
//! directly, so each file can be tested with a `TestBackend` alone.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── product_list.rs    (Root screen)
//! ├── product_detail.rs  (Detail screen)
//! └── status_overlay.rs  (Loading + error overlays)
//! ```

pub mod product_detail;
pub mod product_list;
pub mod status_overlay;
mod title_bar;

pub use product_detail::ProductDetail;
pub use product_list::ProductList;
pub use status_overlay::{ErrorView, LoadingView};
pub use title_bar::TitleBar;
