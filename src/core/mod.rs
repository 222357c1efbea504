//! # Core Application Logic
//!
//! The storefront's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • View-model (load)    │
//!                    │  • Coordinator (nav)    │
//!                    │  • Action + update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Catalog   │
//!     │  Adapter   │                          │  Service   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`view_model`]: `CatalogViewModel`, the idle/loading/loaded/error lifecycle
//! - [`coordinator`]: `ProductListCoordinator`, the detail-screen history
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything the user can do
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod coordinator;
pub mod state;
pub mod view_model;
