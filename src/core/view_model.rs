//! # Catalog View-Model
//!
//! Owns the load lifecycle for the product list and publishes every change
//! through a `tokio::sync::watch` channel, so a view can either poll
//! [`CatalogViewModel::state`] or hold a [`watch::Receiver`] and redraw on
//! change.
//!
//! ```text
//!            load()/retry()
//!   Idle ─────────────────────► Loading ──ok──► Loaded
//!    ▲                           │  ▲              │
//!    │ clear_error()             │  └──load()──────┘
//!    │                           ▼
//!    └──────────────────────── Error(msg) ──load()──► Loading
//! ```
//!
//! The `Loading` write happens before `load()` returns and is a single
//! check-and-set, so at most one fetch is ever in flight per view-model.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::{DateTime, Local};
use futures::FutureExt;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogService, Product};
use crate::transport::RequestError;

pub const SERVER_ERROR_MESSAGE: &str = "Server temporarily unavailable. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Please check your internet connection.";
pub const PARSING_ERROR_MESSAGE: &str = "Unable to process server response.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Everything the view layer reads, published as one value.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub state: LoadState,
    pub products: Vec<Product>,
    pub title: String,
    /// As reported by the endpoint; may differ from `products.len()`.
    pub product_count: i64,
    pub loaded_at: Option<DateTime<Local>>,
}

/// Maps a failure to the message shown to the user.
pub fn error_message(error: &(dyn std::error::Error + 'static)) -> &'static str {
    match error.downcast_ref::<RequestError>() {
        Some(RequestError::Server { .. }) => SERVER_ERROR_MESSAGE,
        Some(RequestError::Network(_)) => NETWORK_ERROR_MESSAGE,
        Some(RequestError::Parsing(_)) => PARSING_ERROR_MESSAGE,
        None => UNEXPECTED_ERROR_MESSAGE,
    }
}

/// Handle to the catalog view-model. Clones share the same state.
#[derive(Clone)]
pub struct CatalogViewModel {
    service: Arc<dyn CatalogService>,
    state: Arc<watch::Sender<CatalogSnapshot>>,
}

impl CatalogViewModel {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::default());
        Self {
            service,
            state: Arc::new(state),
        }
    }

    /// Starts a catalog fetch unless one is already running.
    ///
    /// Returns `None` when a load is in flight. Otherwise the state is
    /// `Loading` by the time this returns, and the handle resolves once the
    /// terminal state (`Loaded` or `Error`) has been written. Dropping the
    /// handle does not cancel the fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&self) -> Option<JoinHandle<()>> {
        let started = self.state.send_if_modified(|snapshot| {
            if snapshot.state.is_loading() {
                return false;
            }
            snapshot.state = LoadState::Loading;
            true
        });

        if !started {
            debug!("Catalog load ignored: a load is already in flight");
            return None;
        }

        info!("Catalog load started");
        let service = self.service.clone();
        let state = self.state.clone();

        Some(tokio::spawn(async move {
            let outcome = AssertUnwindSafe(service.fetch_catalog())
                .catch_unwind()
                .await;

            state.send_modify(|snapshot| match outcome {
                Ok(Ok(response)) => {
                    info!(
                        "Catalog loaded: {:?} with {} products",
                        response.title,
                        response.products.len()
                    );
                    snapshot.products = response.products;
                    snapshot.title = response.title;
                    snapshot.product_count = response.product_count;
                    snapshot.loaded_at = Some(Local::now());
                    snapshot.state = LoadState::Loaded;
                }
                Ok(Err(e)) => {
                    warn!("Catalog load failed: {}", e);
                    snapshot.state = LoadState::Error(error_message(&e).to_string());
                }
                Err(_) => {
                    warn!("Catalog load panicked");
                    snapshot.state = LoadState::Error(UNEXPECTED_ERROR_MESSAGE.to_string());
                }
            });
        }))
    }

    /// Same as [`load`](Self::load).
    pub fn retry(&self) -> Option<JoinHandle<()>> {
        self.load()
    }

    /// Moves `Error` back to `Idle`; does nothing in any other state.
    pub fn clear_error(&self) {
        self.state.send_if_modified(|snapshot| {
            if !snapshot.state.has_error() {
                return false;
            }
            snapshot.state = LoadState::Idle;
            true
        });
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().state.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn product_count(&self) -> i64 {
        self.state.borrow().product_count
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.state.borrow().loaded_at
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes. The receiver starts out marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }
}
