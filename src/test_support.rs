//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::catalog::{CatalogResponse, CatalogService, Product};
use crate::transport::RequestError;

enum Outcome {
    Respond(Result<CatalogResponse, RequestError>),
    Panic,
}

/// A scripted catalog service that counts its calls.
///
/// When gated, each fetch waits for a matching [`release`](Self::release)
/// before answering, which keeps a load in flight for as long as a test needs.
pub struct MockCatalogService {
    outcome: Mutex<Outcome>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl MockCatalogService {
    pub fn succeeding(response: CatalogResponse) -> Self {
        Self::with_outcome(Outcome::Respond(Ok(response)))
    }

    pub fn failing(error: RequestError) -> Self {
        Self::with_outcome(Outcome::Respond(Err(error)))
    }

    pub fn panicking() -> Self {
        Self::with_outcome(Outcome::Panic)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    /// Lets one waiting (or future) fetch through the gate.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Replaces the answer given by subsequent fetches.
    pub fn respond_with(&self, result: Result<CatalogResponse, RequestError>) {
        *self.outcome.lock().unwrap() = Outcome::Respond(result);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn fetch_catalog(&self) -> Result<CatalogResponse, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        // Clone out first so a scripted panic never poisons the lock.
        let scripted = match &*self.outcome.lock().unwrap() {
            Outcome::Respond(result) => Some(result.clone()),
            Outcome::Panic => None,
        };
        match scripted {
            Some(result) => result,
            None => panic!("scripted catalog failure"),
        }
    }
}

/// A catalog with `n` products whose `product_count` matches.
pub fn sample_catalog(n: usize) -> CatalogResponse {
    CatalogResponse {
        products: (1..=n).map(sample_product).collect(),
        title: "Sample Catalog".to_string(),
        product_count: n as i64,
    }
}

pub fn sample_product(n: usize) -> Product {
    Product::new(
        n.to_string(),
        format!("Product {n}"),
        format!("£{}", n * 10),
        format!("https://example.com/{n}.jpg"),
    )
}
