//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Pressing `r`? That's `Action::Load`. Enter on a row? `Action::OpenSelected`.
//!
//! `update()` applies an action to the state and returns an `Effect` for the
//! event loop to carry out. Starting a fetch needs the tokio runtime, so it is
//! an effect rather than something `update()` does itself.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Load or refresh the catalog. Doubles as retry.
    Load,
    SelectNext,
    SelectPrevious,
    /// Open the detail screen for the highlighted product.
    OpenSelected,
    /// Dismiss the error if one is showing, otherwise pop one screen.
    Back,
    PopToRoot,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    StartLoad,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Load => Effect::StartLoad,
        Action::SelectNext => {
            if app.coordinator.is_at_root() {
                let last = clamp_selection(app);
                app.selected = (app.selected + 1).min(last);
            }
            Effect::None
        }
        Action::SelectPrevious => {
            if app.coordinator.is_at_root() {
                clamp_selection(app);
                app.selected = app.selected.saturating_sub(1);
            }
            Effect::None
        }
        Action::OpenSelected => {
            if app.coordinator.is_at_root()
                && let Some(product) = app.selected_product()
            {
                app.coordinator.show_product_detail(product);
            }
            Effect::None
        }
        Action::Back => {
            if app.catalog.state().has_error() {
                app.catalog.clear_error();
            } else {
                app.coordinator.go_back();
            }
            Effect::None
        }
        Action::PopToRoot => {
            app.coordinator.pop_to_root();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Pulls `selected` back inside the current list, which may have shrunk
/// since the last refresh. Returns the last valid index.
fn clamp_selection(app: &mut App) -> usize {
    let last = app.catalog.products().len().saturating_sub(1);
    app.selected = app.selected.min(last);
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view_model::LoadState;
    use crate::test_support::{MockCatalogService, sample_catalog};
    use crate::transport::RequestError;
    use std::sync::Arc;

    async fn loaded_app(n: usize) -> App {
        let app = App::new(Arc::new(MockCatalogService::succeeding(sample_catalog(n))));
        app.catalog.load().unwrap().await.unwrap();
        app
    }

    #[test]
    fn test_load_requests_fetch() {
        let mut app = App::new(Arc::new(MockCatalogService::succeeding(sample_catalog(1))));
        assert_eq!(update(&mut app, Action::Load), Effect::StartLoad);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Arc::new(MockCatalogService::succeeding(sample_catalog(1))));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[tokio::test]
    async fn test_selection_stays_in_bounds() {
        let mut app = loaded_app(2).await;

        update(&mut app, Action::SelectPrevious);
        assert_eq!(app.selected, 0);

        update(&mut app, Action::SelectNext);
        update(&mut app, Action::SelectNext);
        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_up_moves_highlight_after_shorter_refresh() {
        let service = Arc::new(MockCatalogService::succeeding(sample_catalog(10)));
        let mut app = App::new(service.clone());
        app.catalog.load().unwrap().await.unwrap();
        for _ in 0..9 {
            update(&mut app, Action::SelectNext);
        }
        assert_eq!(app.selected, 9);

        service.respond_with(Ok(sample_catalog(3)));
        app.catalog.load().unwrap().await.unwrap();
        assert_eq!(app.selected_product().unwrap().source_id, "3");

        update(&mut app, Action::SelectPrevious);
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_product().unwrap().source_id, "2");
    }

    #[tokio::test]
    async fn test_down_after_shorter_refresh_stays_on_last_row() {
        let service = Arc::new(MockCatalogService::succeeding(sample_catalog(5)));
        let mut app = App::new(service.clone());
        app.catalog.load().unwrap().await.unwrap();
        app.selected = 4;

        service.respond_with(Ok(sample_catalog(2)));
        app.catalog.load().unwrap().await.unwrap();

        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_open_selected_pushes_detail() {
        let mut app = loaded_app(3).await;
        update(&mut app, Action::SelectNext);

        update(&mut app, Action::OpenSelected);

        let top = app.coordinator.top().unwrap();
        assert_eq!(top.source_id, "2");
    }

    #[tokio::test]
    async fn test_open_selected_ignored_on_detail_screen() {
        let mut app = loaded_app(3).await;
        update(&mut app, Action::OpenSelected);
        update(&mut app, Action::OpenSelected);
        assert_eq!(app.coordinator.depth(), 1);
    }

    #[test]
    fn test_open_selected_with_no_products_is_noop() {
        let mut app = App::new(Arc::new(MockCatalogService::succeeding(sample_catalog(0))));
        update(&mut app, Action::OpenSelected);
        assert!(app.coordinator.is_at_root());
    }

    #[tokio::test]
    async fn test_back_and_pop_to_root() {
        let mut app = loaded_app(2).await;
        update(&mut app, Action::OpenSelected);
        update(&mut app, Action::Back);
        assert!(app.coordinator.is_at_root());

        update(&mut app, Action::Back);
        assert!(app.coordinator.is_at_root());

        update(&mut app, Action::OpenSelected);
        update(&mut app, Action::PopToRoot);
        assert!(app.coordinator.is_at_root());
    }

    #[tokio::test]
    async fn test_back_clears_error_before_navigating() {
        let service = Arc::new(MockCatalogService::succeeding(sample_catalog(2)));
        let mut app = App::new(service.clone());
        app.catalog.load().unwrap().await.unwrap();
        update(&mut app, Action::OpenSelected);

        service.respond_with(Err(RequestError::Server { status: 500 }));
        app.catalog.load().unwrap().await.unwrap();

        update(&mut app, Action::Back);
        assert_eq!(app.catalog.state(), LoadState::Idle);
        assert_eq!(app.coordinator.depth(), 1);

        update(&mut app, Action::Back);
        assert!(app.coordinator.is_at_root());
    }
}
