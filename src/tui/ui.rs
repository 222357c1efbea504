use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::core::view_model::LoadState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorView, LoadingView, ProductDetail, ProductList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let snapshot = app.catalog.snapshot();
    let top = app.coordinator.top();

    TitleBar {
        title: &snapshot.title,
        shown: snapshot.products.len(),
        product_count: snapshot.product_count,
        loaded_at: snapshot.loaded_at,
        detail: top.map(|p| p.name.as_str()),
    }
    .render(frame, title_area);

    // Main area: detail screen if one is pushed, otherwise the list
    match top {
        Some(product) => ProductDetail {
            product,
            depth: app.coordinator.depth(),
        }
        .render(frame, main_area),
        None => ProductList {
            state: &mut tui.list_state,
            products: &snapshot.products,
            selected: app.selected,
        }
        .render(frame, main_area),
    }

    match &snapshot.state {
        LoadState::Loading => LoadingView { spinner_frame }.render(frame, main_area),
        LoadState::Error(message) => ErrorView { message }.render(frame, main_area),
        LoadState::Idle | LoadState::Loaded => {}
    }
}
