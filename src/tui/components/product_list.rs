//! # Product List Component
//!
//! The root screen: one row per product with its price right-aligned.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the `ListState` lives in `TuiState` so the scroll offset survives frames
//! - `ProductList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::catalog::Product;
use crate::tui::component::Component;

pub struct ProductList<'a> {
    pub state: &'a mut ListState,
    pub products: &'a [Product],
    pub selected: usize,
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" Enter Details  r Refresh  q Quit ").centered())
            .padding(Padding::horizontal(1));

        if self.products.is_empty() {
            let empty = Paragraph::new("No products to show.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let selected = self.selected.min(self.products.len() - 1);
        self.state.select(Some(selected));

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let price_width = product.price.chars().count();
                let name_width = inner_width.saturating_sub(price_width + 2);
                let name = truncate_str(&product.name, name_width);

                let style = if i == selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<width$}", name, width = name_width), style),
                    Span::styled("  ", style),
                    Span::styled(product.price.clone(), style.fg(Color::Yellow)),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), area, self.state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}
