//! # TitleBar Component
//!
//! Top status bar: catalog title, how many products are shown versus how
//! many the endpoint claims, and when the list was last refreshed.
//!
//! Purely presentational; everything arrives as props. `product_count` is
//! printed as received, next to the real list length.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    /// Catalog title; empty before the first successful load
    pub title: &'a str,
    pub shown: usize,
    pub product_count: i64,
    pub loaded_at: Option<DateTime<Local>>,
    /// Title of the detail screen on top of the stack, if any
    pub detail: Option<&'a str>,
}

impl TitleBar<'_> {
    fn text(&self) -> String {
        let mut text = if self.title.is_empty() {
            "Storefront".to_string()
        } else {
            self.title.to_string()
        };

        if let Some(detail) = self.detail {
            text.push_str(" › ");
            text.push_str(detail);
        }

        if let Some(loaded_at) = self.loaded_at {
            text.push_str(&format!(
                " | {} of {} products | Updated {}",
                self.shown,
                self.product_count,
                loaded_at.format("%H:%M:%S")
            ));
        }

        text
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
