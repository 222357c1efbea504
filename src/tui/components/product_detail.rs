//! # Product Detail Component
//!
//! Shown when a product sits on top of the navigation stack. Images are not
//! fetched; the URL is displayed instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::catalog::Product;
use crate::tui::component::Component;

pub struct ProductDetail<'a> {
    pub product: &'a Product,
    /// How many detail screens are stacked, this one included
    pub depth: usize,
}

impl Component for ProductDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(Color::DarkGray);

        let lines = vec![
            Line::from(Span::styled(
                self.product.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.product.price.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Image  ", label),
                Span::raw(self.product.image_url.clone()),
            ]),
            Line::from(vec![
                Span::styled("ID     ", label),
                Span::raw(self.product.source_id.clone()),
            ]),
        ];

        let help = if self.depth > 1 {
            " Esc Back  Home List "
        } else {
            " Esc Back "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Product Details ")
            .title_bottom(Line::from(help).centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
