//! Selector menu panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use coinpane_core::selector::{MenuView, SelectorMenu};

use crate::styles::ColorTheme;

/// Render a menu's visible items. `input` is the open text box, if any.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &SelectorMenu,
    cursor: usize,
    focused: bool,
    input: Option<&str>,
) {
    let theme = ColorTheme::default();
    let selected = menu.selected().map(|item| item.id());

    let items: Vec<ListItem> = menu
        .visible()
        .into_iter()
        .map(|item| {
            let marker = if Some(item.id()) == selected { "> " } else { "  " };
            let flag = if item.is_flagged() {
                Span::styled(" *", theme.flag_style())
            } else {
                Span::raw("")
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.name(), theme.text_style()),
                flag,
            ]))
        })
        .collect();

    let view = match menu.view() {
        MenuView::All => "all",
        MenuView::Flagged => "flagged",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({view}) ", menu.title()))
        .border_style(theme.border_style(focused));

    let list_area = if let Some(text) = input {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);
        let input_box = Paragraph::new(Line::from(vec![
            Span::styled(text, theme.text_style()),
            Span::styled("_", theme.key_style()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add ")
                .border_style(theme.border_style(true)),
        );
        frame.render_widget(input_box, chunks[1]);
        chunks[0]
    } else {
        area
    };

    let is_empty = items.is_empty();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.cursor_style(focused));
    let mut state = ListState::default();
    if !is_empty {
        state.select(Some(cursor));
    }
    frame.render_stateful_widget(list, list_area, &mut state);
}
