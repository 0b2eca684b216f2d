//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal display and
//! the layout helper that splits the screen into header, listing and footer.
//!
//! This module stays “pure rendering”: it reads the listing view + config and
//! produces widgets, without touching navigation state.

use crate::app::ListingView;
use crate::config::Config;
use crate::ui::panes::{self, PaneContext, PaneStyles};
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
};

/// Rows used by the two footer lines.
pub const FOOTER_HEIGHT: u16 = 2;

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Option<Rect>,
    pub listing: Rect,
    pub footer: Rect,
}

/// Renders the listing view: path header, entry list and footer.
pub fn render(frame: &mut Frame, view: &ListingView, config: &Config, list_state: &mut ListState) {
    let display_cfg = config.display();
    let theme_cfg = config.theme();
    let layout = layout_chunks(frame.area(), config);

    if let Some(header) = layout.header {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(shorten_home_path(view.dir), theme_cfg.path_style()),
                Span::raw(" "),
            ])),
            header,
        );
    }

    let mut block = Block::default();
    if display_cfg.borders() {
        block = block
            .borders(Borders::ALL)
            .border_type(display_cfg.border_shape().as_border_type())
            .border_style(theme_cfg.accent_style());
    }

    let highlight_symbol = if display_cfg.selection_marker() {
        theme_cfg.selection_icon()
    } else {
        ""
    };

    panes::draw_listing(
        frame,
        PaneContext {
            area: layout.listing,
            block,
            styles: PaneStyles {
                item: theme_cfg.entry_style(),
                dir: theme_cfg.directory_style(),
                symlink: theme_cfg.symlink_style(),
                broken: theme_cfg.broken_style(),
                selection: theme_cfg.selection_style(),
            },
            highlight_symbol,
            scroll_padding: display_cfg.scroll_padding(),
        },
        view.entries,
        list_state,
    );

    frame.render_widget(
        Paragraph::new(status_lines(view)).style(theme_cfg.status_line_style()),
        layout.footer,
    );
}

/// Splits `area` into the optional header line, the listing and the footer.
pub fn layout_chunks(area: Rect, config: &Config) -> FrameLayout {
    let show_header = config.display().header();
    let mut constraints = Vec::with_capacity(3);
    if show_header {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if show_header {
        FrameLayout {
            header: Some(chunks[0]),
            listing: chunks[1],
            footer: chunks[2],
        }
    } else {
        FrameLayout {
            header: None,
            listing: chunks[0],
            footer: chunks[1],
        }
    }
}

/// The two footer lines: the absolute directory and the key/sort summary.
pub fn status_lines(view: &ListingView) -> Vec<Line<'static>> {
    let count = view.entries.len();
    vec![
        Line::from(format!("Current dir: {}", view.dir.display())),
        Line::from(format!(
            "Press q to quit  |  sort: {}  |  {} {}",
            view.sort_mode.as_str(),
            count,
            if count == 1 { "entry" } else { "entries" }
        )),
    ]
}
