//! Listing pane drawing for ffm.
//!
//! Builds one row per entry (name column plus the size/time label), colours the
//! row by entry kind and hands the cursor position to ratatui's [List].
//!
//! Used internally by ui::render

use crate::core::{FileEntry, fit_to_width};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Columns between the name and the label.
const COLUMN_GAP: &str = "  ";

/// Styles used for rendering listing rows
pub struct PaneStyles {
    pub item: Style,
    pub dir: Style,
    pub symlink: Style,
    pub broken: Style,
    pub selection: Style,
}

impl PaneStyles {
    /// Style for an entry, before the selection highlight is applied.
    pub fn entry_style(&self, entry: &FileEntry) -> Style {
        if entry.is_broken_sym() {
            self.broken
        } else if entry.is_symlink() {
            self.symlink
        } else if entry.is_dir() {
            self.dir
        } else {
            self.item
        }
    }

    /// Selection bar layered over `base`; Reset colours keep the entry colour.
    pub fn selected(&self, base: Style) -> Style {
        let mut style = base.add_modifier(self.selection.add_modifier);
        if let Some(bg) = self.selection.bg
            && bg != Color::Reset
        {
            style = style.bg(bg);
        }
        if let Some(fg) = self.selection.fg
            && fg != Color::Reset
        {
            style = style.fg(fg);
        }
        style
    }
}

/// Context data for pane rendering functions
pub struct PaneContext<'a> {
    pub area: Rect,
    pub block: Block<'a>,
    pub styles: PaneStyles,
    pub highlight_symbol: &'a str,
    pub scroll_padding: usize,
}

/// Draws the entry list.
///
/// `state` carries the cursor; an empty listing draws `[Empty]` instead.
pub fn draw_listing(
    frame: &mut Frame,
    context: PaneContext,
    entries: &[FileEntry],
    state: &mut ListState,
) {
    if entries.is_empty() {
        let line = Line::from(Span::styled("[Empty]", context.styles.item));
        frame.render_widget(Paragraph::new(line).block(context.block), context.area);
        return;
    }

    let inner_width = context.block.inner(context.area).width as usize;
    let row_width = inner_width.saturating_sub(context.highlight_symbol.width());
    let name_width = name_column_width(entries, row_width);
    let selected_idx = state.selected();

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let base = context.styles.entry_style(entry);
            let style = if Some(idx) == selected_idx {
                context.styles.selected(base)
            } else {
                base
            };
            ListItem::new(make_entry_row(entry, name_width)).style(style)
        })
        .collect();

    frame.render_stateful_widget(
        List::new(items)
            .block(context.block)
            .highlight_style(Style::default())
            .highlight_symbol(context.highlight_symbol)
            .scroll_padding(context.scroll_padding),
        context.area,
        state,
    );
}

/// Width of the name column: the widest name, at most half of `row_width`.
pub fn name_column_width(entries: &[FileEntry], row_width: usize) -> usize {
    let widest = entries
        .iter()
        .map(|e| e.name_str().width())
        .max()
        .unwrap_or(0);
    widest.min(row_width / 2)
}

/// One listing row: the padded or truncated name followed by the label.
pub fn make_entry_row(entry: &FileEntry, name_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(fit_to_width(&entry.name_str(), name_width)),
        Span::raw(COLUMN_GAP),
        Span::raw(entry.label().to_string()),
    ])
}
