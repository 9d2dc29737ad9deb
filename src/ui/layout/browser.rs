use super::{center_vertically, fit_aspect};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;

pub(super) fn draw_list(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Wallpapers ")
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.browse.visible.is_empty() {
        let empty = Paragraph::new("No matching wallpapers")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, center_vertically(inner, 1));
        return;
    }

    let name_width = inner.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .browse
        .visible
        .iter()
        .filter_map(|&i| app.catalog.get(i))
        .map(|record| {
            let mut spans = vec![Span::styled(
                truncate(&record.name, name_width),
                Style::default().fg(theme.fg_primary),
            )];
            if app.is_downloaded(record) {
                spans.push(Span::styled(" ↓", Style::default().fg(theme.success)));
            }
            if app.session.is_applied(&record.name) {
                spans.push(Span::styled(" ✓", Style::default().fg(theme.accent_alt)));
            }
            ListItem::new(vec![
                Line::from(spans),
                Line::from(Span::styled(
                    truncate(&record.tag_line(), name_width),
                    Style::default().fg(theme.fg_muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.browse.cursor));
    f.render_stateful_widget(list, inner, &mut state);
}

pub(super) fn draw_preview(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme, popup_active: bool) {
    let block = Block::default()
        .title(" Preview ")
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    draw_image(f, app, inner, theme, popup_active);
}

/// Render the current preview image, or a text fallback, centered in `area`.
pub(super) fn draw_image(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme, popup_active: bool) {
    if popup_active {
        let text = Paragraph::new("(popup active)")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center);
        f.render_widget(text, center_vertically(area, 1));
        return;
    }

    let Some(preview) = app.preview.current.as_mut() else {
        let text = Paragraph::new("No preview")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center);
        f.render_widget(text, center_vertically(area, 1));
        return;
    };

    if let Some(error) = &preview.error {
        let text = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.error))
            .alignment(Alignment::Center);
        f.render_widget(text, center_vertically(area, 1));
        return;
    }

    let (aspect_w, aspect_h) = preview.size.unwrap_or((16, 9));
    let (img_w, img_h) = fit_aspect(area.width, area.height.saturating_sub(1), aspect_w, aspect_h);
    if img_w == 0 || img_h == 0 {
        return;
    }
    let img_x = area.x + (area.width.saturating_sub(img_w)) / 2;
    let img_y = area.y + (area.height.saturating_sub(img_h + 1)) / 2;
    let img_area = Rect::new(img_x, img_y, img_w, img_h);

    match preview.protocol.as_mut() {
        Some(protocol) => {
            // Kitty keeps old placements around until the cells are cleared.
            f.render_widget(Clear, img_area);
            f.render_stateful_widget(StatefulImage::new(None), img_area, protocol);
        }
        None => {
            let label = Paragraph::new(preview.name.as_str())
                .style(Style::default().fg(theme.fg_secondary))
                .alignment(Alignment::Center);
            f.render_widget(label, center_vertically(img_area, 1));
        }
    }

    if let Some((w, h)) = preview.size {
        if img_area.bottom() < area.bottom() {
            let caption_area = Rect::new(area.x, img_area.bottom(), area.width, 1);
            let caption = Paragraph::new(format!("{} · {}x{}", preview.name, w, h))
                .style(Style::default().fg(theme.fg_muted))
                .alignment(Alignment::Center);
            f.render_widget(caption, caption_area);
        }
    }
}
