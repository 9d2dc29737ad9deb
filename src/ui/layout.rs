use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

mod browser;
mod detail;
mod header;
mod popups;
mod sidebar;

use browser::{draw_list, draw_preview};
use detail::draw_detail;
use header::{draw_footer, draw_header, draw_status};
use popups::{draw_help_popup, draw_info_popup};
use sidebar::draw_sidebar;

const SIDEBAR_WIDTH: u16 = 30;

pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.ui.theme.clone();
    let area = f.area();

    // ratatui-image writes straight to the terminal, so images would cover popups
    let popup_active = app.ui.show_help || app.ui.info_popup.is_some();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let has_status = app.ui.status.is_some();
    let mut constraints = vec![Constraint::Length(2)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(8));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut chunk_idx = 0;

    draw_header(f, app, chunks[chunk_idx], &theme);
    chunk_idx += 1;

    if has_status {
        draw_status(f, app, chunks[chunk_idx], &theme);
        chunk_idx += 1;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[chunk_idx]);
    chunk_idx += 1;

    draw_sidebar(f, app, body[0], &theme);

    if app.session.is_list_view() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body[1]);
        draw_list(f, app, split[0], &theme);
        draw_preview(f, app, split[1], &theme, popup_active);
    } else {
        draw_detail(f, app, body[1], &theme, popup_active);
    }

    draw_footer(f, app, chunks[chunk_idx], &theme);

    if app.ui.show_help {
        draw_help_popup(f, area, &theme);
    } else if let Some(text) = &app.ui.info_popup {
        draw_info_popup(f, text, area, &theme);
    }
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x, y, area.width, height.min(area.height))
}

/// Centered rectangle of at most `width` x `height` inside `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Largest `w x h` cell box inside `max_w x max_h` with the given aspect.
///
/// Terminal cells are roughly twice as tall as wide, so the height is halved.
fn fit_aspect(max_w: u16, max_h: u16, aspect_w: u32, aspect_h: u32) -> (u16, u16) {
    if max_w == 0 || max_h == 0 || aspect_w == 0 || aspect_h == 0 {
        return (0, 0);
    }

    let (max_w64, max_h64) = (u64::from(max_w), u64::from(max_h));
    let (aspect_w, aspect_h) = (u64::from(aspect_w), u64::from(aspect_h));

    let width_limited_h = max_w64 * aspect_h / aspect_w / 2;
    if width_limited_h <= max_h64 {
        (max_w, to_cells(width_limited_h).max(1))
    } else {
        let width = to_cells(max_h64 * 2 * aspect_w / aspect_h);
        (width.clamp(1, max_w), max_h)
    }
}

fn to_cells(n: u64) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
