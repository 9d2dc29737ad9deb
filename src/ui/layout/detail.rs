use super::browser::draw_image;
use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(super) fn draw_detail(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme, popup_active: bool) {
    let Some(record) = app.selected_wallpaper().cloned() else {
        return;
    };

    let panel = Block::default()
        .title(format!(" {} ", record.name))
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight));
    let inner = panel.inner(area);
    f.render_widget(panel, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(inner);

    draw_image(f, app, chunks[0], theme, popup_active);

    let downloaded = app.is_downloaded(&record);
    let applied = app.session.is_applied(&record.name);
    let flag = |on: bool, yes: &'static str, no: &'static str| {
        if on {
            Span::styled(yes, Style::default().fg(theme.success))
        } else {
            Span::styled(no, Style::default().fg(theme.fg_muted))
        }
    };

    let tags = record
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{}", tag), Style::default().fg(theme.accent)),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    let lines = vec![
        Line::from(
            std::iter::once(Span::styled("Tags: ", Style::default().fg(theme.fg_secondary)))
                .chain(tags)
                .collect::<Vec<_>>(),
        ),
        Line::from(vec![
            flag(downloaded, "↓ Downloaded", "↓ Not downloaded"),
            Span::styled("  │  ", Style::default().fg(theme.fg_muted)),
            flag(applied, "✓ Applied", "✓ Not applied"),
        ]),
        Line::from(Span::styled(
            truncate_url(&record.url, inner.width as usize),
            Style::default().fg(theme.fg_muted),
        )),
    ];

    let info = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(info, chunks[1]);
}

fn truncate_url(url: &str, width: usize) -> String {
    crate::utils::truncate(url, width.max(8))
}
