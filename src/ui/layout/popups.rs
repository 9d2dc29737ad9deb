use super::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn popup_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg))
}

fn section<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry<'a>(key: &'a str, text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", key), Style::default().fg(theme.accent)),
        Span::styled(text, Style::default().fg(theme.fg_secondary)),
    ])
}

pub(super) fn draw_help_popup(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(area, 54, 30);
    f.render_widget(Clear, popup_area);

    let block = popup_block(" Help ", theme);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let help_text = vec![
        section("List", theme),
        entry("j/k ↑/↓", "Move cursor", theme),
        entry("Enter →", "View wallpaper", theme),
        entry("/", "Search names and tags", theme),
        entry("Esc", "Clear search, then quit", theme),
        entry("u", "Upload a local image", theme),
        Line::from(""),
        section("Wallpaper", theme),
        entry("d", "Download to Downloads", theme),
        entry("a", "Apply (symbolic)", theme),
        entry("i", "Show name and tags", theme),
        entry("b Esc ←", "Back to list", theme),
        Line::from(""),
        section("Commands (:)", theme),
        entry(":search <q>", "Set search text", theme),
        entry(":clear", "Clear search", theme),
        entry(":view [name]", "Open wallpaper", theme),
        entry(":go <n>", "Jump to entry n", theme),
        entry(":upload <path>", "Save image to uploads", theme),
        entry(":d :a :i :b", "Detail actions", theme),
        entry(":q", "Quit", theme),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center),
    ];

    f.render_widget(Paragraph::new(help_text), inner);
}

pub(super) fn draw_info_popup(f: &mut Frame, text: &str, area: Rect, theme: &Theme) {
    let height = text.lines().count() as u16 + 4;
    let popup_area = centered_rect(area, 60, height);
    f.render_widget(Clear, popup_area);

    let block = popup_block(" Info ", theme);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let mut lines: Vec<Line> = text
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.fg_primary))))
        .collect();
    lines.push(Line::from(Span::styled(
        "any key to close",
        Style::default().fg(theme.fg_muted),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
