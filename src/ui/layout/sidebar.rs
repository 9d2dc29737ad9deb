use crate::app::App;
use crate::ui::theme::Theme;
use crate::upload::UPLOAD_EXTENSIONS;
use crate::utils::truncate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ABOUT_AUTHOR: &str = "Made by Yaksh";

pub(super) fn draw_sidebar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    draw_upload(f, app, chunks[0], theme);
    draw_about(f, chunks[1], theme);
}

fn draw_upload(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Upload Your Wallpaper ")
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let kb = &app.config.keybindings;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(kb.upload.clone(), Style::default().fg(theme.accent)),
            Span::styled(" or :upload <path>", Style::default().fg(theme.fg_secondary)),
        ]),
        Line::from(Span::styled(
            format!("Types: {}", UPLOAD_EXTENSIONS.join(", ")),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(Span::styled(
            truncate(&format!("Into: {}", app.store().uploads_dir().display()), width),
            Style::default().fg(theme.fg_muted),
        )),
    ];

    if let Some(path) = &app.ui.last_upload {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Last upload",
            Style::default().fg(theme.fg_secondary),
        )));
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            truncate(&name, width),
            Style::default().fg(theme.success),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_about(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" About ")
        .title_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(ABOUT_AUTHOR, Style::default().fg(theme.fg_primary))),
        Line::from(vec![
            Span::styled("Version ", Style::default().fg(theme.fg_muted)),
            Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(theme.accent)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
