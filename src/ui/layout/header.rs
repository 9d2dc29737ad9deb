use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use ratatui_image::picker::ProtocolType;

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let total = app.browse.visible.len();
    let count_info = if total == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", app.browse.cursor + 1, total)
    };

    let view_info = match app.selected_wallpaper() {
        Some(record) => record.name.clone(),
        None => "Browse".to_string(),
    };

    let mut spans = vec![
        Span::styled(
            " Wallpaper Browser ",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.fg_muted)),
        Span::styled(view_info, Style::default().fg(theme.fg_secondary)),
        Span::styled(" │ ", Style::default().fg(theme.fg_muted)),
        Span::styled(count_info, Style::default().fg(theme.accent)),
        Span::styled(" │ ", Style::default().fg(theme.fg_muted)),
        Span::styled(
            format!("[img:{}]", protocol_label(app)),
            Style::default().fg(theme.fg_secondary),
        ),
    ];

    if !app.browse.query.is_empty() || app.ui.search_mode {
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(
            format!("[/{}]", app.browse.query),
            Style::default().fg(theme.highlight),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub(super) fn draw_status(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if let Some(status) = &app.ui.status {
        let color = theme.level_color(status.level);
        // Multi-line messages go to the info popup; keep the first line here.
        let text = status.text.lines().next().unwrap_or_default();
        let line = Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(text, Style::default().fg(color)),
        ]);
        let paragraph = Paragraph::new(line).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

pub(super) fn draw_footer(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if app.ui.command_mode {
        let cmd_line = Line::from(vec![
            Span::styled(
                ":",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(&app.ui.command_buffer, Style::default().fg(theme.fg_primary)),
            Span::styled("█", Style::default().fg(theme.accent)),
        ]);
        f.render_widget(Paragraph::new(cmd_line), area);
        return;
    }

    if app.ui.search_mode {
        let search_line = Line::from(vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(&app.browse.query, Style::default().fg(theme.fg_primary)),
            Span::styled("█", Style::default().fg(theme.highlight)),
            Span::styled("  Enter/Esc done", Style::default().fg(theme.fg_muted)),
        ]);
        f.render_widget(Paragraph::new(search_line), area);
        return;
    }

    let kb = &app.config.keybindings;
    let keys: Vec<(String, &str)> = if app.session.is_list_view() {
        vec![
            ("j/k".to_string(), "move"),
            (kb.view.clone(), "view"),
            (kb.search.clone(), "search"),
            (kb.upload.clone(), "upload"),
            (":".to_string(), "cmd"),
            ("?".to_string(), "help"),
            (kb.quit.clone(), "quit"),
        ]
    } else {
        vec![
            (kb.download.clone(), "download"),
            (kb.apply.clone(), "apply"),
            (kb.info.clone(), "info"),
            (format!("{}/Esc", kb.back), "back"),
            (":".to_string(), "cmd"),
            ("?".to_string(), "help"),
        ]
    };

    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, label)) in keys.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.fg_muted)));
        }
        spans.push(Span::styled(key, Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(theme.fg_muted),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub(super) fn protocol_label(app: &App) -> &'static str {
    app.preview
        .picker
        .as_ref()
        .map(|p| match p.protocol_type {
            ProtocolType::Halfblocks => "HB",
            ProtocolType::Sixel => "SIX",
            ProtocolType::Kitty => "KTY",
            ProtocolType::Iterm2 => "IT2",
        })
        .unwrap_or("N/A")
}
