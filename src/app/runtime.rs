use super::{App, Config};
use crate::controller::Action;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

pub fn run_tui(
    config: Config,
    downloads_dir: Option<PathBuf>,
    query: Option<String>,
) -> Result<()> {
    let mut app = App::new(config, downloads_dir);
    match query {
        Some(query) => app.set_query(&query),
        None => app.refresh_preview(),
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Fetches run inline, so the loop blocks until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Resize(_, _) => {
                app.handle_resize();
                terminal.clear()?;
            }
            _ => {}
        }

        if app.ui.should_quit {
            return Ok(());
        }
    }
}

/// Route one key press to the active popup, input mode or view.
pub(super) fn handle_key(app: &mut App, code: KeyCode) {
    // Help popup blocks other input.
    if app.ui.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
            app.ui.show_help = false;
        }
        return;
    }

    // Any key dismisses the info popup.
    if app.ui.info_popup.is_some() {
        app.ui.info_popup = None;
        return;
    }

    if app.ui.command_mode {
        match code {
            KeyCode::Esc => app.exit_command_mode(),
            KeyCode::Enter => app.execute_command(),
            KeyCode::Backspace => app.command_backspace(),
            KeyCode::Char(c) => app.command_input(c),
            _ => {}
        }
        return;
    }

    if app.ui.search_mode {
        match code {
            KeyCode::Esc | KeyCode::Enter => app.exit_search_mode(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Down => app.next_entry(),
            KeyCode::Up => app.prev_entry(),
            KeyCode::Char(c) => app.search_input(c),
            _ => {}
        }
        return;
    }

    if app.session.is_list_view() {
        handle_list_key(app, code);
    } else {
        handle_detail_key(app, code);
    }
}

fn handle_list_key(app: &mut App, code: KeyCode) {
    let kb = &app.config.keybindings;

    if kb.matches(code, &kb.quit) {
        app.ui.should_quit = true;
    } else if code == KeyCode::Esc {
        // First Esc drops the search, second one quits.
        if app.browse.query.is_empty() {
            app.ui.should_quit = true;
        } else {
            app.clear_search();
        }
    } else if kb.matches(code, &kb.view) || code == KeyCode::Right {
        app.open_highlighted();
    } else if kb.matches(code, &kb.search) {
        app.enter_search_mode();
    } else if kb.matches(code, &kb.upload) {
        app.enter_command_mode_with("upload ");
    } else {
        match code {
            KeyCode::Char('j') | KeyCode::Down => app.next_entry(),
            KeyCode::Char('k') | KeyCode::Up => app.prev_entry(),
            KeyCode::Char(':') => app.enter_command_mode(),
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        }
    }
}

fn handle_detail_key(app: &mut App, code: KeyCode) {
    let kb = &app.config.keybindings;

    if kb.matches(code, &kb.quit) {
        app.ui.should_quit = true;
    } else if kb.matches(code, &kb.back)
        || matches!(code, KeyCode::Esc | KeyCode::Left | KeyCode::Backspace)
    {
        app.dispatch(Action::Back);
    } else if kb.matches(code, &kb.download) {
        app.dispatch(Action::Download);
    } else if kb.matches(code, &kb.apply) {
        app.dispatch(Action::Apply);
    } else if kb.matches(code, &kb.info) {
        app.dispatch(Action::Info);
    } else {
        match code {
            KeyCode::Char(':') => app.enter_command_mode(),
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        }
    }
}
