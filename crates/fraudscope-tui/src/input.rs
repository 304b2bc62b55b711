//! Key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fraudscope_dashboard::{Dashboard, PageSize, Section, View};
use std::path::PathBuf;

/// What typed characters go to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Beneficiary search box
    Search,
    /// Document path prompt
    FilePath,
}

/// Terminal-only state that is not part of any panel
#[derive(Debug, Default)]
pub struct UiState {
    pub mode: InputMode,
    /// Blocking alert; the next key press dismisses it
    pub alert: Option<String>,
    /// Redraw counter driving spinners
    pub tick: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub async fn handle_key(dashboard: &mut Dashboard, ui: &mut UiState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }
    if ui.alert.take().is_some() {
        return KeyOutcome::Continue;
    }
    match ui.mode {
        InputMode::Search => handle_search(dashboard, ui, key),
        InputMode::FilePath => handle_file_path(dashboard, ui, key).await,
        InputMode::Normal => return handle_normal(dashboard, ui, key),
    }
    KeyOutcome::Continue
}

fn handle_search(dashboard: &mut Dashboard, ui: &mut UiState, key: KeyEvent) {
    let Some(home) = dashboard.home_mut() else {
        ui.mode = InputMode::Normal;
        return;
    };
    let scanner = &mut home.beneficiaries;
    match key.code {
        KeyCode::Esc => {
            scanner.clear_query();
            ui.mode = InputMode::Normal;
        }
        KeyCode::Enter => ui.mode = InputMode::Normal,
        KeyCode::Backspace => scanner.pop_char(),
        KeyCode::Char(c) => scanner.push_char(c),
        _ => {}
    }
}

async fn handle_file_path(dashboard: &mut Dashboard, ui: &mut UiState, key: KeyEvent) {
    let Some(home) = dashboard.home_mut() else {
        ui.mode = InputMode::Normal;
        return;
    };
    let documents = &mut home.documents;
    match key.code {
        KeyCode::Esc => {
            documents.path_input.clear();
            ui.mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            documents.path_input.pop();
        }
        KeyCode::Char(c) => documents.path_input.push(c),
        KeyCode::Enter => {
            ui.mode = InputMode::Normal;
            let input = documents.path_input.trim().to_string();
            if input.is_empty() {
                return;
            }
            let path = PathBuf::from(&input);
            match documents.select_path(&path).await {
                Ok(()) => dashboard.notify(format!("analyzing {}", input)),
                Err(err) => ui.alert = Some(err.to_string()),
            }
        }
        _ => {}
    }
}

fn handle_normal(dashboard: &mut Dashboard, ui: &mut UiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('m') | KeyCode::Char('M') => dashboard.toggle_view(),
        _ => match dashboard.view() {
            View::Home => handle_home(dashboard, ui, key),
            View::Models => {
                if let (KeyCode::Char('o'), Some(models)) = (key.code, dashboard.models_mut()) {
                    models.toggle_overlay();
                }
            }
        },
    }
    KeyOutcome::Continue
}

fn handle_home(dashboard: &mut Dashboard, ui: &mut UiState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Right => return dashboard.next_section(),
        KeyCode::BackTab | KeyCode::Left => return dashboard.prev_section(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::ALL.get(index) {
                dashboard.scroll_to(*section);
            }
            return;
        }
        _ => {}
    }

    let active = dashboard.active();
    let mut notice = None;
    let Some(home) = dashboard.home_mut() else {
        return;
    };
    match (active, key.code) {
        (Section::Beneficiaries, KeyCode::Char('/')) => ui.mode = InputMode::Search,
        (Section::Providers, KeyCode::Up | KeyCode::Char('k')) => home.providers.select_prev(),
        (Section::Providers, KeyCode::Down | KeyCode::Char('j')) => home.providers.select_next(),
        (Section::Providers, KeyCode::Char('l')) => home.providers.load_more(),
        (Section::Providers, KeyCode::Char('p')) => {
            let current = home.providers.page_size();
            let index = PageSize::OPTIONS
                .iter()
                .position(|size| *size == current)
                .unwrap_or(0);
            let next = PageSize::OPTIONS[(index + 1) % PageSize::OPTIONS.len()];
            home.providers.set_page_size(next);
        }
        (Section::Providers, KeyCode::Char('d') | KeyCode::Enter) => {
            notice = home
                .providers
                .download_selected()
                .map(|id| format!("generating report for {}", id));
        }
        (Section::Documents, KeyCode::Char('o') | KeyCode::Enter) => {
            // the prompt is drawn on the idle screen only
            if home.documents.is_analyzing() {
                return;
            }
            home.documents.reset();
            ui.mode = InputMode::FilePath;
        }
        (Section::Documents, KeyCode::Char('x')) => home.documents.reset(),
        _ => {}
    }
    if let Some(notice) = notice {
        dashboard.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudscope_client::FraudScopeClient;
    use fraudscope_dashboard::{DashboardOptions, DocumentState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn offline_dashboard() -> Dashboard {
        // nothing listens on the discard port; panels fail on their own
        let client = FraudScopeClient::connect("http://127.0.0.1:9").unwrap();
        Dashboard::new(client, DashboardOptions::default())
    }

    async fn type_str(dashboard: &mut Dashboard, ui: &mut UiState, text: &str) {
        for c in text.chars() {
            handle_key(dashboard, ui, key(KeyCode::Char(c))).await;
        }
    }

    #[tokio::test]
    async fn test_search_mode_captures_q() {
        let mut dashboard = offline_dashboard();
        let mut ui = UiState::default();
        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('4'))).await;
        assert_eq!(dashboard.active(), Section::Beneficiaries);

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('/'))).await;
        assert_eq!(ui.mode, InputMode::Search);
        type_str(&mut dashboard, &mut ui, "qbihar").await;
        assert_eq!(dashboard.home().unwrap().beneficiaries.query(), "qbihar");

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Enter)).await;
        assert_eq!(ui.mode, InputMode::Normal);
        let outcome = handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('q'))).await;
        assert_eq!(outcome, KeyOutcome::Quit);
    }

    #[tokio::test]
    async fn test_rejected_document_raises_alert() {
        let mut dashboard = offline_dashboard();
        let mut ui = UiState::default();
        dashboard.scroll_to(Section::Documents);

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('o'))).await;
        assert_eq!(ui.mode, InputMode::FilePath);
        type_str(&mut dashboard, &mut ui, "holiday.gif").await;
        handle_key(&mut dashboard, &mut ui, key(KeyCode::Enter)).await;

        let alert = ui.alert.clone().unwrap();
        assert!(alert.contains("image/gif"));
        assert_eq!(
            dashboard.home().unwrap().documents.state(),
            &DocumentState::Idle
        );

        // the alert swallows the next key
        let outcome = handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('q'))).await;
        assert_eq!(outcome, KeyOutcome::Continue);
        assert!(ui.alert.is_none());
    }

    #[tokio::test]
    async fn test_view_toggle_and_page_cycle() {
        let mut dashboard = offline_dashboard();
        let mut ui = UiState::default();

        dashboard.scroll_to(Section::Providers);
        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('p'))).await;
        assert_eq!(
            dashboard.home().unwrap().providers.page_size(),
            PageSize::TwentyFive
        );

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('m'))).await;
        assert_eq!(dashboard.view(), View::Models);
        handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('o'))).await;
        assert!(!dashboard.models().unwrap().show_overlay);
    }

    fn screen(dashboard: &Dashboard, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| crate::render::draw_ui(frame, dashboard, ui))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn test_prompt_after_failed_analysis_is_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claim.png");
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let mut dashboard = offline_dashboard();
        let mut ui = UiState::default();
        dashboard.scroll_to(Section::Documents);
        {
            let documents = &mut dashboard.home_mut().unwrap().documents;
            documents.select_path(&path).await.unwrap();
            let state = documents.settle().await;
            assert!(matches!(state, DocumentState::Failed { .. }));
        }

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Enter)).await;
        assert_eq!(ui.mode, InputMode::FilePath);
        assert_eq!(
            dashboard.home().unwrap().documents.state(),
            &DocumentState::Idle
        );

        let outcome = handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('q'))).await;
        assert_eq!(outcome, KeyOutcome::Continue);
        assert_eq!(dashboard.home().unwrap().documents.path_input, "q");
        assert!(screen(&dashboard, &ui).contains("Path: q_"));

        handle_key(&mut dashboard, &mut ui, key(KeyCode::Esc)).await;
        assert_eq!(ui.mode, InputMode::Normal);
        let outcome = handle_key(&mut dashboard, &mut ui, key(KeyCode::Char('q'))).await;
        assert_eq!(outcome, KeyOutcome::Quit);
    }
}
