//! Frame layout and per-panel rendering

use crate::input::{InputMode, UiState};
use crate::theme::{
    activity_color, header_style, risk_color, selected_style, threat_color, tone_color, ACCENT,
};
use fraudscope_dashboard::{
    AnalyticsPanel, AnomalyPanel, BeneficiaryScanner, CollisionsPanel, Dashboard,
    DocumentInvestigation, DocumentState, HomePanels, NetworkPanel, OverviewPanel, PanelState,
    ProviderRanking, Section, StatCard, UpcodingPanel, View, ACTIVITY_LOG, AUDIT_REPORTS,
};
use fraudscope_types::{format_count, format_inr, format_inr_compact, format_pct};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Clear, Dataset, Gauge, GraphType, List,
    ListItem, Paragraph, Row, Table, Tabs, Wrap,
};
use ratatui::Frame;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn draw_ui(frame: &mut Frame<'_>, dashboard: &Dashboard, ui: &UiState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, vertical[0], dashboard);
    match dashboard.view() {
        View::Home => {
            render_tabs(frame, vertical[1], dashboard.active());
            if let Some(home) = dashboard.home() {
                render_section(frame, vertical[2], home, dashboard.active(), ui);
            }
        }
        View::Models => {
            let title = Paragraph::new(" Anomaly detection model")
                .style(header_style())
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(title, vertical[1]);
            if let Some(models) = dashboard.models() {
                render_models(frame, vertical[2], models);
            }
        }
    }
    render_footer(frame, vertical[3], dashboard, ui);

    if let Some(alert) = ui.alert.as_deref() {
        render_alert(frame, alert);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " FraudScope ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} | view={} | {}",
            dashboard.client().endpoint(),
            dashboard.view().title(),
            dashboard.status_label()
        )),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Section) {
    let titles: Vec<String> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .highlight_style(Style::default().fg(Color::Black).bg(ACCENT))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

fn render_section(
    frame: &mut Frame<'_>,
    area: Rect,
    home: &HomePanels,
    active: Section,
    ui: &UiState,
) {
    match active {
        Section::Overview => render_overview(frame, area, &home.overview),
        Section::Analytics => render_analytics(frame, area, &home.analytics),
        Section::Network => render_network(frame, area, &home.network),
        Section::Beneficiaries => render_beneficiaries(
            frame,
            area,
            &home.beneficiaries,
            ui.mode == InputMode::Search,
        ),
        Section::Collisions => render_collisions(frame, area, &home.collisions),
        Section::Upcoding => render_upcoding(frame, area, &home.upcoding),
        Section::Providers => render_providers(frame, area, &home.providers, ui.tick),
        Section::Documents => render_documents(
            frame,
            area,
            &home.documents,
            ui.mode == InputMode::FilePath,
        ),
        Section::Reports => render_reports(frame, area),
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard, ui: &UiState) {
    let keys = match (dashboard.view(), ui.mode, dashboard.active()) {
        (_, InputMode::Search, _) => "type to filter | Enter done | Esc clear",
        (_, InputMode::FilePath, _) => "type a path | Enter analyze | Esc cancel",
        (View::Models, ..) => "O toggle explanation | M home | Q quit",
        (View::Home, _, Section::Beneficiaries) => "/ search | Tab next | M models | Q quit",
        (View::Home, _, Section::Providers) => {
            "Up/Down select | D report | L load more | P page size | Q quit"
        }
        (View::Home, _, Section::Documents) => "O choose file | X reset | Tab next | Q quit",
        (View::Home, ..) => "Tab/1-9 section | M models | Q quit",
    };
    let notice = dashboard.last_notice().unwrap_or("");
    let footer = Paragraph::new(format!("{}   {}", keys, notice))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}

fn render_alert(frame: &mut Frame<'_>, message: &str) {
    let area = centered_rect(60, 25, frame.area());
    let alert = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Upload rejected"),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

fn panel_block(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.into(), header_style()))
}

/// Draw the loading, empty or failed placeholder. Returns false when the
/// panel has data and should render itself.
fn render_placeholder<T>(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    state: &PanelState<T>,
) -> bool {
    let (text, color) = match state {
        PanelState::Loaded(_) => return false,
        PanelState::Loading => ("Loading...".to_string(), Color::Gray),
        PanelState::Empty => ("No data available".to_string(), Color::Gray),
        PanelState::Failed(message) => (format!("Failed to load: {}", message), Color::Red),
    };
    let placeholder = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(panel_block(title));
    frame.render_widget(placeholder, area);
    true
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(tone_color(card.tone))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.hint.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let widget =
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(card.label));
        frame.render_widget(widget, *column);
    }
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(Span::styled(*t, header_style())))
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1)
}

pub fn render_overview(frame: &mut Frame<'_>, area: Rect, panel: &OverviewPanel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    let cards_area = Rect {
        height: rows[0].height + rows[1].height,
        ..rows[0]
    };
    if !render_placeholder(frame, cards_area, "Overview", panel.loader.state()) {
        let cards = panel.cards();
        let (first, second) = cards.split_at(cards.len().min(4));
        render_cards(frame, rows[0], first);
        render_cards(frame, rows[1], second);
    }

    let items: Vec<ListItem<'_>> = ACTIVITY_LOG
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>11} ", entry.when),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("● ", Style::default().fg(activity_color(entry.kind))),
                Span::raw(entry.message),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(panel_block("Recent activity")),
        rows[2],
    );
}

pub fn render_analytics(frame: &mut Frame<'_>, area: Rect, panel: &AnalyticsPanel) {
    if render_placeholder(frame, area, "Analytics", panel.loader.state()) {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[1]);

    render_timeline(frame, rows[0], panel);

    let regions: Vec<(&str, u64)> = panel
        .regions()
        .iter()
        .map(|r| (r.region.as_str(), r.fraudulent))
        .collect();
    let barchart = BarChart::default()
        .block(panel_block("Fraudulent claims by region"))
        .data(&regions)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Red))
        .value_style(Style::default().fg(Color::White).bg(Color::Red));
    frame.render_widget(barchart, bottom[0]);

    let states = panel.states_by_threat();
    let table_rows: Vec<Row<'_>> = states
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.state.clone()),
                Cell::from(Span::styled(
                    row.threat_level.label(),
                    Style::default()
                        .fg(threat_color(row.threat_level))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(format_pct(row.fraud_rate_pct)),
                Cell::from(format_count(row.total_claims)),
                Cell::from(format_inr_compact(row.estimated_loss_inr)),
                Cell::from(row.primary_fraud_type.clone()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Min(10),
    ];
    let table = Table::new(table_rows, widths)
        .header(header_row(&["State", "Threat", "Fraud", "Claims", "Loss", "Primary type"]))
        .block(panel_block("State intelligence"))
        .column_spacing(1);
    frame.render_widget(table, bottom[1]);
}

fn render_timeline(frame: &mut Frame<'_>, area: Rect, panel: &AnalyticsPanel) {
    let timeline = panel.timeline();
    let processed: Vec<(f64, f64)> = timeline
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.processed as f64))
        .collect();
    let flagged: Vec<(f64, f64)> = timeline
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.flagged as f64))
        .collect();
    let peak = panel
        .loader
        .data()
        .map(|d| d.series.peak_processed())
        .unwrap_or(0)
        .max(1) as f64;
    let x_max = timeline.len().saturating_sub(1).max(1) as f64;
    let first = timeline.first().map(|p| p.month.clone()).unwrap_or_default();
    let last = timeline.last().map(|p| p.month.clone()).unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name("Processed")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&processed),
        Dataset::default()
            .name("Flagged")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&flagged),
    ];
    let chart = Chart::new(datasets)
        .block(panel_block("Claims timeline"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(vec![Span::raw(first), Span::raw(last)])
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format_count((peak * 1.1) as u64)),
                ])
                .bounds([0.0, peak * 1.1]),
        );
    frame.render_widget(chart, area);
}

pub fn render_network(frame: &mut Frame<'_>, area: Rect, panel: &NetworkPanel) {
    if render_placeholder(frame, area, "Network", panel.loader.state()) {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    let nodes: Vec<ListItem<'_>> = panel
        .top_nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. {:<12} ", i + 1, node.id)),
                Span::styled(
                    format!("{:>5.1}", node.risk_score),
                    Style::default().fg(risk_color(node.risk_score)),
                ),
            ]))
        })
        .collect();
    let title = format!(
        "Riskiest hospitals ({} high centrality)",
        panel.high_centrality_count()
    );
    frame.render_widget(List::new(nodes).block(panel_block(title)), columns[0]);

    let edges: Vec<Row<'_>> = panel
        .top_edges()
        .iter()
        .map(|edge| {
            Row::new(vec![
                Cell::from(edge.source.clone()),
                Cell::from(edge.target.clone()),
                Cell::from(format_count(edge.shared_patients)),
                Cell::from(Span::styled(
                    format!("{:.1}", edge.suspicion_score),
                    Style::default().fg(risk_color(edge.suspicion_score)),
                )),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Min(6),
    ];
    let table = Table::new(edges, widths)
        .header(header_row(&["Source", "Target", "Shared", "Suspicion"]))
        .block(panel_block("Suspicious hospital pairs"))
        .column_spacing(1);
    frame.render_widget(table, columns[1]);
}

pub fn render_beneficiaries(
    frame: &mut Frame<'_>,
    area: Rect,
    panel: &BeneficiaryScanner,
    editing: bool,
) {
    if render_placeholder(frame, area, "Ghost beneficiaries", panel.loader.state()) {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);
    render_cards(frame, rows[0], &panel.cards());

    let cursor = if editing { "_" } else { "" };
    let search_style = if editing {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let search = Paragraph::new(format!("{}{}", panel.query(), cursor))
        .style(search_style)
        .block(panel_block("Search patient / hospital / state [/]"));
    frame.render_widget(search, rows[1]);

    let visible = panel.visible();
    let body: Vec<Row<'_>> = visible
        .iter()
        .map(|case| {
            Row::new(vec![
                Cell::from(case.claim_id.clone()),
                Cell::from(case.patient_id.clone()),
                Cell::from(case.hospital_id.clone()),
                Cell::from(case.state.clone()),
                Cell::from(Span::styled(
                    format!("{:.1}", case.risk_score),
                    Style::default().fg(risk_color(case.risk_score)),
                )),
                Cell::from(format_inr(case.claim_amount)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(11),
        Constraint::Length(16),
        Constraint::Length(6),
        Constraint::Min(10),
    ];
    let title = format!("Cases ({} of {})", visible.len(), panel.total_cases());
    let table = Table::new(body, widths)
        .header(header_row(&["Claim", "Patient", "Hospital", "State", "Risk", "Amount"]))
        .block(panel_block(title))
        .column_spacing(1);
    frame.render_widget(table, rows[2]);
}

pub fn render_collisions(frame: &mut Frame<'_>, area: Rect, panel: &CollisionsPanel) {
    if render_placeholder(frame, area, "Concurrent claims", panel.loader.state()) {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);
    render_cards(frame, rows[0], &panel.cards());

    let body: Vec<Row<'_>> = panel
        .top_collisions()
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.patient_id.clone()),
                Cell::from(c.hospitals_involved.join(", ")),
                Cell::from(format_count(c.num_claims)),
                Cell::from(Span::styled(
                    format!("{:.1}", c.max_risk_score),
                    Style::default().fg(risk_color(c.max_risk_score)),
                )),
                Cell::from(c.states.join(", ")),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(15),
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Min(10),
    ];
    let table = Table::new(body, widths)
        .header(header_row(&["Patient", "Hospitals", "Claims", "Max risk", "States"]))
        .block(panel_block("Same patient, several hospitals"))
        .column_spacing(1);
    frame.render_widget(table, rows[1]);
}

pub fn render_upcoding(frame: &mut Frame<'_>, area: Rect, panel: &UpcodingPanel) {
    if render_placeholder(frame, area, "Upcoding", panel.loader.state()) {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);
    render_cards(frame, rows[0], &panel.cards());

    let body: Vec<Row<'_>> = panel
        .top_procedures()
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.procedure_code.clone()),
                Cell::from(p.procedure_name.clone()),
                Cell::from(format_inr(p.avg_billed_inr)),
                Cell::from(format_inr(p.expected_max_inr)),
                Cell::from(Span::styled(
                    format!("+{}", format_pct(p.deviation_pct)),
                    Style::default().fg(Color::Red),
                )),
                Cell::from(format_count(p.upcoded_claims)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(8),
    ];
    let table = Table::new(body, widths)
        .header(header_row(&[
            "Code", "Procedure", "Avg billed", "Expected", "Over", "Claims",
        ]))
        .block(panel_block("Procedures billed above package rate"))
        .column_spacing(1);
    frame.render_widget(table, rows[1]);
}

pub fn render_providers(frame: &mut Frame<'_>, area: Rect, panel: &ProviderRanking, tick: usize) {
    if render_placeholder(frame, area, "Provider ranking", panel.loader.state()) {
        return;
    }
    let spinner = SPINNER[tick % SPINNER.len()];
    let body: Vec<Row<'_>> = panel
        .visible()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let report = if panel.downloads.is_downloading(&row.hospital_id) {
                Span::styled(spinner, Style::default().fg(ACCENT))
            } else {
                Span::styled("[d]", Style::default().fg(Color::Gray))
            };
            let cells = vec![
                Cell::from(format!("{:>3}", i + 1)),
                Cell::from(row.hospital_id.clone()),
                Cell::from(row.state.clone()),
                Cell::from(format_count(row.total_claims)),
                Cell::from(format_inr(row.avg_claim_amount)),
                Cell::from(Span::styled(
                    format!("{:.1}", row.avg_risk_score),
                    Style::default().fg(risk_color(row.avg_risk_score)),
                )),
                Cell::from(format_count(row.total_flags())),
                Cell::from(report),
            ];
            let row = Row::new(cells);
            if i == panel.selected() {
                row.style(selected_style())
            } else {
                row
            }
        })
        .collect();
    let widths = [
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Length(16),
        Constraint::Length(7),
        Constraint::Length(11),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Min(6),
    ];
    let title = format!(
        "Provider ranking ({} of {}, page size {})",
        panel.visible().len(),
        panel.total(),
        panel.page_size()
    );
    let table = Table::new(body, widths)
        .header(header_row(&[
            "#", "Hospital", "State", "Claims", "Avg claim", "Risk", "Flags", "Report",
        ]))
        .block(panel_block(title))
        .column_spacing(1);
    frame.render_widget(table, area);
}

pub fn render_documents(
    frame: &mut Frame<'_>,
    area: Rect,
    panel: &DocumentInvestigation,
    editing: bool,
) {
    let block = panel_block("Document investigation");
    match panel.state() {
        DocumentState::Idle => {
            let mut lines = vec![
                Line::from("Upload a claim document (PDF, JPEG or PNG, up to 50 MB)."),
                Line::from(""),
            ];
            if editing {
                lines.push(Line::from(vec![
                    Span::styled("Path: ", header_style()),
                    Span::raw(format!("{}_", panel.path_input)),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    "Press O to choose a file",
                    Style::default().fg(Color::Gray),
                )));
            }
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        DocumentState::Analyzing { file_name, .. } => {
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(ACCENT))
                .percent(panel.progress() as u16)
                .label(format!("analyzing {} ({}%)", file_name, panel.progress()));
            frame.render_widget(gauge, area);
        }
        DocumentState::Resolved { file_name, result } => {
            let verdict = if result.is_suspicious() {
                Span::styled(
                    "SUSPICIOUS",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "CLEAR",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            };
            let mut lines = vec![
                Line::from(vec![Span::raw(format!("{}  ", file_name)), verdict]),
                Line::from(""),
                Line::from(format!("Patient ID:      {}", result.patient_id)),
                Line::from(format!("Hospital ID:     {}", result.hospital_id)),
                Line::from(format!("Procedure code:  {}", result.procedure_code)),
                Line::from(format!("Claimed amount:  {}", result.claimed_amount)),
                Line::from(vec![
                    Span::raw("Risk score:      "),
                    Span::styled(
                        format!("{:.1}", result.risk_score),
                        Style::default().fg(risk_color(result.risk_score)),
                    ),
                ]),
                Line::from(format!("Confidence:      {}", format_pct(result.confidence))),
                Line::from(format!(
                    "Archive:         compared against {} documents",
                    result.archive_size
                )),
                Line::from(""),
            ];
            if result.flags.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No forensic flags",
                    Style::default().fg(Color::Green),
                )));
            }
            for flag in &result.flags {
                lines.push(Line::from(Span::styled(
                    format!("⚠ {}", flag),
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press X to analyze another document",
                Style::default().fg(Color::Gray),
            )));
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                area,
            );
        }
        DocumentState::Failed { file_name, error } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("Analysis of {} failed: {}", file_name, error),
                    Style::default().fg(Color::Red),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press X to try again",
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
                area,
            );
        }
    }
}

pub fn render_reports(frame: &mut Frame<'_>, area: Rect) {
    let body: Vec<Row<'_>> = AUDIT_REPORTS
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.id),
                Cell::from(r.title),
                Cell::from(r.scope),
                Cell::from(r.generated),
                Cell::from(r.status.label()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(12),
        Constraint::Min(24),
        Constraint::Length(22),
        Constraint::Length(11),
        Constraint::Length(13),
    ];
    let table = Table::new(body, widths)
        .header(header_row(&["ID", "Title", "Scope", "Generated", "Status"]))
        .block(panel_block("Audit reports"))
        .column_spacing(1);
    frame.render_widget(table, area);
}

pub fn render_models(frame: &mut Frame<'_>, area: Rect, panel: &AnomalyPanel) {
    if render_placeholder(frame, area, "Isolation forest", panel.loader.state()) {
        return;
    }
    let Some(series) = panel.series() else {
        return;
    };
    let (x_bounds, y_bounds) = series.bounds(0.5);
    let datasets = vec![
        Dataset::default()
            .name(format!("Normal ({})", series.normal.len()))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(ACCENT))
            .data(&series.normal),
        Dataset::default()
            .name(format!("Anomaly ({})", series.anomalies.len()))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&series.anomalies),
    ];
    let chart = Chart::new(datasets)
        .block(panel_block("Isolation forest scatter"))
        .x_axis(
            Axis::default()
                .title("claim amount (normalized)")
                .style(Style::default().fg(Color::Gray))
                .labels(vec![
                    Span::raw(format!("{:.1}", x_bounds[0])),
                    Span::raw(format!("{:.1}", x_bounds[1])),
                ])
                .bounds(x_bounds),
        )
        .y_axis(
            Axis::default()
                .title("deviation")
                .style(Style::default().fg(Color::Gray))
                .labels(vec![
                    Span::raw(format!("{:.1}", y_bounds[0])),
                    Span::raw(format!("{:.1}", y_bounds[1])),
                ])
                .bounds(y_bounds),
        );
    frame.render_widget(chart, area);

    if panel.show_overlay {
        let overlay_area = centered_rect(64, 45, area);
        let lines: Vec<Line<'_>> = panel.overlay_lines().into_iter().map(Line::from).collect();
        let overlay = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel_block("How to read this [o]"));
        frame.render_widget(Clear, overlay_area);
        frame.render_widget(overlay, overlay_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
