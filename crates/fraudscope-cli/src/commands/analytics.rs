//! Aggregate views: counters, state intelligence, network, model, backend

use super::{print_json, Output};
use crate::display;
use anyhow::Context;
use colored::*;
use fraudscope_client::FraudScopeClient;
use fraudscope_dashboard::{
    rank_edges, rank_nodes, stat_cards, AnomalyPanel, Loader, TOP_EDGES, TOP_NODES,
};
use fraudscope_types::{format_count, format_inr_compact, format_pct, ScatterSeries};

pub async fn stats(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let stats = client.stats().await.context("failed to fetch stats")?;
    if output == Output::Json {
        return print_json(&stats);
    }
    display::section("Claim Overview");
    if stats.is_empty() {
        display::warning("backend reported no claims");
        return Ok(());
    }
    display::cards(&stat_cards(&stats));
    Ok(())
}

pub async fn states(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let mut rows = client
        .state_intelligence()
        .await
        .context("failed to fetch state intelligence")?;
    if output == Output::Json {
        return print_json(&rows);
    }
    display::section("State Intelligence");
    if rows.is_empty() {
        display::warning("no state rows");
        return Ok(());
    }
    rows.sort_by(|a, b| b.threat_level.severity().cmp(&a.threat_level.severity()));
    display::table_header(&format!(
        "{:<18} {:<9} {:>7} {:>8} {:>12}  {}",
        "State", "Threat", "Fraud", "Claims", "Loss", "Primary type"
    ));
    for row in &rows {
        println!(
            "  {:<18} {} {:>7} {:>8} {:>12}  {}",
            row.state,
            display::threat(row.threat_level, 9),
            format_pct(row.fraud_rate_pct),
            format_count(row.total_claims),
            format_inr_compact(row.estimated_loss_inr),
            row.primary_fraud_type.bright_black()
        );
    }
    Ok(())
}

pub async fn network(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let network = client
        .fraud_network()
        .await
        .context("failed to fetch fraud network")?;
    if output == Output::Json {
        return print_json(&network);
    }
    display::section("Provider Network");
    if network.is_empty() {
        display::warning("no network data");
        return Ok(());
    }
    display::labeled(
        "High-centrality hospitals",
        &format_count(network.high_centrality_count),
    );

    println!();
    display::table_header(&format!("{:>3}  {:<12} {:>6}", "#", "Hospital", "Risk"));
    for (i, node) in rank_nodes(&network.nodes, TOP_NODES).iter().enumerate() {
        println!(
            "  {:>3}  {:<12} {}",
            i + 1,
            node.id,
            display::risk(node.risk_score, 6)
        );
    }

    println!();
    display::table_header(&format!(
        "{:<12} {:<12} {:>7} {:>9}",
        "Source", "Target", "Shared", "Suspicion"
    ));
    for edge in rank_edges(&network.edges, TOP_EDGES) {
        println!(
            "  {:<12} {:<12} {:>7} {}",
            edge.source,
            edge.target,
            format_count(edge.shared_patients),
            display::risk(edge.suspicion_score, 9)
        );
    }
    Ok(())
}

pub async fn anomalies(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let report = client
        .isolation_forest()
        .await
        .context("failed to fetch isolation-forest output")?;
    if output == Output::Json {
        return print_json(&report);
    }
    display::section("Anomaly Detection");
    let series = ScatterSeries::partition(&report.scatter_data);
    let panel = AnomalyPanel::new(Loader::resolved(AnomalyPanel::NAME, Ok(report)));
    for line in panel.overlay_lines() {
        display::info(&line);
    }
    println!();
    display::kv("sampled normal points", &format_count(series.normal.len() as u64));
    display::kv("sampled anomalies", &format_count(series.anomalies.len() as u64));
    Ok(())
}

pub async fn status(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let checked_at = chrono::Local::now();
    let status = client
        .db_status()
        .await
        .with_context(|| format!("backend at {} is not answering", client.endpoint()))?;
    if output == Output::Json {
        return print_json(&status);
    }
    display::section("Backend Status");
    display::labeled("Endpoint", client.endpoint());
    display::labeled("Checked", &checked_at.format("%Y-%m-%d %H:%M:%S").to_string());
    if status.sqlite_active {
        display::success(&status.label());
    } else {
        display::warning(&status.label());
    }
    if !status.tables.is_empty() {
        display::kv("tables", &status.tables.join(", "));
    }
    Ok(())
}
