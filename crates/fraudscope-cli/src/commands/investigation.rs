//! Case lists: ghost beneficiaries, providers, claims, collisions, upcoding

use super::{print_json, Output};
use crate::display;
use anyhow::Context;
use colored::*;
use fraudscope_client::FraudScopeClient;
use fraudscope_dashboard::{
    filter_cases, paginate, CollisionsPanel, Loader, PageSize, UpcodingPanel,
};
use fraudscope_types::{format_count, format_inr, format_inr_compact, format_pct};

pub async fn ghosts(
    client: &FraudScopeClient,
    search: Option<&str>,
    output: Output,
) -> anyhow::Result<()> {
    let report = client
        .ghost_beneficiaries()
        .await
        .context("failed to fetch ghost beneficiaries")?;
    let visible = filter_cases(&report.cases, search.unwrap_or(""));
    if output == Output::Json {
        return print_json(&visible);
    }

    display::section("Ghost Beneficiaries");
    let summary = &report.summary;
    display::labeled("Ghost flags", &format_count(summary.total_ghost_flags));
    display::labeled(
        "Suspicious IDs",
        &format_count(summary.unique_suspicious_beneficiaries),
    );
    display::labeled(
        "Exposure",
        &format_inr_compact(summary.total_fraudulent_amount_inr),
    );
    println!();

    if let Some(query) = search {
        display::info(&format!(
            "{} of {} cases match '{}'",
            visible.len(),
            report.cases.len(),
            query
        ));
    }
    if visible.is_empty() {
        display::warning("no cases to show");
        return Ok(());
    }
    display::table_header(&format!(
        "{:<12} {:<15} {:<11} {:<16} {:>6} {:>10}",
        "Claim", "Patient", "Hospital", "State", "Risk", "Amount"
    ));
    for case in visible {
        println!(
            "  {:<12} {:<15} {:<11} {:<16} {} {:>10}",
            case.claim_id,
            case.patient_id,
            case.hospital_id,
            case.state,
            display::risk(case.risk_score, 6),
            format_inr(case.claim_amount)
        );
    }
    Ok(())
}

pub async fn hospitals(
    client: &FraudScopeClient,
    page_size: usize,
    state: Option<&str>,
    output: Output,
) -> anyhow::Result<()> {
    let page_size = PageSize::from_count(page_size)
        .with_context(|| format!("page size {} is not one of 0, 10, 25, 50, 75", page_size))?;
    let rows = client
        .hospitals(state)
        .await
        .context("failed to fetch hospitals")?;
    let visible = paginate(&rows, page_size);
    if output == Output::Json {
        return print_json(visible);
    }

    display::section("Provider Ranking");
    if rows.is_empty() {
        display::warning("no hospitals");
        return Ok(());
    }
    display::info(&format!("showing {} of {}", visible.len(), rows.len()));
    display::table_header(&format!(
        "{:>3}  {:<11} {:<16} {:>7} {:>11} {:>6} {:>6}",
        "#", "Hospital", "State", "Claims", "Avg claim", "Risk", "Flags"
    ));
    for (i, row) in visible.iter().enumerate() {
        println!(
            "  {:>3}  {:<11} {:<16} {:>7} {:>11} {} {:>6}",
            i + 1,
            row.hospital_id,
            row.state,
            format_count(row.total_claims),
            format_inr(row.avg_claim_amount),
            display::risk(row.avg_risk_score, 6),
            format_count(row.total_flags())
        );
    }
    if visible.len() < rows.len() {
        let next = page_size.next().limit().unwrap_or(0);
        display::info(&format!("more rows with --page-size {}", next));
    }
    Ok(())
}

pub async fn claims(
    client: &FraudScopeClient,
    hospital: Option<&str>,
    output: Output,
) -> anyhow::Result<()> {
    let rows = client
        .claims(hospital)
        .await
        .context("failed to fetch claims")?;
    if output == Output::Json {
        return print_json(&rows);
    }

    match hospital {
        Some(id) => display::section(&format!("Claims at {}", id)),
        None => display::section("Claims"),
    }
    if rows.is_empty() {
        display::warning("no claims");
        return Ok(());
    }
    let suspicious = rows.iter().filter(|c| c.is_suspicious()).count();
    display::info(&format!("{} claims, {} suspicious", rows.len(), suspicious));
    display::table_header(&format!(
        "{:<12} {:<15} {:<11} {:<10} {:>10} {:>6}  {}",
        "Claim", "Patient", "Hospital", "Procedure", "Amount", "Risk", "Flags"
    ));
    for claim in &rows {
        println!(
            "  {:<12} {:<15} {:<11} {:<10} {:>10} {}  {}",
            claim.claim_id,
            claim.patient_id,
            claim.hospital_id,
            claim.procedure_code,
            format_inr(claim.claim_amount),
            display::risk(claim.risk_score, 6),
            claim.flag_labels().join(", ").bright_red()
        );
    }
    Ok(())
}

pub async fn concurrent(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let report = client
        .concurrent_claims()
        .await
        .context("failed to fetch concurrent claims")?;
    if output == Output::Json {
        return print_json(&report);
    }
    display::section("Concurrent Claims");
    let panel = CollisionsPanel::new(Loader::resolved(CollisionsPanel::NAME, Ok(report)));
    if panel.loader.data().is_none() {
        display::warning("no collisions reported");
        return Ok(());
    }
    display::cards(&panel.cards());
    println!();
    for collision in panel.top_collisions() {
        println!(
            "  {} {} at {} hospitals, {} claims, max risk {}",
            "●".bright_red(),
            collision.patient_id.bright_white(),
            collision.hospitals_involved.len(),
            collision.num_claims,
            display::risk(collision.max_risk_score, 0)
        );
        display::kv("hospitals", &collision.hospitals_involved.join(", "));
        if !collision.states.is_empty() {
            display::kv("states", &collision.states.join(", "));
        }
    }
    Ok(())
}

pub async fn upcoding(client: &FraudScopeClient, output: Output) -> anyhow::Result<()> {
    let report = client
        .upcoding_analysis()
        .await
        .context("failed to fetch upcoding analysis")?;
    if output == Output::Json {
        return print_json(&report);
    }
    display::section("Upcoding");
    let panel = UpcodingPanel::new(Loader::resolved(UpcodingPanel::NAME, Ok(report)));
    if panel.loader.data().is_none() {
        display::warning("no upcoding reported");
        return Ok(());
    }
    display::cards(&panel.cards());
    println!();
    display::table_header(&format!(
        "{:<10} {:<28} {:>12} {:>12} {:>8}",
        "Code", "Procedure", "Avg billed", "Expected", "Over"
    ));
    for p in panel.top_procedures() {
        println!(
            "  {:<10} {:<28} {:>12} {:>12} {:>8}",
            p.procedure_code,
            p.procedure_name,
            format_inr(p.avg_billed_inr),
            format_inr(p.expected_max_inr),
            format!("+{}", format_pct(p.deviation_pct)).bright_red()
        );
    }
    Ok(())
}
