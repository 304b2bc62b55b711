//! Document analysis and report download

use super::{print_json, Output};
use crate::display;
use anyhow::Context;
use colored::*;
use fraudscope_client::{ClaimAnalyzer, FraudScopeClient, ReportSource};
use fraudscope_dashboard::{DocumentInvestigation, DocumentState};
use fraudscope_types::format_pct;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub async fn analyze(client: &FraudScopeClient, path: &Path, output: Output) -> anyhow::Result<()> {
    let analyzer: Arc<dyn ClaimAnalyzer> = Arc::new(client.clone());
    let mut investigation = DocumentInvestigation::new(analyzer);
    investigation
        .select_path(path)
        .await
        .with_context(|| format!("cannot analyze {}", path.display()))?;

    let show_progress = output == Output::Human;
    while investigation.is_analyzing() {
        if show_progress {
            print!("\r  analyzing... {:>3}%", investigation.progress());
            let _ = std::io::stdout().flush();
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        investigation.poll();
    }
    if show_progress {
        println!("\r  analyzing... {:>3}%", investigation.progress());
    }

    match investigation.state() {
        DocumentState::Resolved { file_name, result } => {
            if output == Output::Json {
                return print_json(result);
            }
            display::section(&format!("Analysis: {}", file_name));
            display::labeled("Patient ID", &result.patient_id);
            display::labeled("Hospital ID", &result.hospital_id);
            display::labeled("Procedure", &result.procedure_code);
            display::labeled("Claimed amount", &result.claimed_amount);
            println!(
                "  {}: {}",
                "Risk score".bright_white(),
                display::risk(result.risk_score, 0)
            );
            display::labeled("Confidence", &format_pct(result.confidence));
            display::labeled("Archive size", &result.archive_size.to_string());
            println!();
            if result.flags.is_empty() {
                display::success("no forensic flags");
            }
            for flag in &result.flags {
                display::warning(flag);
            }
            Ok(())
        }
        DocumentState::Failed { file_name, error } => {
            anyhow::bail!("analysis of {} failed: {}", file_name, error)
        }
        DocumentState::Idle | DocumentState::Analyzing { .. } => {
            anyhow::bail!("analysis of {} did not finish", path.display())
        }
    }
}

pub async fn report(
    client: &FraudScopeClient,
    hospital_id: &str,
    dir: &Path,
    output: Output,
) -> anyhow::Result<()> {
    let report = client
        .generate_report(hospital_id)
        .await
        .with_context(|| format!("failed to generate report for {}", hospital_id))?;
    let path = report
        .save_to(dir)
        .await
        .with_context(|| format!("failed to save report into {}", dir.display()))?;

    if output == Output::Json {
        return print_json(&serde_json::json!({
            "hospital_id": hospital_id,
            "path": path,
            "bytes": report.bytes.len(),
        }));
    }
    display::success(&format!(
        "report for {} saved to {} ({} bytes)",
        hospital_id,
        path.display(),
        report.bytes.len()
    ));
    Ok(())
}
