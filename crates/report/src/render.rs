use std::fmt::{self, Write};

use clickwise_core::analysis::analyze;
use clickwise_core::domain::{CampaignAnalysis, DashboardData, Impact};
use clickwise_core::error::NotFoundError;
use clickwise_core::format::{format_currency, format_number, format_percentage};
use clickwise_core::session::Session;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub dashboard: DashboardData,
    pub analyses: Vec<CampaignAnalysis>,
}

/// Dashboard plus the analysis of every campaign, or of `campaign_id` only.
pub fn build_report(session: &Session, campaign_id: Option<&str>) -> anyhow::Result<Report> {
    let analyses = match campaign_id {
        Some(id) => {
            let campaign = session.campaign(id).ok_or_else(|| NotFoundError {
                kind: "campaign",
                id: id.to_string(),
            })?;
            vec![analyze(campaign)]
        }
        None => session.campaigns.iter().map(analyze).collect(),
    };

    Ok(Report {
        dashboard: session.dashboard,
        analyses,
    })
}

pub fn render_text(report: &Report) -> anyhow::Result<String> {
    let mut out = String::new();
    write_text(&mut out, report)?;
    Ok(out.trim_end().to_string())
}

fn write_text(out: &mut String, report: &Report) -> fmt::Result {
    let d = &report.dashboard;
    writeln!(out, "== Dashboard")?;
    writeln!(out, "Investimento total: {}", format_currency(d.total_spent))?;
    writeln!(out, "Cliques: {}", format_number(d.total_clicks))?;
    writeln!(out, "Impressões: {}", format_number(d.total_impressions))?;
    writeln!(out, "CTR médio: {}", format_percentage(d.average_ctr))?;
    writeln!(out, "CPC médio: {}", format_currency(d.average_cpc))?;
    writeln!(out, "Campanhas ativas: {}", d.active_campaigns)?;
    let p = &d.campaigns_by_platform;
    writeln!(
        out,
        "Plataformas: facebook={} instagram={} google={}",
        p.facebook, p.instagram, p.google
    )?;

    for a in &report.analyses {
        writeln!(out)?;
        writeln!(out, "== {} ({})", a.campaign_name, a.campaign_id)?;
        writeln!(
            out,
            "CTR {} | CPC {} | CPM {}",
            format_percentage(a.metrics.ctr),
            format_currency(a.metrics.cpc),
            format_currency(a.metrics.cpm)
        )?;
        writeln!(out, "{} recomendações", a.recommendations.len())?;
        for r in &a.recommendations {
            writeln!(
                out,
                "- [{}] {}: {} ({})",
                impact_label(r.impact),
                r.title,
                r.description,
                r.estimated_improvement
            )?;
        }
    }
    Ok(())
}

fn impact_label(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "alto",
        Impact::Medium => "médio",
        Impact::Low => "baixo",
    }
}
