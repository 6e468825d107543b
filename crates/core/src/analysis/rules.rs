use crate::analysis::metrics::{compute_metrics, round1};
use crate::domain::{
    Campaign, CampaignAnalysis, CampaignMetrics, Effort, Impact, Platform, Recommendation,
    RecommendationType,
};

pub const MAX_RECOMMENDATIONS: usize = 5;

const LOW_CTR_THRESHOLD: f64 = 1.0;
const HIGH_CPC_THRESHOLD: f64 = 2.0;
const LOW_UTILIZATION_THRESHOLD: f64 = 80.0;

/// Evaluates the rule battery in fixed order and keeps at most
/// [`MAX_RECOMMENDATIONS`] of the triggered ones, in that order.
pub fn recommend(campaign: &Campaign, metrics: &CampaignMetrics) -> Vec<Recommendation> {
    let rules: [fn(&Campaign, &CampaignMetrics) -> Option<Recommendation>; 5] = [
        low_ctr,
        high_cpc,
        low_budget_utilization,
        social_lookalike_audience,
        search_keyword_refinement,
    ];

    rules
        .iter()
        .filter_map(|rule| rule(campaign, metrics))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

pub fn analyze(campaign: &Campaign) -> CampaignAnalysis {
    let metrics = compute_metrics(campaign);
    let recommendations = recommend(campaign, &metrics);

    tracing::debug!(
        campaign_id = %campaign.id,
        ctr = metrics.ctr,
        cpc = metrics.cpc,
        recommendations_len = recommendations.len(),
        "campaign analyzed"
    );

    CampaignAnalysis {
        campaign_id: campaign.id.clone(),
        campaign_name: campaign.name.clone(),
        metrics,
        recommendations,
    }
}

/// Percentage of the budget already spent. `None` for a zero budget, where
/// utilization has no meaning.
pub fn budget_utilization(campaign: &Campaign) -> Option<f64> {
    if campaign.budget > 0.0 {
        Some(campaign.spent / campaign.budget * 100.0)
    } else {
        None
    }
}

fn low_ctr(campaign: &Campaign, metrics: &CampaignMetrics) -> Option<Recommendation> {
    (metrics.ctr < LOW_CTR_THRESHOLD).then(|| Recommendation {
        id: rule_id(campaign, "ctr"),
        kind: RecommendationType::Creative,
        title: "Melhore a Taxa de Cliques (CTR)".to_string(),
        description: format!(
            "Sua CTR atual é {}%, que está abaixo da média. Teste novos criativos, headlines mais chamativas e calls-to-action mais persuasivos.",
            metrics.ctr
        ),
        impact: Impact::High,
        effort: Effort::Medium,
        estimated_improvement: "+25-40% em cliques".to_string(),
    })
}

fn high_cpc(campaign: &Campaign, metrics: &CampaignMetrics) -> Option<Recommendation> {
    (metrics.cpc > HIGH_CPC_THRESHOLD).then(|| Recommendation {
        id: rule_id(campaign, "cpc"),
        kind: RecommendationType::Bidding,
        title: "Otimize o Custo por Clique (CPC)".to_string(),
        description: format!(
            "Seu CPC de R$ {} está alto. Considere ajustar a estratégia de lances, refinar o público-alvo ou testar horários diferentes.",
            metrics.cpc
        ),
        impact: Impact::High,
        effort: Effort::Easy,
        estimated_improvement: "-15-30% no CPC".to_string(),
    })
}

fn low_budget_utilization(campaign: &Campaign, _: &CampaignMetrics) -> Option<Recommendation> {
    let utilization = budget_utilization(campaign)?;
    let shown = round1(utilization);
    (utilization < LOW_UTILIZATION_THRESHOLD).then(|| Recommendation {
        id: rule_id(campaign, "budget"),
        kind: RecommendationType::Budget,
        title: "Aumente o Orçamento da Campanha".to_string(),
        description: format!(
            "Você está usando apenas {shown:.1}% do orçamento. Considere aumentar o investimento para ampliar o alcance."
        ),
        impact: Impact::Medium,
        effort: Effort::Easy,
        estimated_improvement: "+20-50% em impressões".to_string(),
    })
}

fn social_lookalike_audience(campaign: &Campaign, _: &CampaignMetrics) -> Option<Recommendation> {
    campaign.platform.is_social().then(|| Recommendation {
        id: rule_id(campaign, "audience"),
        kind: RecommendationType::Audience,
        title: "Teste Públicos Similares".to_string(),
        description: "Crie públicos similares baseados nos seus melhores clientes para encontrar novos prospects qualificados.".to_string(),
        impact: Impact::Medium,
        effort: Effort::Medium,
        estimated_improvement: "+10-25% na qualidade dos leads".to_string(),
    })
}

fn search_keyword_refinement(campaign: &Campaign, _: &CampaignMetrics) -> Option<Recommendation> {
    (campaign.platform == Platform::Google).then(|| Recommendation {
        id: rule_id(campaign, "keywords"),
        kind: RecommendationType::Audience,
        title: "Refine as Palavras-chave".to_string(),
        description: "Adicione palavras-chave negativas e teste variações de correspondência para melhorar a relevância dos anúncios.".to_string(),
        impact: Impact::High,
        effort: Effort::Medium,
        estimated_improvement: "+15-35% na qualidade do tráfego".to_string(),
    })
}

fn rule_id(campaign: &Campaign, tag: &str) -> String {
    format!("{}-{tag}", campaign.id)
}
