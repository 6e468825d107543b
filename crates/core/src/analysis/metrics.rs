use crate::domain::{Campaign, CampaignMetrics};

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

pub fn compute_metrics(campaign: &Campaign) -> CampaignMetrics {
    let ctr = ratio_or_zero(campaign.clicks as f64, campaign.impressions) * 100.0;
    let cpc = ratio_or_zero(campaign.spent, campaign.clicks);
    let cpm = ratio_or_zero(campaign.spent, campaign.impressions) * 1000.0;

    CampaignMetrics {
        ctr: round2(ctr),
        cpc: round2(cpc),
        cpm: round2(cpm),
        roas: 0.0,
        conversion_rate: 0.0,
    }
}
