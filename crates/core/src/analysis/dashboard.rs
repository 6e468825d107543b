use crate::analysis::metrics::{compute_metrics, ratio_or_zero, round2};
use crate::domain::{
    Campaign, CampaignChartRow, CampaignStatus, DashboardData, Platform, PlatformCounts,
    PlatformShare,
};

/// Recomputes the dashboard from the whole collection.
///
/// Averages are global ratios (total clicks over total impressions, total
/// spend over total clicks), not means of per-campaign metrics.
pub fn aggregate(campaigns: &[Campaign]) -> DashboardData {
    let total_spent: f64 = campaigns.iter().map(|c| c.spent).sum();
    // Counters are unbounded user input; totals saturate instead of overflowing.
    let total_clicks = campaigns
        .iter()
        .map(|c| c.clicks)
        .fold(0u64, u64::saturating_add);
    let total_impressions = campaigns
        .iter()
        .map(|c| c.impressions)
        .fold(0u64, u64::saturating_add);

    let average_ctr = ratio_or_zero(total_clicks as f64, total_impressions) * 100.0;
    let average_cpc = ratio_or_zero(total_spent, total_clicks);

    let active_campaigns = campaigns
        .iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .count();

    let mut campaigns_by_platform = PlatformCounts::default();
    for c in campaigns {
        campaigns_by_platform.bump(c.platform);
    }

    DashboardData {
        total_spent,
        total_clicks,
        total_impressions,
        average_ctr: round2(average_ctr),
        average_cpc: round2(average_cpc),
        active_campaigns,
        campaigns_by_platform,
    }
}

/// Per-campaign performance rows, in collection order.
pub fn chart_rows(campaigns: &[Campaign]) -> Vec<CampaignChartRow> {
    campaigns
        .iter()
        .map(|c| CampaignChartRow {
            name: c.name.clone(),
            spent: c.spent,
            clicks: c.clicks,
            ctr: compute_metrics(c).ctr,
        })
        .collect()
}

/// Platform distribution with empty platforms left out.
pub fn platform_share(dashboard: &DashboardData) -> Vec<PlatformShare> {
    Platform::ALL
        .into_iter()
        .map(|platform| PlatformShare {
            platform,
            count: dashboard.campaigns_by_platform.get(platform),
        })
        .filter(|share| share.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics::tests::campaign;
    use crate::domain::sample_campaigns;

    #[test]
    fn empty_collection_is_all_zero() {
        let d = aggregate(&[]);
        assert_eq!(d, DashboardData::default());
        assert_eq!(d.total_spent, 0.0);
        assert_eq!(d.campaigns_by_platform, PlatformCounts::default());
        assert!(platform_share(&d).is_empty());
    }

    #[test]
    fn samples_use_global_ratios() {
        let d = aggregate(&sample_campaigns());
        assert_eq!(d.total_spent, 6000.0);
        assert_eq!(d.total_clicks, 2140);
        assert_eq!(d.total_impressions, 73000);
        // 2140 / 73000 = 2.9315%; 6000 / 2140 = 2.8037
        assert_eq!(d.average_ctr, 2.93);
        assert_eq!(d.average_cpc, 2.8);
        assert_eq!(d.active_campaigns, 2);
        assert_eq!(
            d.campaigns_by_platform,
            PlatformCounts {
                facebook: 1,
                instagram: 0,
                google: 1
            }
        );
    }

    #[test]
    fn global_ratio_differs_from_mean_of_ratios() {
        let campaigns = vec![
            campaign("a", Platform::Facebook, 100.0, 10.0, 1, 100),
            campaign("b", Platform::Facebook, 100.0, 10.0, 99, 9900),
            campaign("c", Platform::Google, 100.0, 90.0, 0, 100),
        ];
        let d = aggregate(&campaigns);
        // 100 clicks / 10100 impressions, not mean(1%, 1%, 0%)
        assert_eq!(d.average_ctr, 0.99);
        assert_eq!(d.average_cpc, 1.1);
    }

    #[test]
    fn huge_counters_saturate() {
        let campaigns = vec![
            campaign("a", Platform::Google, 1.0, 1.0, u64::MAX, u64::MAX),
            campaign("b", Platform::Google, 1.0, 1.0, 1, 1),
        ];
        let d = aggregate(&campaigns);
        assert_eq!(d.total_clicks, u64::MAX);
        assert_eq!(d.total_impressions, u64::MAX);
        assert_eq!(d.average_ctr, 100.0);
    }

    #[test]
    fn counts_only_active_campaigns() {
        let mut paused = campaign("p", Platform::Instagram, 1.0, 0.0, 0, 0);
        paused.status = CampaignStatus::Paused;
        let mut done = campaign("d", Platform::Instagram, 1.0, 0.0, 0, 0);
        done.status = CampaignStatus::Completed;
        let live = campaign("l", Platform::Google, 1.0, 0.0, 0, 0);

        let d = aggregate(&[paused, done, live]);
        assert_eq!(d.active_campaigns, 1);
        assert_eq!(d.campaigns_by_platform.instagram, 2);
    }

    #[test]
    fn platform_share_keeps_fixed_order_and_drops_zero() {
        let d = aggregate(&sample_campaigns());
        let share = platform_share(&d);
        assert_eq!(
            share,
            vec![
                PlatformShare {
                    platform: Platform::Facebook,
                    count: 1
                },
                PlatformShare {
                    platform: Platform::Google,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn chart_rows_follow_collection_order() {
        let rows = chart_rows(&sample_campaigns());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Promoção Black Friday");
        assert_eq!(rows[0].ctr, 2.78);
        assert_eq!(rows[1].clicks, 890);
    }
}
