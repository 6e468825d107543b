use crate::domain::campaign::Platform;
use serde::{Deserialize, Serialize};

/// Ratios derived from a campaign's counters, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Cost per click.
    pub cpc: f64,
    /// Cost per thousand impressions.
    pub cpm: f64,
    /// Always 0: no revenue data is modeled.
    pub roas: f64,
    /// Always 0: no conversion data is modeled.
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub facebook: usize,
    pub instagram: usize,
    pub google: usize,
}

impl PlatformCounts {
    pub fn get(&self, platform: Platform) -> usize {
        match platform {
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::Google => self.google,
        }
    }

    pub(crate) fn bump(&mut self, platform: Platform) {
        match platform {
            Platform::Facebook => self.facebook += 1,
            Platform::Instagram => self.instagram += 1,
            Platform::Google => self.google += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_spent: f64,
    pub total_clicks: u64,
    pub total_impressions: u64,
    pub average_ctr: f64,
    pub average_cpc: f64,
    pub active_campaigns: usize,
    pub campaigns_by_platform: PlatformCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignChartRow {
    pub name: String,
    pub spent: f64,
    pub clicks: u64,
    pub ctr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: Platform,
    pub count: usize,
}
