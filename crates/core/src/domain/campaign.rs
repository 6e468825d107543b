use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Google,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Google];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Google => "google",
        }
    }

    /// Social platforms share the lookalike-audience rule.
    pub fn is_social(self) -> bool {
        matches!(self, Platform::Facebook | Platform::Instagram)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

/// A campaign as entered by the user. Counters are raw totals to date.
///
/// `spent` may exceed `budget` and `impressions` may be lower than `clicks`;
/// neither is rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub budget: f64,
    pub spent: f64,
    pub clicks: u64,
    pub impressions: u64,
    pub target_audience: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
}

/// The two campaigns a fresh session starts with.
pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "1".to_string(),
            name: "Promoção Black Friday".to_string(),
            platform: Platform::Facebook,
            budget: 5000.0,
            spent: 3200.0,
            clicks: 1250,
            impressions: 45000,
            target_audience: "Mulheres 25-45, interessadas em moda".to_string(),
            start_date: ymd(2024, 11, 1),
            end_date: ymd(2024, 11, 30),
            status: CampaignStatus::Active,
        },
        Campaign {
            id: "2".to_string(),
            name: "Lançamento Produto".to_string(),
            platform: Platform::Google,
            budget: 3000.0,
            spent: 2800.0,
            clicks: 890,
            impressions: 28000,
            target_audience: "Homens 30-50, renda alta".to_string(),
            start_date: ymd(2024, 10, 15),
            end_date: ymd(2024, 12, 15),
            status: CampaignStatus::Active,
        },
    ]
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with constant, valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("sample date is valid")
}
