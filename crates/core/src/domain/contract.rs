use crate::domain::{Campaign, CampaignStatus, Feedback, FeedbackCategory, Platform};
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MISSING_FIELDS: &str = "Preencha todos os campos obrigatórios";
const INVALID_AMOUNT: &str = "Valores monetários devem ser números não negativos";
const MISSING_COMMENT: &str = "Por favor, adicione um comentário";
const INVALID_RATING: &str = "A avaliação deve estar entre 1 e 5";

/// Campaign form as submitted. Every field may be absent on the wire;
/// required ones are checked in [`NewCampaign::validate_and_into_campaign`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: Option<String>,
    pub platform: Option<Platform>,
    pub budget: Option<f64>,
    pub spent: Option<f64>,
    pub clicks: Option<u64>,
    pub impressions: Option<u64>,
    pub target_audience: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl NewCampaign {
    /// Builds an `active` campaign with a fresh UUID.
    pub fn into_campaign(self) -> anyhow::Result<Campaign> {
        self.validate_and_into_campaign(Uuid::new_v4().to_string())
    }

    pub fn validate_and_into_campaign(self, id: String) -> anyhow::Result<Campaign> {
        let name = non_blank(self.name);
        let target_audience = non_blank(self.target_audience);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if self.platform.is_none() {
            missing.push("platform");
        }
        if self.budget.is_none() {
            missing.push("budget");
        }
        if target_audience.is_none() {
            missing.push("target_audience");
        }
        if self.start_date.is_none() {
            missing.push("start_date");
        }
        if self.end_date.is_none() {
            missing.push("end_date");
        }

        let (
            Some(name),
            Some(platform),
            Some(budget),
            Some(target_audience),
            Some(start_date),
            Some(end_date),
        ) = (
            name,
            self.platform,
            self.budget,
            target_audience,
            self.start_date,
            self.end_date,
        )
        else {
            return Err(ValidationError::new(MISSING_FIELDS, missing).into());
        };

        let spent = self.spent.unwrap_or(0.0);
        let mut invalid = Vec::new();
        if !is_amount(budget) {
            invalid.push("budget");
        }
        if !is_amount(spent) {
            invalid.push("spent");
        }
        if !invalid.is_empty() {
            return Err(ValidationError::new(INVALID_AMOUNT, invalid).into());
        }

        let campaign = Campaign {
            id,
            name,
            platform,
            budget,
            spent,
            clicks: self.clicks.unwrap_or(0),
            impressions: self.impressions.unwrap_or(0),
            target_audience,
            start_date,
            end_date,
            status: CampaignStatus::Active,
        };
        warn_unenforced_invariants(&campaign);
        Ok(campaign)
    }
}

/// Feedback form as submitted. Rating defaults to 5, category to general.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub campaign_id: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub category: Option<FeedbackCategory>,
}

impl FeedbackDraft {
    pub fn validate_and_into_feedback(self, now: DateTime<Utc>) -> anyhow::Result<Feedback> {
        let Some(comment) = non_blank(self.comment) else {
            return Err(ValidationError::new(MISSING_COMMENT, vec!["comment"]).into());
        };

        let rating = self.rating.unwrap_or(5);
        if !(1..=5).contains(&rating) {
            return Err(ValidationError::new(INVALID_RATING, vec!["rating"]).into());
        }

        Ok(Feedback {
            id: Uuid::new_v4(),
            campaign_id: non_blank(self.campaign_id),
            rating,
            comment,
            category: self.category.unwrap_or_default(),
            created_at: now,
        })
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn is_amount(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

// Accepted as entered; recommendations treat over-spend as meaningful.
fn warn_unenforced_invariants(c: &Campaign) {
    if c.spent > c.budget {
        tracing::warn!(campaign_id = %c.id, spent = c.spent, budget = c.budget, "campaign spent exceeds budget");
    }
    if c.impressions < c.clicks {
        tracing::warn!(
            campaign_id = %c.id,
            clicks = c.clicks,
            impressions = c.impressions,
            "campaign has fewer impressions than clicks"
        );
    }
    if c.end_date < c.start_date {
        tracing::warn!(campaign_id = %c.id, start_date = %c.start_date, end_date = %c.end_date, "campaign ends before it starts");
    }
}
