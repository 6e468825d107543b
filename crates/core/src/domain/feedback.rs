use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Usability,
    Recommendations,
    Features,
    #[default]
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub campaign_id: Option<String>,
    /// 1..=5
    pub rating: u8,
    pub comment: String,
    pub category: FeedbackCategory,
    pub created_at: DateTime<Utc>,
}
