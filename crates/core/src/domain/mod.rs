pub mod campaign;
pub mod contract;
pub mod feedback;
pub mod metrics;
pub mod recommendation;

pub use campaign::{sample_campaigns, Campaign, CampaignStatus, Platform};
pub use contract::{FeedbackDraft, NewCampaign};
pub use feedback::{Feedback, FeedbackCategory};
pub use metrics::{CampaignChartRow, CampaignMetrics, DashboardData, PlatformCounts, PlatformShare};
pub use recommendation::{CampaignAnalysis, Effort, Impact, Recommendation, RecommendationType};
