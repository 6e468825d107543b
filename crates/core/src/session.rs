//! Application state as immutable snapshots.
//!
//! A [`Session`] is never changed in place: [`Session::reduce`] returns the
//! next session, with the campaign collection replaced wholesale and the
//! dashboard recomputed from it.

use crate::analysis::{aggregate, analyze};
use crate::domain::{sample_campaigns, Campaign, CampaignAnalysis, DashboardData, Feedback};
use crate::error::NotFoundError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub campaigns: Arc<[Campaign]>,
    pub dashboard: DashboardData,
    /// Most recently analyzed campaign.
    pub selected: Option<CampaignAnalysis>,
    pub feedback: Arc<[Feedback]>,
}

#[derive(Debug, Clone)]
pub enum Action {
    AddCampaign(Campaign),
    Analyze { campaign_id: String },
    SubmitFeedback(Feedback),
    ClearSelection,
}

impl Session {
    pub fn empty() -> Self {
        Self::with_campaigns(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_campaigns(sample_campaigns())
    }

    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Self {
        let dashboard = aggregate(&campaigns);
        Self {
            campaigns: campaigns.into(),
            dashboard,
            selected: None,
            feedback: Vec::new().into(),
        }
    }

    pub fn campaign(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == campaign_id)
    }

    pub fn reduce(&self, action: Action) -> anyhow::Result<Session> {
        match action {
            Action::AddCampaign(campaign) => {
                anyhow::ensure!(
                    self.campaign(&campaign.id).is_none(),
                    "duplicate campaign id: {}",
                    campaign.id
                );
                let mut campaigns = self.campaigns.to_vec();
                campaigns.push(campaign);
                Ok(Session {
                    dashboard: aggregate(&campaigns),
                    campaigns: campaigns.into(),
                    ..self.clone()
                })
            }
            Action::Analyze { campaign_id } => {
                let campaign = self.campaign(&campaign_id).ok_or_else(|| NotFoundError {
                    kind: "campaign",
                    id: campaign_id.clone(),
                })?;
                Ok(Session {
                    selected: Some(analyze(campaign)),
                    ..self.clone()
                })
            }
            Action::SubmitFeedback(feedback) => {
                let mut all = self.feedback.to_vec();
                all.push(feedback);
                Ok(Session {
                    feedback: all.into(),
                    ..self.clone()
                })
            }
            Action::ClearSelection => Ok(Session {
                selected: None,
                ..self.clone()
            }),
        }
    }
}
