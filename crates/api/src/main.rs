use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clickwise_core::analysis::{chart_rows, platform_share};
use clickwise_core::domain::{
    Campaign, CampaignAnalysis, CampaignChartRow, DashboardData, Feedback, FeedbackDraft,
    NewCampaign, PlatformShare,
};
use clickwise_core::error::{NotFoundError, ValidationError};
use clickwise_core::session::Action;
use clickwise_core::storage::CampaignStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = clickwise_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let session = settings.initial_session();
    tracing::info!(
        campaigns_len = session.campaigns.len(),
        seeded = settings.seed_sample_campaigns,
        "session initialized"
    );

    let state = AppState {
        store: Arc::new(CampaignStore::new(session)),
    };

    let app = router(state);

    let port = settings.require_port()?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/campaigns/:id/analysis", get(analyze_campaign))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/charts", get(get_dashboard_charts))
        .route("/feedback", axum::routing::post(submit_feedback))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    store: Arc<CampaignStore>,
}

#[derive(Debug)]
struct ApiError(anyhow::Error);

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<&'static str>,
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = if let Some(v) = self.0.downcast_ref::<ValidationError>() {
            (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: v.message.to_string(),
                    fields: v.fields.clone(),
                },
            )
        } else if let Some(nf) = self.0.downcast_ref::<NotFoundError>() {
            (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    error: nf.to_string(),
                    fields: Vec::new(),
                },
            )
        } else {
            sentry_anyhow::capture_anyhow(&self.0);
            tracing::error!(error = %self.0, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "internal error".to_string(),
                    fields: Vec::new(),
                },
            )
        };
        (status, Json(body)).into_response()
    }
}

async fn list_campaigns(State(state): State<AppState>) -> Result<Json<Vec<Campaign>>, ApiError> {
    let session = state.store.snapshot()?;
    Ok(Json(session.campaigns.to_vec()))
}

async fn create_campaign(
    State(state): State<AppState>,
    Json(form): Json<NewCampaign>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    let campaign = form.into_campaign()?;
    state
        .store
        .dispatch(Action::AddCampaign(campaign.clone()))?;

    tracing::info!(campaign_id = %campaign.id, platform = %campaign.platform, "campaign added");
    Ok((StatusCode::CREATED, Json(campaign)))
}

async fn analyze_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<CampaignAnalysis>, ApiError> {
    let session = state.store.dispatch(Action::Analyze { campaign_id })?;
    let analysis = session
        .selected
        .clone()
        .ok_or_else(|| anyhow::anyhow!("analysis missing after dispatch"))?;

    tracing::info!(
        campaign_id = %analysis.campaign_id,
        recommendations_len = analysis.recommendations.len(),
        "recommendations generated"
    );
    Ok(Json(analysis))
}

async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardData>, ApiError> {
    Ok(Json(state.store.snapshot()?.dashboard))
}

#[derive(Debug, Serialize)]
struct DashboardCharts {
    campaigns: Vec<CampaignChartRow>,
    platforms: Vec<PlatformShare>,
}

async fn get_dashboard_charts(
    State(state): State<AppState>,
) -> Result<Json<DashboardCharts>, ApiError> {
    let session = state.store.snapshot()?;
    Ok(Json(DashboardCharts {
        campaigns: chart_rows(&session.campaigns),
        platforms: platform_share(&session.dashboard),
    }))
}

async fn submit_feedback(
    State(state): State<AppState>,
    Json(draft): Json<FeedbackDraft>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    let feedback = draft.validate_and_into_feedback(chrono::Utc::now())?;
    state
        .store
        .dispatch(Action::SubmitFeedback(feedback.clone()))?;

    tracing::info!(
        feedback_id = %feedback.id,
        rating = feedback.rating,
        category = ?feedback.category,
        "feedback received"
    );
    Ok((StatusCode::CREATED, Json(feedback)))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &clickwise_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clickwise_core::domain::Platform;
    use clickwise_core::session::Session;
    use serde_json::json;

    fn state() -> AppState {
        AppState {
            store: Arc::new(CampaignStore::new(Session::seeded())),
        }
    }

    fn form() -> NewCampaign {
        serde_json::from_value(json!({
            "name": "Natal",
            "platform": "instagram",
            "budget": 2000.0,
            "spent": 100.0,
            "clicks": 10,
            "impressions": 5000,
            "target_audience": "Famílias",
            "start_date": "2024-12-01",
            "end_date": "2024-12-25",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn lists_seeded_campaigns() {
        let Json(campaigns) = list_campaigns(State(state())).await.unwrap();
        assert_eq!(campaigns.len(), 2);
    }

    #[tokio::test]
    async fn create_then_dashboard_reflects_it() {
        let st = state();
        let (status, Json(created)) = create_campaign(State(st.clone()), Json(form()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.platform, Platform::Instagram);

        let Json(dashboard) = get_dashboard(State(st.clone())).await.unwrap();
        assert_eq!(dashboard.total_spent, 6100.0);
        assert_eq!(dashboard.campaigns_by_platform.instagram, 1);

        let Json(charts) = get_dashboard_charts(State(st)).await.unwrap();
        assert_eq!(charts.campaigns.len(), 3);
        assert_eq!(charts.platforms.len(), 3);
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_bad_request() {
        let err = create_campaign(State(state()), Json(NewCampaign::default()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn analysis_of_sample_campaign() {
        let Json(analysis) = analyze_campaign(State(state()), Path("1".to_string()))
            .await
            .unwrap();
        let ids: Vec<_> = analysis.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1-cpc", "1-budget", "1-audience"]);
        assert_eq!(analysis.metrics.cpm, 71.11);
    }

    #[tokio::test]
    async fn analysis_of_unknown_campaign_is_not_found() {
        let err = analyze_campaign(State(state()), Path("404".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn feedback_is_validated_and_kept() {
        let st = state();
        let draft = FeedbackDraft {
            comment: Some("Útil".to_string()),
            rating: Some(4),
            ..Default::default()
        };
        let (status, Json(feedback)) = submit_feedback(State(st.clone()), Json(draft))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(feedback.rating, 4);
        assert_eq!(st.store.snapshot().unwrap().feedback.len(), 1);

        let err = submit_feedback(State(st), Json(FeedbackDraft::default()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
