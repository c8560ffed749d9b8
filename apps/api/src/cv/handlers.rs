//! Axum route handlers for the CV API and the rendered page.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cv::loader::CvVariant;
use crate::cv::models::CvData;
use crate::duration::{
    compute_group_aggregate_duration, group_by_employer, own_tenure, EmployerGroup,
};
use crate::errors::AppError;
use crate::render::render_page;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CvQuery {
    #[serde(default)]
    pub cv: CvVariant,
    /// Pins "today" for open-ended periods. Defaults to the current UTC date.
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct PositionView {
    pub title: String,
    pub period: String,
    pub duration: Option<String>,
    pub total_months: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct EmployerGroupView {
    pub employer: String,
    pub company_url: Option<String>,
    /// Present only for employers with two or more positions.
    pub aggregate_duration: Option<String>,
    pub positions: Vec<PositionView>,
}

#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub cv: &'static str,
    pub as_of: NaiveDate,
    pub groups: Vec<EmployerGroupView>,
}

#[derive(Debug, Deserialize)]
pub struct DurationRequest {
    pub period: String,
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DurationResponse {
    pub period: String,
    pub as_of: NaiveDate,
    /// `null` when the period cannot be parsed.
    pub duration: Option<String>,
    pub total_months: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn resolve_today(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}

fn select_cv(state: &AppState, variant: CvVariant) -> Result<&CvData, AppError> {
    state.cvs.get(variant).ok_or_else(|| {
        AppError::NotFound(format!(
            "CV variant '{}' is not configured",
            variant.as_str()
        ))
    })
}

fn group_view(group: &EmployerGroup<'_>, today: NaiveDate) -> EmployerGroupView {
    let positions = group
        .records
        .iter()
        .map(|record| {
            let tenure = own_tenure(&record.period, today);
            PositionView {
                title: record.title.clone(),
                period: record.period.clone(),
                duration: tenure.map(|t| t.label()),
                total_months: tenure.map(|t| t.total_months()),
            }
        })
        .collect();

    EmployerGroupView {
        employer: group.employer.to_string(),
        company_url: group.company_url().map(str::to_string),
        aggregate_duration: compute_group_aggregate_duration(&group.records, today),
        positions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cv
///
/// Returns the authored CV document as loaded at startup.
pub async fn handle_get_cv(
    State(state): State<AppState>,
    Query(query): Query<CvQuery>,
) -> Result<Json<CvData>, AppError> {
    let cv = select_cv(&state, query.cv)?;
    Ok(Json(cv.clone()))
}

/// GET /api/v1/cv/experience
///
/// Experience grouped by employer, with per-position and combined durations.
pub async fn handle_get_experience(
    State(state): State<AppState>,
    Query(query): Query<CvQuery>,
) -> Result<Json<ExperienceResponse>, AppError> {
    let cv = select_cv(&state, query.cv)?;
    let today = resolve_today(query.as_of);

    let groups = group_by_employer(&cv.experience)
        .iter()
        .map(|g| group_view(g, today))
        .collect();

    Ok(Json(ExperienceResponse {
        cv: query.cv.as_str(),
        as_of: today,
        groups,
    }))
}

/// POST /api/v1/durations
///
/// Computes the label for a single period string. An unparseable period is
/// not an error: the response carries `duration: null`.
pub async fn handle_compute_duration(
    Json(request): Json<DurationRequest>,
) -> Result<Json<DurationResponse>, AppError> {
    if request.period.trim().is_empty() {
        return Err(AppError::Validation("period cannot be empty".to_string()));
    }

    let today = resolve_today(request.as_of);
    let tenure = own_tenure(&request.period, today);

    Ok(Json(DurationResponse {
        duration: tenure.map(|t| t.label()),
        total_months: tenure.map(|t| t.total_months()),
        period: request.period,
        as_of: today,
    }))
}

/// GET /
///
/// Server-rendered CV page.
pub async fn handle_render_page(
    State(state): State<AppState>,
    Query(query): Query<CvQuery>,
) -> Result<Html<String>, AppError> {
    let cv = select_cv(&state, query.cv)?;
    let today = resolve_today(query.as_of);
    info!(cv = query.cv.as_str(), %today, "Rendering CV page");
    Ok(Html(render_page(cv, today)))
}
