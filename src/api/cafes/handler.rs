//! Cafe API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Cafe, CafeCreate, cafe::parse_bool_param};
use crate::db::repository::cafe as cafe_repo;
use crate::utils::{AppError, AppResult};
use crate::web::pages;

/// JSON acknowledgment for write operations
///
/// ```json
/// {"response": {"success": "Successfully added the new cafe.", "id": 7}}
/// ```
#[derive(Debug, Serialize)]
pub struct Ack {
    response: AckBody,
}

#[derive(Debug, Serialize)]
struct AckBody {
    success: String,
    /// Newly assigned id, only present on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl Ack {
    fn new(message: impl Into<String>) -> Self {
        Self {
            response: AckBody {
                success: message.into(),
                id: None,
            },
        }
    }

    fn created(message: impl Into<String>, id: i64) -> Self {
        Self {
            response: AckBody {
                success: message.into(),
                id: Some(id),
            },
        }
    }
}

/// Random-pick response; the single record sits under the historical
/// plural key `cafes`
#[derive(Debug, Serialize)]
pub struct RandomCafe {
    cafes: Cafe,
}

/// GET / - HTML 列表页 (全部记录，按 id 升序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let cafes = cafe_repo::list(&state.pool).await?;
    Ok(Html(pages::render_index(&cafes)))
}

/// GET /random - 随机返回一条记录
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<RandomCafe>> {
    let cafes = cafe_repo::list(&state.pool).await?;
    let cafe = cafes
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::not_found("No cafes in the database yet"))?;
    Ok(Json(RandomCafe { cafes: cafe }))
}

/// GET /search/{cafe_id} - HTML 详情页
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
) -> AppResult<Html<String>> {
    let cafe = cafe_repo::get(&state.pool, cafe_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cafe {cafe_id} not found")))?;
    Ok(Html(pages::render_detail(&cafe)))
}

/// Query payload for POST /add
#[derive(Debug, Deserialize)]
pub struct AddCafeParams {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

fn require(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

impl AddCafeParams {
    /// Validate required fields and parse the boolean flags
    fn into_create(self) -> Result<CafeCreate, AppError> {
        let mut missing = Vec::new();
        let name = require("name", self.name, &mut missing);
        let map_url = require("map_url", self.map_url, &mut missing);
        let img_url = require("img_url", self.img_url, &mut missing);
        let location = require("loc", self.loc, &mut missing);
        let seats = require("seats", self.seats, &mut missing);
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let has_sockets =
            parse_bool_param("sockets", self.sockets.as_deref()).map_err(AppError::Validation)?;
        let has_toilet =
            parse_bool_param("toilet", self.toilet.as_deref()).map_err(AppError::Validation)?;
        let has_wifi =
            parse_bool_param("wifi", self.wifi.as_deref()).map_err(AppError::Validation)?;
        let can_take_calls =
            parse_bool_param("calls", self.calls.as_deref()).map_err(AppError::Validation)?;

        Ok(CafeCreate {
            name,
            map_url,
            img_url,
            location,
            seats,
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price: self.coffee_price.filter(|p| !p.is_empty()),
        })
    }
}

/// POST /add - 新增记录
pub async fn create(
    State(state): State<ServerState>,
    Query(params): Query<AddCafeParams>,
) -> AppResult<Json<Ack>> {
    let data = params.into_create()?;
    let cafe = cafe_repo::create(&state.pool, data).await?;
    tracing::info!(id = cafe.id, name = %cafe.name, "Cafe created");
    Ok(Json(Ack::created(
        "Successfully added the new cafe.",
        cafe.id,
    )))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

/// PATCH /update-price/{cafe_id} - 更新咖啡价格
pub async fn update_price(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> AppResult<Json<Ack>> {
    let new_price = params
        .new_price
        .ok_or_else(|| AppError::validation("Missing required query parameter: new_price"))?;

    let cafe = cafe_repo::update_price(&state.pool, cafe_id, &new_price).await?;
    tracing::info!(id = cafe.id, price = %new_price, "Cafe price updated");
    Ok(Json(Ack::new("Successfully updated the price.")))
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedParams {
    pub api_key: Option<String>,
}

/// DELETE /report-closed/{cafe_id} - 删除记录 (需要 api_key)
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
    Query(params): Query<ReportClosedParams>,
) -> AppResult<Json<Ack>> {
    // Key check comes first: a bad key must not leak whether the id exists
    if params.api_key.as_deref() != Some(state.config.api_key.as_str()) {
        tracing::warn!(cafe_id, "Rejected report-closed request: bad api key");
        return Err(AppError::forbidden(
            "Sorry, that's not allowed. Make sure you have the correct api_key.",
        ));
    }

    let deleted = cafe_repo::delete(&state.pool, cafe_id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Cafe {cafe_id} not found")));
    }

    tracing::info!(cafe_id, "Cafe deleted");
    Ok(Json(Ack::new("Successfully deleted the cafe record.")))
}
