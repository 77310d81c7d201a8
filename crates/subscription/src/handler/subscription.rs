use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::subscription::service::{
        command::DynSubscriptionCommandService, cost::DynSubscriptionCostService,
        query::DynSubscriptionQueryService,
    },
    domain::{
        requests::{
            CreateSubscriptionRequest, FindAllSubscriptions, TotalCostRequest,
            UpdateSubscriptionRequest,
        },
        responses::{ApiResponse, SubscriptionResponse, TotalCostResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

fn parse_id(raw: &str) -> Result<Uuid, AppErrorHttp> {
    Uuid::parse_str(raw).map_err(|_| AppErrorHttp::bad_request("Invalid ID"))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions",
    tag = "Subscription",
    params(FindAllSubscriptions),
    responses(
        (status = 200, description = "List of subscriptions", body = ApiResponse<Vec<SubscriptionResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_subscriptions(
    Extension(service): Extension<DynSubscriptionQueryService>,
    Query(params): Query<FindAllSubscriptions>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID (UUID)")),
    responses(
        (status = 200, description = "Subscription details", body = ApiResponse<SubscriptionResponse>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse)
    )
)]
pub async fn get_subscription(
    Extension(service): Extension<DynSubscriptionQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = "Subscription",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription created", body = ApiResponse<SubscriptionResponse>),
        (status = 400, description = "Malformed body, date or validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID (UUID)")),
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 200, description = "Subscription updated", body = ApiResponse<SubscriptionResponse>),
        (status = 400, description = "Malformed body, ID or date", body = ErrorResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse)
    )
)]
pub async fn update_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID (UUID)")),
    responses(
        (status = 204, description = "Subscription deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse)
    )
)]
pub async fn delete_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/subscriptions/total-cost",
    tag = "Subscription",
    request_body = TotalCostRequest,
    responses(
        (status = 200, description = "Total billed over the window", body = TotalCostResponse),
        (status = 400, description = "Malformed body or invalid month", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_total_cost(
    Extension(service): Extension<DynSubscriptionCostService>,
    SimpleValidatedJson(body): SimpleValidatedJson<TotalCostRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.total_cost(&body).await?;
    Ok(Json(response))
}

/// Mounts the subscription endpoints under `base`.
fn mount(router: OpenApiRouter, base: &str) -> OpenApiRouter {
    router
        .route(base, get(get_subscriptions).post(create_subscription))
        .route(&format!("{base}/total-cost"), post(get_total_cost))
        .route(
            &format!("{base}/{{id}}"),
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
}

pub fn subscription_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    // Unprefixed paths stay mounted for clients of the earlier service.
    let router = mount(OpenApiRouter::new(), "/api/subscriptions");

    mount(router, "/subscriptions")
        .layer(Extension(
            app_state.di_container.subscription_query.clone(),
        ))
        .layer(Extension(
            app_state.di_container.subscription_command.clone(),
        ))
        .layer(Extension(app_state.di_container.subscription_cost.clone()))
}
