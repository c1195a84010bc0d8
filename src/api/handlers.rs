use crate::{
    api::models::*,
    core::{
        errors::BillmateError,
        models::{
            audit::AppLog,
            bill::BillRecord,
            invite::Invite,
            payment::PaymentRecord,
            roommate::Roommate,
            session::{HomeContext, Session},
        },
        services::{BillmateService, NewBill, NewPayment, SummaryResponse},
    },
    infrastructure::{
        auth::jwt::JwtService, invites::in_memory::InMemoryInvites, ledger::sheet::SheetLedger,
        logging::in_memory::InMemoryLogging, sheets::in_memory::InMemorySpreadsheets,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;
use std::sync::Arc;

pub type AppService = BillmateService<InMemoryLogging, SheetLedger<InMemorySpreadsheets>, JwtService, InMemoryInvites>;

// Middleware to validate the bearer token and attach the caller's session
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| BillmateError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| BillmateError::Unauthorized("Invalid Authorization header".to_string()))?;

    let session = service.authenticate(token).await?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

pub fn api_routes(service: Arc<AppService>) -> Router {
    let protected_routes = Router::new()
        .route("/homes", axum::routing::post(create_home))
        .route("/homes/load", axum::routing::post(load_home))
        .route("/homes/{spreadsheet_id}/manager", axum::routing::get(get_manager))
        .route("/homes/{spreadsheet_id}/roommates", axum::routing::get(get_roommates))
        .route(
            "/homes/{spreadsheet_id}/bills",
            axum::routing::get(list_bills).post(add_bill),
        )
        .route(
            "/homes/{spreadsheet_id}/payments",
            axum::routing::get(list_payments).post(add_payment),
        )
        .route("/homes/{spreadsheet_id}/summary", axum::routing::get(get_summary))
        .route("/homes/{spreadsheet_id}/invites", axum::routing::post(create_invite))
        .route("/invites/redeem", axum::routing::post(redeem_invite))
        .route("/homes/{spreadsheet_id}/logs", axum::routing::get(get_home_logs))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/login", axum::routing::post(login)) // Unprotected
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Invalid email", body = ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = service
        .sign_in(&req.email, req.display_name.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(LoginResponse {
        token: session.access_token,
        email: session.email,
        display_name: session.display_name,
    }))
}

#[utoipa::path(
    post,
    path = "/api/homes",
    request_body = CreateHomeRequest,
    responses(
        (status = 201, description = "Home created", body = HomeResponse),
        (status = 400, description = "Invalid manager name", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
pub(crate) async fn create_home(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Json(req): Json<CreateHomeRequest>,
) -> Result<(StatusCode, Json<HomeResponse>), ApiError> {
    let spreadsheet_id = service.create_home(&session, &req.manager_name).await?;
    Ok((StatusCode::CREATED, Json(HomeResponse { spreadsheet_id })))
}

#[utoipa::path(
    post,
    path = "/api/homes/load",
    request_body = LoadHomeRequest,
    responses(
        (status = 200, description = "Home found", body = HomeResponse),
        (status = 403, description = "No access", body = ErrorResponse),
        (status = 404, description = "Spreadsheet not found", body = ErrorResponse)
    )
)]
pub(crate) async fn load_home(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Json(req): Json<LoadHomeRequest>,
) -> Result<Json<HomeResponse>, ApiError> {
    let ctx = service.load_home(&session, &req.spreadsheet).await?;
    Ok(Json(HomeResponse {
        spreadsheet_id: ctx.spreadsheet_id,
    }))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/manager",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Manager name", body = ManagerResponse),
        (status = 409, description = "Home has no manager name", body = ErrorResponse)
    )
)]
pub(crate) async fn get_manager(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<ManagerResponse>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    let manager_name = service.manager_name(&ctx).await?;
    Ok(Json(ManagerResponse { manager_name }))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/roommates",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Roommates, manager flagged", body = Vec<Roommate>)
    )
)]
pub(crate) async fn get_roommates(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<Vec<Roommate>>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    Ok(Json(service.roommates(&ctx).await?))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/bills",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Bills, newest first", body = Vec<BillRecord>)
    )
)]
pub(crate) async fn list_bills(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<Vec<BillRecord>>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    Ok(Json(service.bills(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/homes/{spreadsheet_id}/bills",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    request_body = NewBill,
    responses(
        (status = 201, description = "Bill recorded", body = BillRecord),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub(crate) async fn add_bill(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
    Json(req): Json<NewBill>,
) -> Result<(StatusCode, Json<BillRecord>), ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    let bill = service.add_bill(&ctx, req).await?;
    Ok((StatusCode::CREATED, Json(bill)))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/payments",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Payments, newest first", body = Vec<PaymentRecord>)
    )
)]
pub(crate) async fn list_payments(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<Vec<PaymentRecord>>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    Ok(Json(service.payments(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/homes/{spreadsheet_id}/payments",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    request_body = NewPayment,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentRecord),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub(crate) async fn add_payment(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
    Json(req): Json<NewPayment>,
) -> Result<(StatusCode, Json<PaymentRecord>), ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    let payment = service.add_payment(&ctx, req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/summary",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Balances owed to the manager, largest first", body = SummaryResponse),
        (status = 409, description = "Home has no manager name", body = ErrorResponse)
    )
)]
pub(crate) async fn get_summary(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    Ok(Json(service.summary(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/homes/{spreadsheet_id}/invites",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 201, description = "Invite token issued", body = Invite),
        (status = 403, description = "No access", body = ErrorResponse)
    )
)]
pub(crate) async fn create_invite(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<(StatusCode, Json<Invite>), ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    let invite = service.create_invite(&ctx).await?;
    Ok((StatusCode::CREATED, Json(invite)))
}

#[utoipa::path(
    post,
    path = "/api/invites/redeem",
    request_body = RedeemInviteRequest,
    responses(
        (status = 200, description = "Joined home", body = HomeResponse),
        (status = 404, description = "Invite not found", body = ErrorResponse),
        (status = 410, description = "Invite expired", body = ErrorResponse),
        (status = 429, description = "Invite used up", body = ErrorResponse)
    )
)]
pub(crate) async fn redeem_invite(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Json(req): Json<RedeemInviteRequest>,
) -> Result<Json<HomeResponse>, ApiError> {
    let spreadsheet_id = service
        .join_home(&session, &req.token, req.roommate_name.as_deref())
        .await?;
    Ok(Json(HomeResponse { spreadsheet_id }))
}

#[utoipa::path(
    get,
    path = "/api/homes/{spreadsheet_id}/logs",
    params(("spreadsheet_id" = String, Path, description = "Home spreadsheet id")),
    responses(
        (status = 200, description = "Activity log for the home, oldest first", body = Vec<AppLog>),
        (status = 403, description = "No access", body = ErrorResponse)
    )
)]
pub(crate) async fn get_home_logs(
    State(service): State<Arc<AppService>>,
    Extension(session): Extension<Session>,
    Path(spreadsheet_id): Path<String>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let ctx = HomeContext::new(spreadsheet_id, session);
    Ok(Json(service.home_logs(&ctx).await?))
}
