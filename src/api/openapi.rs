use utoipa::OpenApi;

use crate::{
    api::models::{
        CreateHomeRequest, ErrorResponse, HomeResponse, LoadHomeRequest, LoginRequest, LoginResponse,
        ManagerResponse, RedeemInviteRequest,
    },
    core::{
        format::BalanceRow,
        models::{
            audit::AppLog, balance::BalanceStatus, bill::BillRecord, invite::Invite, payment::PaymentRecord,
            roommate::Roommate,
        },
        services::{NewBill, NewPayment, SummaryResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::login,
        super::handlers::create_home,
        super::handlers::load_home,
        super::handlers::get_manager,
        super::handlers::get_roommates,
        super::handlers::list_bills,
        super::handlers::add_bill,
        super::handlers::list_payments,
        super::handlers::add_payment,
        super::handlers::get_summary,
        super::handlers::create_invite,
        super::handlers::redeem_invite,
        super::handlers::get_home_logs
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        CreateHomeRequest,
        LoadHomeRequest,
        HomeResponse,
        ManagerResponse,
        RedeemInviteRequest,
        ErrorResponse,
        NewBill,
        NewPayment,
        BillRecord,
        PaymentRecord,
        Roommate,
        Invite,
        AppLog,
        BalanceRow,
        BalanceStatus,
        SummaryResponse
    )),
    info(
        title = "Bill Mate API",
        description = "Household bills, payments and balances owed to the house manager",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
