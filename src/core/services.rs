use crate::core::balance::BalanceEngine;
use crate::core::constants::{
    BILL_ADDED, DATE_FORMAT, HOME_CREATED, HOME_JOINED, INVITE_CREATED, MAX_AMOUNT, MAX_NAME_LENGTH,
    MAX_TEXT_LENGTH, PAYMENT_ADDED, SUMMARY_QUERIED,
};
use crate::core::errors::BillmateError;
use crate::core::format::{BalanceRow, balance_rows};
use crate::core::invites::generate_token;
use crate::core::rows::extract_spreadsheet_id;
use crate::core::models::{
    audit::AppLog,
    balance::RoommateBalance,
    bill::BillRecord,
    invite::Invite,
    payment::PaymentRecord,
    roommate::Roommate,
    session::{HomeContext, Session},
};
use crate::infrastructure::auth::AuthProvider;
use crate::infrastructure::invites::InviteStore;
use crate::infrastructure::ledger::LedgerStore;
use crate::infrastructure::logging::LoggingService;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

#[derive(Clone, Debug)]
pub struct ServiceSettings {
    pub invite_ttl_hours: i64,
    pub invite_max_uses: u32,
    pub currency_code: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            invite_ttl_hours: 72,
            invite_max_uses: 5,
            currency_code: "USD".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NewBill {
    /// `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
    /// Ignored when `paid_by_manager` is set.
    pub paid_by: Option<String>,
    #[serde(default)]
    pub paid_by_manager: bool,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub split_with: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NewPayment {
    pub date: Option<String>,
    pub paid_by: String,
    pub amount: f64,
    #[serde(default)]
    pub note: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct SummaryResponse {
    manager_name: String,
    currency_code: String,
    balances: Vec<BalanceRow>,
}

impl SummaryResponse {
    pub fn manager_name(&self) -> &str {
        &self.manager_name
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn balances(&self) -> &Vec<BalanceRow> {
        &self.balances
    }
}

pub struct BillmateService<L: LoggingService, S: LedgerStore, A: AuthProvider, I: InviteStore> {
    ledger: S,
    logging: L,
    auth: A,
    invites: I,
    settings: ServiceSettings,
}

impl<L: LoggingService, S: LedgerStore, A: AuthProvider, I: InviteStore> BillmateService<L, S, A, I> {
    pub fn new(ledger: S, logging: L, auth: A, invites: I, settings: ServiceSettings) -> Self {
        BillmateService {
            ledger,
            logging,
            auth,
            invites,
            settings,
        }
    }

    pub fn ledger(&self) -> &S {
        &self.ledger
    }

    pub fn invites(&self) -> &I {
        &self.invites
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), BillmateError> {
        if value.trim().is_empty() {
            return Err(BillmateError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        self.validate_optional_text(field, value, max_length)
    }

    fn validate_optional_text(&self, field: &str, value: &str, max_length: usize) -> Result<(), BillmateError> {
        if value.len() > max_length {
            return Err(BillmateError::invalid_input(
                field,
                &format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(BillmateError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64, allow_negative: bool) -> Result<(), BillmateError> {
        if !amount.is_finite() {
            return Err(BillmateError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be a finite number",
            ));
        }
        if amount < 0.0 && !allow_negative {
            return Err(BillmateError::invalid_input(
                field,
                "Invalid Amount",
                "Amount cannot be negative",
            ));
        }
        if amount.abs() > MAX_AMOUNT {
            return Err(BillmateError::invalid_input(
                field,
                "Amount Too Large",
                "Amount cannot exceed 1,000,000",
            ));
        }
        let cents = amount * 100.0;
        if (cents - cents.round()).abs() > 1e-6 {
            return Err(BillmateError::invalid_input(
                field,
                "Invalid Amount",
                "Amount cannot have more than 2 decimal places",
            ));
        }
        Ok(())
    }

    fn resolve_date(&self, date: Option<&str>) -> Result<String, BillmateError> {
        match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
                .map(|d| d.format(DATE_FORMAT).to_string())
                .map_err(|_| BillmateError::invalid_input("date", "Invalid Date", "Date must be YYYY-MM-DD")),
            None => Ok(Utc::now().date_naive().format(DATE_FORMAT).to_string()),
        }
    }

    async fn log(
        &self,
        spreadsheet_id: &str,
        action: &str,
        details: serde_json::Value,
        session: &Session,
    ) -> Result<(), BillmateError> {
        self.logging
            .log_action(spreadsheet_id, action, details, Some(&session.email))
            .await
    }

    // SESSIONS

    pub async fn sign_in(&self, email: &str, display_name: &str) -> Result<Session, BillmateError> {
        let session = self.auth.sign_in(email, display_name).await?;
        info!("Signed in {}", session.email);
        Ok(session)
    }

    pub async fn authenticate(&self, bearer_token: &str) -> Result<Session, BillmateError> {
        self.auth.authenticate(bearer_token).await
    }

    // HOMES

    pub async fn create_home(&self, session: &Session, manager_name: &str) -> Result<String, BillmateError> {
        let manager = manager_name.trim();
        if manager.is_empty() {
            warn!("{} tried to create a home without a manager name", session.email);
            return Err(BillmateError::EmptyManagerName);
        }
        self.validate_string_input("manager_name", manager, MAX_NAME_LENGTH)?;

        let spreadsheet_id = self.ledger.initialize_home(session, manager).await?;
        self.log(&spreadsheet_id, HOME_CREATED, json!({ "manager_name": manager }), session)
            .await?;
        info!("Home {} created by {}", spreadsheet_id, session.email);
        Ok(spreadsheet_id)
    }

    /// Opens an existing home from a pasted spreadsheet URL or raw id.
    pub async fn load_home(&self, session: &Session, spreadsheet: &str) -> Result<HomeContext, BillmateError> {
        let spreadsheet_id = extract_spreadsheet_id(spreadsheet).ok_or_else(|| {
            BillmateError::invalid_input("spreadsheet", "Invalid spreadsheet", "Spreadsheet URL or id is required")
        })?;
        let ctx = HomeContext::new(spreadsheet_id, session.clone());
        self.manager_name(&ctx).await?;
        debug!("{} loaded home {}", session.email, ctx.spreadsheet_id);
        Ok(ctx)
    }

    pub async fn manager_name(&self, ctx: &HomeContext) -> Result<String, BillmateError> {
        self.ledger
            .fetch_manager_name(ctx)
            .await?
            .ok_or_else(|| BillmateError::MissingManagerName(ctx.spreadsheet_id.clone()))
    }

    pub async fn roommates(&self, ctx: &HomeContext) -> Result<Vec<Roommate>, BillmateError> {
        let (manager, names) = futures::try_join!(self.manager_name(ctx), self.ledger.fetch_roommates(ctx))?;
        Ok(names
            .into_iter()
            .map(|name| Roommate {
                is_manager: name.to_lowercase() == manager.to_lowercase(),
                name,
            })
            .collect())
    }

    // LEDGER

    pub async fn bills(&self, ctx: &HomeContext) -> Result<Vec<BillRecord>, BillmateError> {
        self.ledger.fetch_bills(ctx).await
    }

    pub async fn payments(&self, ctx: &HomeContext) -> Result<Vec<PaymentRecord>, BillmateError> {
        self.ledger.fetch_payments(ctx).await
    }

    pub async fn add_bill(&self, ctx: &HomeContext, new_bill: NewBill) -> Result<BillRecord, BillmateError> {
        info!("Adding bill of {} to home {}", new_bill.amount, ctx.spreadsheet_id);
        self.validate_amount_input("amount", new_bill.amount, false)?;
        self.validate_optional_text("description", &new_bill.description, MAX_TEXT_LENGTH)?;
        self.validate_optional_text("split_with", &new_bill.split_with, MAX_TEXT_LENGTH)?;

        let paid_by = if new_bill.paid_by_manager {
            self.manager_name(ctx).await?
        } else {
            let paid_by = new_bill.paid_by.as_deref().unwrap_or_default().trim().to_string();
            self.validate_string_input("paid_by", &paid_by, MAX_NAME_LENGTH)?;
            paid_by
        };

        let bill = BillRecord {
            date: self.resolve_date(new_bill.date.as_deref())?,
            paid_by,
            description: new_bill.description,
            amount: new_bill.amount,
            split_with: new_bill.split_with,
        };
        self.ledger.append_bill(ctx, &bill).await?;
        debug!("Bill appended: {:?}", bill);

        self.log(
            &ctx.spreadsheet_id,
            BILL_ADDED,
            json!({
                "paid_by": bill.paid_by,
                "amount": bill.amount,
                "split_with": bill.split_with,
            }),
            &ctx.session,
        )
        .await?;
        Ok(bill)
    }

    pub async fn add_payment(&self, ctx: &HomeContext, new_payment: NewPayment) -> Result<PaymentRecord, BillmateError> {
        info!("Adding payment of {} to home {}", new_payment.amount, ctx.spreadsheet_id);
        let paid_by = new_payment.paid_by.trim().to_string();
        self.validate_string_input("paid_by", &paid_by, MAX_NAME_LENGTH)?;
        self.validate_amount_input("amount", new_payment.amount, true)?;
        self.validate_optional_text("note", &new_payment.note, MAX_TEXT_LENGTH)?;

        let payment = PaymentRecord {
            date: self.resolve_date(new_payment.date.as_deref())?,
            paid_by,
            amount: new_payment.amount,
            note: new_payment.note,
        };
        self.ledger.append_payment(ctx, &payment).await?;
        debug!("Payment appended: {:?}", payment);

        self.log(
            &ctx.spreadsheet_id,
            PAYMENT_ADDED,
            json!({
                "paid_by": payment.paid_by,
                "amount": payment.amount,
            }),
            &ctx.session,
        )
        .await?;
        Ok(payment)
    }

    // BALANCES

    async fn compute(&self, ctx: &HomeContext) -> Result<(String, Vec<RoommateBalance>), BillmateError> {
        let manager = self.manager_name(ctx).await?;
        let (bills, payments) = futures::try_join!(self.ledger.fetch_bills(ctx), self.ledger.fetch_payments(ctx))?;
        let balances = BalanceEngine::compute_balances(&bills, &payments, &manager);
        Ok((manager, balances))
    }

    /// Fresh balances for the home: bills and payments are fetched together,
    /// then handed to the engine in one go.
    pub async fn balances(&self, ctx: &HomeContext) -> Result<Vec<RoommateBalance>, BillmateError> {
        let (_, balances) = self.compute(ctx).await?;
        Ok(balances)
    }

    pub async fn summary(&self, ctx: &HomeContext) -> Result<SummaryResponse, BillmateError> {
        let (manager, balances) = self.compute(ctx).await?;

        self.log(
            &ctx.spreadsheet_id,
            SUMMARY_QUERIED,
            json!({ "roommates": balances.len() }),
            &ctx.session,
        )
        .await?;

        Ok(SummaryResponse {
            balances: balance_rows(&balances, &self.settings.currency_code),
            currency_code: self.settings.currency_code.clone(),
            manager_name: manager,
        })
    }

    // INVITES

    pub async fn create_invite(&self, ctx: &HomeContext) -> Result<Invite, BillmateError> {
        // Reading the manager cell proves the caller can reach this home.
        self.manager_name(ctx).await?;

        let now = Utc::now();
        let invite = Invite {
            token: generate_token(),
            spreadsheet_id: ctx.spreadsheet_id.clone(),
            created_by: ctx.session.email.clone(),
            created_at: now,
            expires_at: now + Duration::hours(self.settings.invite_ttl_hours),
            max_uses: self.settings.invite_max_uses,
            uses: 0,
            active: true,
        };
        self.invites.save_invite(invite.clone()).await?;

        self.log(
            &ctx.spreadsheet_id,
            INVITE_CREATED,
            json!({ "expires_at": invite.expires_at }),
            &ctx.session,
        )
        .await?;
        info!("Invite created for home {}", ctx.spreadsheet_id);
        Ok(invite)
    }

    /// Redeems an invite token: grants the caller access to the home and lists
    /// them as a roommate under `roommate_name` (or their display name).
    pub async fn join_home(
        &self,
        session: &Session,
        token: &str,
        roommate_name: Option<&str>,
    ) -> Result<String, BillmateError> {
        info!("{} redeeming an invite", session.email);
        let name = roommate_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(session.display_name.trim())
            .to_string();
        // Nothing is spent or shared until the name is known to be usable.
        self.validate_string_input("roommate_name", &name, MAX_NAME_LENGTH)?;

        let spreadsheet_id = self.invites.consume_invite(token, Utc::now()).await?;
        self.ledger.share_with(&spreadsheet_id, &session.email).await?;

        let ctx = HomeContext::new(spreadsheet_id.clone(), session.clone());
        let existing = self.ledger.fetch_roommates(&ctx).await?;
        if existing.iter().any(|n| n.to_lowercase() == name.to_lowercase()) {
            debug!("{} already listed in home {}", name, spreadsheet_id);
        } else {
            self.ledger.add_roommate(&ctx, &name).await?;
        }

        self.log(&spreadsheet_id, HOME_JOINED, json!({ "roommate_name": name }), session)
            .await?;
        Ok(spreadsheet_id)
    }

    /// Activity for one home, oldest first. Only collaborators on the home may read it.
    pub async fn home_logs(&self, ctx: &HomeContext) -> Result<Vec<AppLog>, BillmateError> {
        self.ledger.fetch_manager_name(ctx).await?;
        self.logging.home_logs(&ctx.spreadsheet_id).await
    }
}
