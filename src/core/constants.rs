pub const SPREADSHEET_TITLE: &str = "Bill Mate";

pub const BILLS_TAB: &str = "Bills";
pub const PAYMENTS_TAB: &str = "Payments";
pub const SUMMARY_TAB: &str = "Summary";
pub const HOME_TAB: &str = "Home";
pub const ROOMMATES_TAB: &str = "Roommates";

pub const HOME_TABS: [&str; 5] = [BILLS_TAB, PAYMENTS_TAB, SUMMARY_TAB, HOME_TAB, ROOMMATES_TAB];

pub const BILLS_HEADER: [&str; 5] = ["Date", "PaidBy", "Description", "Amount", "SplitWith"];
pub const PAYMENTS_HEADER: [&str; 4] = ["Date", "PaidBy", "Amount", "Note"];
pub const SUMMARY_HEADER: [&str; 2] = ["Name", "Amount Owed ($)"];
pub const ROOMMATES_HEADER: [&str; 1] = ["Name"];
pub const MANAGER_NAME_LABEL: &str = "ManagerName";

pub const BILLS_RANGE: &str = "Bills!A:E";
pub const PAYMENTS_RANGE: &str = "Payments!A:D";
pub const ROOMMATES_RANGE: &str = "Roommates!A:A";
pub const MANAGER_NAME_CELL: &str = "Home!B1";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_TEXT_LENGTH: usize = 500;
pub const MAX_AMOUNT: f64 = 1_000_000.0;

pub const INVITE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const INVITE_CHUNK_LEN: usize = 4;

pub const HOME_CREATED: &str = "HOME_CREATED";
pub const BILL_ADDED: &str = "BILL_ADDED";
pub const PAYMENT_ADDED: &str = "PAYMENT_ADDED";
pub const SUMMARY_QUERIED: &str = "SUMMARY_QUERIED";
pub const INVITE_CREATED: &str = "INVITE_CREATED";
pub const HOME_JOINED: &str = "HOME_JOINED";
