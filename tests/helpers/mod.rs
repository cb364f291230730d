#![allow(dead_code)]
pub mod test_db;

pub use test_db::*;

pub const RECIPIENT_ID: &str = "30e9a347-fbcb-448d-adf0-d92475b9073b";
pub const OTHER_RECIPIENT_ID: &str = "5307f9c0-1958-49ea-9ac7-297f7ee8191b";
