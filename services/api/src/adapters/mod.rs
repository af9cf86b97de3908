pub mod db;
pub mod ledger;

pub use db::PgOpinionStore;
pub use ledger::{JsonFileLedger, JsonFilePeriodStore};
