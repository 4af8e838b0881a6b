pub mod balances;
pub mod setup;
pub mod sum;
pub mod swap;
pub mod ui;
