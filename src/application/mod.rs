pub mod checkout;
pub mod tracking;
