pub mod orders;
pub mod payment;
