pub mod status;
pub mod suggestion;
