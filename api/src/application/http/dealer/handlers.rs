pub mod create_dealer;
pub mod delete_dealer;
pub mod delete_dealers;
