pub mod check_in;
pub mod check_out;
