//! Dealer endpoints. Reads and updates use the generic handlers; creation and
//! every deletion keep the remote geofence in step with the row.

pub mod handlers;
pub mod router;
