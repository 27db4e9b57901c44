pub mod radar_client;

pub use radar_client::{GeofenceProvider, RadarGeofenceClient};
