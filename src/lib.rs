pub mod configuration;
pub mod entities;
pub mod routes;
pub mod startup;
pub mod telemetry;
