pub mod magazines;
pub mod subscribers;
pub mod subscriptions;
