//! Background jobs run on `tokio-cron-scheduler`.

pub mod sitemap;
