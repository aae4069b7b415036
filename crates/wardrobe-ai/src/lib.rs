//! Rule-driven smart wardrobe: a trained outfit-combination catalog, pure
//! matching helpers, a scoring engine, per-user accounts and wardrobes over a
//! local key-value store, and a stylist that ranks outfit recommendations.

pub mod account;
pub mod config;
pub mod error;
pub mod intelligence;
pub mod stylist;
pub mod telemetry;
pub mod wardrobe;
