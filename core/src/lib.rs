//! Lottery analytics core: purchase simulation, prize tax, number
//! statistics and recommendations for the 6/45 game.

pub mod cache;
pub mod config;
pub mod draw;
pub mod error;
pub mod frequency;
pub mod health;
pub mod lucky;
pub mod recommend;
pub mod rng;
pub mod schedule;
pub mod simulation;
pub mod simulator;
pub mod stats;
pub mod tax;
pub mod ticket;
pub mod tier;
pub mod types;
pub mod validation;
