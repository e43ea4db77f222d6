//! Content Service - CRUD over named HTML documents in Postgres.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
