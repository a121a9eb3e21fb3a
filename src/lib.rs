//! Amazon search-results scraper served over HTTP.
//!
//! `GET /api/scrape` fetches one search page (directly or through ScraperAPI),
//! extracts the product cards and returns them as JSON. The ScraperAPI
//! account endpoints and a small dashboard round it out.

pub mod config;
pub mod credits;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod routes;
pub mod service;
pub mod target;
