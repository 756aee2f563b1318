//! Terminal search table for the catalog.
//!
//! [`view::SearchTableView`] holds the view state, [`controller::SearchController`]
//! drives debounced fetches against a [`client::TitleSource`], and
//! [`ui`] renders the state with ratatui.

pub mod app;
pub mod client;
pub mod columns;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod ui;
pub mod view;
