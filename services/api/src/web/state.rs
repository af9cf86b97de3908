//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use moviepulse_core::ports::{OpinionStore, SentimentClassifier};
use moviepulse_core::service::VotingService;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub opinions: Arc<dyn OpinionStore>,
    pub voting: VotingService,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub config: Arc<Config>,
}
