//! Application state for the web layer.

use std::sync::Arc;

use crate::lookup::HomeTime;

/// Shared application state.
pub struct AppState<P> {
    /// Query builder and journey planner, wired together
    pub home: Arc<HomeTime<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(home: HomeTime<P>) -> Self {
        Self {
            home: Arc::new(home),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            home: Arc::clone(&self.home),
        }
    }
}
