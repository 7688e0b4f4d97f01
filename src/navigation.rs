//! Navigation on selection
//!
//! The search box only produces the selected package name; turning it into
//! a route and acting on it happens here.

use tokio::sync::mpsc;

use crate::search::SuggestionId;

/// Receives the identifier of a selected suggestion
pub trait Navigator: Send + 'static {
    fn navigate(&mut self, id: &SuggestionId);
}

/// Route of a package's detail page
pub fn detail_route(id: &SuggestionId) -> String {
    format!("/-/web/detail/{}", id)
}

/// Forwards detail routes to whoever owns the receiving end
#[derive(Debug, Clone)]
pub struct RouteNavigator {
    routes: mpsc::UnboundedSender<String>,
}

impl RouteNavigator {
    pub fn new(routes: mpsc::UnboundedSender<String>) -> Self {
        Self { routes }
    }
}

impl Navigator for RouteNavigator {
    fn navigate(&mut self, id: &SuggestionId) {
        let route = detail_route(id);
        log::debug!("Navigating to {}", route);
        // Receiver gone means the app is already shutting down
        let _ = self.routes.send(route);
    }
}
