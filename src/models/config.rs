//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_top_clients_limit() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Construction-time settings for the dashboard controller.
pub struct DashboardConfig {
    /// Number of entries kept in the top-client ranking.
    #[serde(default = "default_top_clients_limit")]
    pub top_clients_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_clients_limit: default_top_clients_limit(),
        }
    }
}
