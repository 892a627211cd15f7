use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// Client record fetched from the client-read collaborator.
///
/// Statistics input only; this core never mutates clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: Option<String>,
    /// Saved addresses, most recent first.
    pub addresses: Vec<String>,
}
