//! Work site model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a physical work location workers can be assigned to.
///
/// Sites are purely descriptive; attendance may reference a site
/// independent of the worker's default assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Unique identifier for the site.
    pub id: Uuid,
    /// The site name.
    pub name: String,
    /// Optional street address.
    pub address: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Whether the site is currently in use.
    pub is_active: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}
