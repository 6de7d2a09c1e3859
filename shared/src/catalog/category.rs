//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL path segment, e.g. "pricepy-dlya-lodok"
    pub slug: String,
    #[serde(default)]
    pub display_order: i32,
}
