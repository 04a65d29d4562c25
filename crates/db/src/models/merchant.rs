//! Merchandise listing model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ypsl_core::types::{DbId, Timestamp};

/// A merchandise item row from the `merchants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Merchant {
    pub id: DbId,
    /// Human-assigned unique identifier, e.g. `YPSL-TSHIRT-001`.
    pub merchant_id: String,
    pub merchant_name: String,
    pub description: Option<String>,
    /// Price in LKR.
    pub price: f64,
    /// Available sizes, empty for one-size items.
    pub sizes: Vec<String>,
    pub image_id: Option<DbId>,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMerchant {
    pub merchant_id: String,
    pub merchant_name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub image_id: Option<DbId>,
    /// Defaults to true.
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMerchant {
    pub merchant_id: Option<String>,
    pub merchant_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub sizes: Option<Vec<String>>,
    pub image_id: Option<DbId>,
    pub available: Option<bool>,
}
