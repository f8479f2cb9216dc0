use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `widgets` table. JSON field names match the column names exactly;
/// extra fields are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(deny_unknown_fields)]
pub struct Widget {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub gears: i64,
    pub sprockets: i64,
}

/// Row of the `gadgets` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(deny_unknown_fields)]
pub struct Gadget {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub cylinders: i64,
}

impl Widget {
    pub fn new(
        id: i64,
        description: impl Into<String>,
        price: f64,
        gears: i64,
        sprockets: i64,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            price,
            gears,
            sprockets,
        }
    }
}

impl Gadget {
    pub fn new(id: i64, description: impl Into<String>, price: f64, cylinders: i64) -> Self {
        Self {
            id,
            description: description.into(),
            price,
            cylinders,
        }
    }
}
