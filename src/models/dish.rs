//! Dish transfer shapes.
//!
//! A dish and its flavors live in separate tables but travel over the wire as
//! one [`DishDto`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde_id;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(default, with = "serde_id::option")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(with = "serde_id")]
    pub category_id: i64,
    /// Price in cents.
    pub price: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
    /// 0 off sale, 1 on sale.
    #[serde(default = "on_sale")]
    pub status: i32,
    #[serde(default)]
    pub sort: i32,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_id::option")]
    pub create_user: Option<i64>,
    #[serde(default, with = "serde_id::option")]
    pub update_user: Option<i64>,
}

fn on_sale() -> i32 {
    1
}

/// A named flavor option, e.g. `{"name": "spiciness", "value": "[\"mild\",\"hot\"]"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishFlavor {
    #[serde(default, with = "serde_id::option")]
    pub id: Option<i64>,
    #[serde(default, with = "serde_id::option")]
    pub dish_id: Option<i64>,
    pub name: String,
    pub value: String,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_id::option")]
    pub create_user: Option<i64>,
    #[serde(default, with = "serde_id::option")]
    pub update_user: Option<i64>,
    #[serde(default)]
    pub is_deleted: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    #[serde(flatten)]
    pub dish: Dish,
    #[serde(default)]
    pub flavors: Vec<DishFlavor>,
    pub category_name: Option<String>,
    pub copies: Option<i32>,
}

impl DishDto {
    /// Split into the rows persisted separately. Flavors are pointed at the
    /// dish id once the dish has one.
    pub fn into_parts(self) -> (Dish, Vec<DishFlavor>) {
        let dish_id = self.dish.id;
        let flavors = self
            .flavors
            .into_iter()
            .map(|flavor| DishFlavor {
                dish_id: dish_id.or(flavor.dish_id),
                ..flavor
            })
            .collect();
        (self.dish, flavors)
    }
}
