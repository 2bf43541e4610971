// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire types exchanged with the collaborator service.
//!
//! These mirror the JSON payloads exactly and are converted into domain
//! types at the boundary. Loose spots in the payloads (numeric or string
//! identifiers, numeric or string prices) are absorbed here.

use raffle_shop_domain::{
    NumberStatus, Order, OrderDraft, OrderId, OrderStatus, Raffle, RaffleNumber,
};
use serde::{Deserialize, Serialize};

/// Phone value sent when the customer left the field empty.
pub const MISSING_PHONE_MARKER: &str = "null";

/// A JSON scalar that may arrive as either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseScalar {
    /// An unsigned integer.
    Integer(u64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
}

impl std::fmt::Display for LooseScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.2}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl LooseScalar {
    /// Formats the scalar as an identifier.
    ///
    /// Whole floats lose their fraction (`42.0` becomes `"42"`), unlike
    /// the two-decimal price form of `Display`.
    #[must_use]
    pub fn to_id_string(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// A raffle number as listed by `GET /raffles/{eid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleNumberResponse {
    /// Numeric primary key.
    pub id: u64,
    /// Display value.
    pub number: u32,
    /// Availability status.
    pub status: String,
    /// Stable identifier.
    #[serde(default)]
    pub external_id: String,
}

/// Response for `GET /raffles/{eid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleResponse {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price per number.
    pub price: LooseScalar,
    /// Declared number count.
    pub total_numbers: u32,
    /// Raffle status.
    #[serde(default)]
    pub status: String,
    /// Stable identifier.
    pub external_id: String,
    /// Every number of the raffle.
    #[serde(default)]
    pub numbers: Vec<RaffleNumberResponse>,
}

impl From<RaffleResponse> for Raffle {
    fn from(response: RaffleResponse) -> Self {
        Self {
            name: response.name,
            description: response.description,
            price: response.price.to_string(),
            total_numbers: response.total_numbers,
            status: response.status,
            external_id: response.external_id,
            numbers: response
                .numbers
                .into_iter()
                .map(|n| {
                    RaffleNumber::new(n.id, n.number, NumberStatus::from(n.status), &n.external_id)
                })
                .collect(),
        }
    }
}

/// A number attached to a listed order: either bare or wrapped in an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderNumberEntry {
    /// The bare display value.
    Plain(u32),
    /// An object carrying the display value.
    Entry {
        /// Display value.
        number: u32,
    },
}

impl OrderNumberEntry {
    /// Returns the display value.
    #[must_use]
    pub const fn number(&self) -> u32 {
        match self {
            Self::Plain(number) | Self::Entry { number } => *number,
        }
    }
}

/// One element of the `GET /orders` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Server-assigned identifier.
    pub id: LooseScalar,
    /// Stable identifier.
    #[serde(default)]
    pub external_id: Option<String>,
    /// The buyer's name.
    #[serde(default)]
    pub customer_name: String,
    /// The buyer's phone, possibly the `"null"` marker.
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// Order status.
    #[serde(default)]
    pub status: Option<String>,
    /// Order date as sent.
    #[serde(default)]
    pub order_date: Option<String>,
    /// Purchased numbers, when included.
    #[serde(default)]
    pub numbers: Vec<OrderNumberEntry>,
    /// Purchased number count, when included.
    #[serde(default)]
    pub numbers_count: Option<u32>,
}

impl From<OrderResponse> for Order {
    fn from(response: OrderResponse) -> Self {
        let customer_phone: Option<String> = response
            .customer_phone
            .filter(|p| !p.trim().is_empty() && p != MISSING_PHONE_MARKER);
        Self {
            id: OrderId::new(&response.id.to_id_string()),
            external_id: response.external_id,
            customer_name: response.customer_name,
            customer_phone,
            status: response
                .status
                .map_or(OrderStatus::Pending, OrderStatus::from),
            order_date: response.order_date,
            numbers: response
                .numbers
                .iter()
                .map(OrderNumberEntry::number)
                .collect(),
            numbers_count: response.numbers_count,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The buyer's name, trimmed.
    pub customer_name: String,
    /// The buyer's phone, or [`MISSING_PHONE_MARKER`].
    pub customer_phone: String,
    /// Selected numbers, ascending.
    pub numbers: Vec<u32>,
    /// The raffle external identifier.
    pub raffle_eid: String,
}

impl From<&OrderDraft> for CreateOrderRequest {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            customer_name: draft.customer_name.clone(),
            customer_phone: draft
                .customer_phone
                .clone()
                .unwrap_or_else(|| String::from(MISSING_PHONE_MARKER)),
            numbers: draft.numbers.clone(),
            raffle_eid: draft.raffle_eid.clone(),
        }
    }
}

/// Response for `POST /orders`. Only the identifier is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// Server-assigned identifier.
    pub id: LooseScalar,
}

impl CreateOrderResponse {
    /// Returns the identifier as a domain value.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        OrderId::new(&self.id.to_id_string())
    }
}
