// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Availability state of a single raffle number.
///
/// Only `Available` numbers can be selected. Every other state, including
/// statuses this client does not recognize, is treated as taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum NumberStatus {
    /// Free to be selected and purchased.
    #[default]
    Available,
    /// Held by a submitted order that has not been settled.
    Reserved,
    /// Purchased.
    Sold,
    /// A status string this client does not know about.
    Other(String),
}

impl NumberStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether a number in this state may be selected.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<String> for NumberStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Self::Available,
            "reserved" => Self::Reserved,
            "sold" => Self::Sold,
            _ => Self::Other(value),
        }
    }
}

impl From<NumberStatus> for String {
    fn from(value: NumberStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for NumberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One purchasable unit of a raffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleNumber {
    /// The collaborator's numeric primary key.
    pub id: u64,
    /// The number shown to customers.
    pub number: u32,
    /// Current availability.
    pub status: NumberStatus,
    /// Stable service-assigned identifier.
    pub external_id: String,
}

impl RaffleNumber {
    /// Creates a new `RaffleNumber`.
    #[must_use]
    pub fn new(id: u64, number: u32, status: NumberStatus, external_id: &str) -> Self {
        Self {
            id,
            number,
            status,
            external_id: external_id.to_string(),
        }
    }
}

/// Price per number, held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Creates a price from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Returns the price in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Returns the price of `quantity` numbers, or `None` on overflow.
    #[must_use]
    pub fn times(&self, quantity: usize) -> Option<Self> {
        let quantity: u64 = u64::try_from(quantity).ok()?;
        self.cents.checked_mul(quantity).map(Self::from_cents)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses a decimal price such as `"10.00"`, `"5"` or `"2,50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPrice(s.to_string());
        let trimmed: &str = s.trim();
        let (whole, fraction) = match trimmed.split_once(['.', ',']) {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty()
            || fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A numbered pool of purchasable entries tied to a prize drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raffle {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Price per number exactly as the collaborator sent it.
    pub price: String,
    /// Declared number count.
    pub total_numbers: u32,
    /// Raffle status as sent by the collaborator.
    pub status: String,
    /// Stable service-assigned identifier used in URLs and orders.
    pub external_id: String,
    /// Every number of the raffle, in display order.
    pub numbers: Vec<RaffleNumber>,
}

impl Raffle {
    /// Looks up a number by its display value.
    #[must_use]
    pub fn find_number(&self, number: u32) -> Option<&RaffleNumber> {
        self.numbers.iter().find(|n| n.number == number)
    }

    /// Returns the display values of every number currently available.
    #[must_use]
    pub fn available_numbers(&self) -> Vec<u32> {
        self.numbers
            .iter()
            .filter(|n| n.status.is_available())
            .map(|n| n.number)
            .collect()
    }

    /// Returns the parsed price per number, if the raw price is well formed.
    #[must_use]
    pub fn unit_price(&self) -> Option<Price> {
        self.price.parse().ok()
    }

    /// Reports `(numbers.len(), total_numbers)` when the two disagree.
    #[must_use]
    pub fn count_mismatch(&self) -> Option<(usize, u32)> {
        let declared: usize = usize::try_from(self.total_numbers).ok()?;
        (self.numbers.len() != declared).then_some((self.numbers.len(), self.total_numbers))
    }

    /// Marks the given numbers as reserved.
    ///
    /// Local reflection of a successful order only; nothing is persisted.
    pub fn mark_reserved(&mut self, numbers: &[u32]) {
        for entry in &mut self.numbers {
            if numbers.contains(&entry.number) {
                entry.status = NumberStatus::Reserved;
            }
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Submitted, awaiting an administrator.
    #[default]
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Payment confirmed. This is what the approve action produces.
    Paid,
    /// Rejected by an administrator.
    Rejected,
    /// A status string this client does not know about.
    Other(String),
}

impl OrderStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Paid => "paid",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether an administrator may still approve or reject the order.
    ///
    /// Settled orders (`Approved`, `Paid`, `Rejected`) are final.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        matches!(self, Self::Pending | Self::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "paid" => Self::Paid,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new `OrderId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order as listed by the collaborator service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identifier.
    pub id: OrderId,
    /// Stable service-assigned identifier.
    pub external_id: Option<String>,
    /// The buyer's name.
    pub customer_name: String,
    /// The buyer's phone, if one was given.
    pub customer_phone: Option<String>,
    /// Current status.
    pub status: OrderStatus,
    /// Order date exactly as the collaborator sent it.
    pub order_date: Option<String>,
    /// The purchased numbers, when the listing includes them.
    pub numbers: Vec<u32>,
    /// The purchased number count, when the listing includes it.
    pub numbers_count: Option<u32>,
}

impl Order {
    /// Returns how many numbers this order purchased.
    ///
    /// Prefers the explicit count and falls back to the number list.
    #[must_use]
    pub fn purchased_count(&self) -> u64 {
        self.numbers_count.map_or_else(
            || u64::try_from(self.numbers.len()).unwrap_or(u64::MAX),
            u64::from,
        )
    }
}

/// A purchase intent built from the current selection at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// The buyer's name, trimmed.
    pub customer_name: String,
    /// The buyer's phone, `None` when not given.
    pub customer_phone: Option<String>,
    /// The selected numbers in ascending order.
    pub numbers: Vec<u32>,
    /// The raffle external identifier.
    pub raffle_eid: String,
}
