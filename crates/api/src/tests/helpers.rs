// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use raffle_shop_domain::{
    NumberStatus, Order, OrderDraft, OrderId, OrderStatus, Raffle, RaffleNumber,
};

use crate::{ApiError, ApiResult, Clipboard, RaffleService, ServiceConfig};

pub const TEST_RAFFLE_EID: &str = "acff1926-703a-11ef-adb4-028b968b3f3d";
pub const TEST_CONTACT_PHONE: &str = "+55 (11) 99999-0000";
pub const TEST_PAYMENT_KEY: &str = "pix-key-123";

/// A raffle numbered `1..=count`, everything available except `taken`.
pub fn create_test_raffle(count: u32, taken: &[u32]) -> Raffle {
    Raffle {
        name: String::from("Charity Bike"),
        description: String::from("A brand new bike"),
        price: String::from("10.00"),
        total_numbers: count,
        status: String::from("active"),
        external_id: String::from(TEST_RAFFLE_EID),
        numbers: (1..=count)
            .map(|n| {
                let status: NumberStatus = if taken.contains(&n) {
                    NumberStatus::Sold
                } else {
                    NumberStatus::Available
                };
                RaffleNumber::new(u64::from(n), n, status, &format!("n-{n}"))
            })
            .collect(),
    }
}

pub fn create_test_order(id: u64, name: &str, status: OrderStatus, count: u32) -> Order {
    Order {
        id: OrderId::from(id),
        external_id: Some(format!("order-{id}")),
        customer_name: name.to_string(),
        customer_phone: None,
        status,
        order_date: Some(String::from("2024-09-12T10:00:00Z")),
        numbers: Vec::new(),
        numbers_count: Some(count),
    }
}

pub fn create_test_config() -> ServiceConfig {
    ServiceConfig::new("http://collaborator.test")
        .with_contact_phone(TEST_CONTACT_PHONE)
        .with_payment_key(TEST_PAYMENT_KEY)
        .with_notice_duration(Duration::from_millis(50))
}

pub fn service_failure() -> ApiError {
    ApiError::Status {
        status: 500,
        body: String::from("boom"),
    }
}

/// Calls the fake service received, in order.
#[derive(Debug, Default)]
pub struct RecordedCalls {
    pub created: Vec<OrderDraft>,
    pub approved: Vec<OrderId>,
    pub rejected: Vec<OrderId>,
}

/// In-memory collaborator.
#[derive(Debug, Default)]
pub struct FakeRaffleService {
    pub raffle: Option<Raffle>,
    pub orders: Vec<Order>,
    pub next_order_id: u64,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_actions: bool,
    pub calls: Arc<Mutex<RecordedCalls>>,
}

impl FakeRaffleService {
    pub fn with_raffle(raffle: Raffle) -> Self {
        Self {
            raffle: Some(raffle),
            next_order_id: 42,
            ..Self::default()
        }
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }
}

impl RaffleService for FakeRaffleService {
    async fn fetch_raffle(&self, raffle_eid: &str) -> ApiResult<Raffle> {
        self.raffle
            .clone()
            .filter(|r| r.external_id.eq_ignore_ascii_case(raffle_eid))
            .ok_or_else(|| ApiError::NotFound(String::from("Raffle not found")))
    }

    async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        if self.fail_list {
            return Err(service_failure());
        }
        Ok(self.orders.clone())
    }

    async fn create_order(&self, draft: &OrderDraft) -> ApiResult<OrderId> {
        self.calls.lock().unwrap().created.push(draft.clone());
        if self.fail_create {
            return Err(service_failure());
        }
        Ok(OrderId::from(self.next_order_id))
    }

    async fn approve_order(&self, order_id: &OrderId) -> ApiResult<()> {
        self.calls.lock().unwrap().approved.push(order_id.clone());
        if self.fail_actions {
            return Err(service_failure());
        }
        Ok(())
    }

    async fn reject_order(&self, order_id: &OrderId) -> ApiResult<()> {
        self.calls.lock().unwrap().rejected.push(order_id.clone());
        if self.fail_actions {
            return Err(service_failure());
        }
        Ok(())
    }
}

/// Clipboard that keeps what was copied.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub broken: bool,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> ApiResult<()> {
        if self.broken {
            return Err(ApiError::Clipboard(String::from("no terminal")));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
