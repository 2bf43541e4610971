// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_raffle;
use crate::{DomainError, NumberStatus, Order, OrderId, OrderStatus, Price, Raffle};

#[test]
fn test_number_status_parses_known_values() {
    assert_eq!(NumberStatus::from(String::from("available")), NumberStatus::Available);
    assert_eq!(NumberStatus::from(String::from("reserved")), NumberStatus::Reserved);
    assert_eq!(NumberStatus::from(String::from("sold")), NumberStatus::Sold);
}

#[test]
fn test_unknown_number_status_is_not_available() {
    let status: NumberStatus = NumberStatus::from(String::from("on_hold"));
    assert_eq!(status, NumberStatus::Other(String::from("on_hold")));
    assert!(!status.is_available());
    assert_eq!(status.to_string(), "on_hold");
}

#[test]
fn test_number_status_deserializes_from_wire_string() {
    let status: NumberStatus = serde_json::from_str("\"sold\"").unwrap();
    assert_eq!(status, NumberStatus::Sold);
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"sold\"");
}

#[test]
fn test_order_status_actionable_only_while_unsettled() {
    assert!(OrderStatus::Pending.is_actionable());
    assert!(OrderStatus::Other(String::from("waiting")).is_actionable());
    assert!(!OrderStatus::Approved.is_actionable());
    assert!(!OrderStatus::Paid.is_actionable());
    assert!(!OrderStatus::Rejected.is_actionable());
}

#[test]
fn test_order_status_string_round_trip() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Paid,
        OrderStatus::Rejected,
    ] {
        assert_eq!(OrderStatus::from(status.to_string()), status);
    }
}

#[test]
fn test_price_parses_decimal_strings() {
    assert_eq!("10.00".parse::<Price>().unwrap().cents(), 1000);
    assert_eq!("5".parse::<Price>().unwrap().cents(), 500);
    assert_eq!("2,50".parse::<Price>().unwrap().cents(), 250);
    assert_eq!("1.5".parse::<Price>().unwrap().cents(), 150);
    assert_eq!(" 3.07 ".parse::<Price>().unwrap().cents(), 307);
}

#[test]
fn test_price_rejects_malformed_strings() {
    for raw in ["", "abc", "-1.00", "1.234", ".50", "1.2.3"] {
        assert!(
            matches!(raw.parse::<Price>(), Err(DomainError::InvalidPrice(_))),
            "expected '{raw}' to be rejected"
        );
    }
}

#[test]
fn test_price_display_and_multiplication() {
    let price: Price = Price::from_cents(1050);
    assert_eq!(price.to_string(), "10.50");
    assert_eq!(price.times(3).unwrap().to_string(), "31.50");
    assert!(Price::from_cents(u64::MAX).times(2).is_none());
}

#[test]
fn test_raffle_available_numbers_skips_taken_numbers() {
    let mut raffle: Raffle = create_test_raffle(5);
    raffle.numbers[1].status = NumberStatus::Sold;
    raffle.numbers[3].status = NumberStatus::Reserved;

    assert_eq!(raffle.available_numbers(), vec![1, 3, 5]);
}

#[test]
fn test_raffle_count_mismatch() {
    let mut raffle: Raffle = create_test_raffle(10);
    assert_eq!(raffle.count_mismatch(), None);

    raffle.total_numbers = 12;
    assert_eq!(raffle.count_mismatch(), Some((10, 12)));
}

#[test]
fn test_mark_reserved_only_touches_given_numbers() {
    let mut raffle: Raffle = create_test_raffle(4);
    raffle.mark_reserved(&[2, 4]);

    assert_eq!(raffle.available_numbers(), vec![1, 3]);
    assert_eq!(raffle.find_number(2).unwrap().status, NumberStatus::Reserved);
}

#[test]
fn test_unit_price_absent_when_malformed() {
    let mut raffle: Raffle = create_test_raffle(1);
    assert_eq!(raffle.unit_price(), Some(Price::from_cents(1000)));

    raffle.price = String::from("free");
    assert_eq!(raffle.unit_price(), None);
}

#[test]
fn test_order_purchased_count_prefers_explicit_count() {
    let mut order: Order = Order {
        id: OrderId::from(1),
        external_id: None,
        customer_name: String::from("Ana"),
        customer_phone: None,
        status: OrderStatus::Pending,
        order_date: None,
        numbers: vec![1, 2, 3],
        numbers_count: None,
    };
    assert_eq!(order.purchased_count(), 3);

    order.numbers_count = Some(7);
    assert_eq!(order.purchased_count(), 7);
}

#[test]
fn test_order_id_is_trimmed() {
    assert_eq!(OrderId::new(" 42 ").value(), "42");
    assert_eq!(OrderId::from(42).to_string(), "42");
}
