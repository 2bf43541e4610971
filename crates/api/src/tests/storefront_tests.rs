// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use raffle_shop::{CheckoutPhase, LoadState, StoreEvent, StorefrontState};
use raffle_shop_domain::{NumberStatus, OrderId};
use tokio::sync::broadcast::error::TryRecvError;

use super::helpers::{
    FakeRaffleService, MemoryClipboard, RecordedCalls, TEST_PAYMENT_KEY, TEST_RAFFLE_EID,
    create_test_config, create_test_raffle,
};
use crate::{LOAD_FAILED_MESSAGE, PAYMENT_KEY_COPIED_MESSAGE, StorefrontSession};

fn open_session(service: FakeRaffleService) -> StorefrontSession<FakeRaffleService> {
    StorefrontSession::new(service, create_test_config(), TEST_RAFFLE_EID)
}

async fn loaded_session(taken: &[u32]) -> StorefrontSession<FakeRaffleService> {
    let session = open_session(FakeRaffleService::with_raffle(create_test_raffle(10, taken)));
    session.load().await.unwrap();
    session
}

#[tokio::test]
async fn test_load_populates_board() {
    let session = open_session(FakeRaffleService::with_raffle(create_test_raffle(10, &[3])));
    let mut rx = session.subscribe();

    session.load().await.unwrap();

    let state: StorefrontState = session.snapshot().await;
    assert_eq!(state.load, LoadState::Ready);
    assert_eq!(state.raffle.unwrap().numbers.len(), 10);
    assert!(state.selection.is_empty());
    assert_eq!(
        rx.try_recv().unwrap(),
        StoreEvent::RaffleLoaded {
            raffle_eid: String::from(TEST_RAFFLE_EID),
            available: 9,
            total: 10,
        }
    );
}

#[tokio::test]
async fn test_load_accepts_payload_with_normalized_eid() {
    let session = StorefrontSession::new(
        FakeRaffleService::with_raffle(create_test_raffle(10, &[3])),
        create_test_config(),
        &TEST_RAFFLE_EID.to_uppercase(),
    );

    session.load().await.unwrap();
    session.toggle(5).await.unwrap();

    let state: StorefrontState = session.snapshot().await;
    assert_eq!(state.load, LoadState::Ready);
    assert_eq!(state.raffle_eid, TEST_RAFFLE_EID.to_uppercase());
    assert!(state.selection.contains(5));
}

#[tokio::test]
async fn test_load_failure_shows_blocking_error() {
    let session = open_session(FakeRaffleService::default());

    let err = session.load().await.unwrap_err();

    assert!(err.is_network());
    let state: StorefrontState = session.snapshot().await;
    assert_eq!(state.load, LoadState::Failed(String::from(LOAD_FAILED_MESSAGE)));
    assert!(state.raffle.is_none());
    assert!(state.selection.is_empty());
}

#[tokio::test]
async fn test_toggle_selects_and_deselects() {
    let session = loaded_session(&[]).await;

    session.toggle(2).await.unwrap();
    session.toggle(5).await.unwrap();
    session.toggle(2).await.unwrap();

    assert_eq!(session.snapshot().await.selection.to_vec(), vec![5]);
}

#[tokio::test]
async fn test_toggle_taken_number_is_ignored() {
    let session = loaded_session(&[4]).await;
    let mut rx = session.subscribe();

    session.toggle(4).await.unwrap();

    assert!(session.snapshot().await.selection.is_empty());
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_toggle_unknown_number_is_validation_error() {
    let session = loaded_session(&[]).await;

    let err = session.toggle(99).await.unwrap_err();

    assert!(err.is_validation());
}

#[tokio::test]
async fn test_random_select_draws_distinct_available_numbers() {
    let session = loaded_session(&[1, 2, 3]).await;

    let numbers: Vec<u32> = session.random_select(4).await.unwrap();

    assert_eq!(numbers.len(), 4);
    assert!(numbers.iter().all(|n| (4..=10).contains(n)));
    assert_eq!(session.snapshot().await.selection.to_vec(), numbers);
}

#[tokio::test]
async fn test_random_select_out_of_range_keeps_selection() {
    let session = loaded_session(&[1, 2, 3]).await;
    session.toggle(5).await.unwrap();

    assert!(session.random_select(0).await.unwrap_err().is_validation());
    assert!(session.random_select(8).await.unwrap_err().is_validation());

    assert_eq!(session.snapshot().await.selection.to_vec(), vec![5]);
}

#[tokio::test]
async fn test_open_confirmation_requires_selection() {
    let session = loaded_session(&[]).await;

    let err = session.open_confirmation().await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(session.snapshot().await.phase, CheckoutPhase::Browsing);
}

#[tokio::test]
async fn test_cancel_returns_to_board_with_selection() {
    let session = loaded_session(&[]).await;
    session.toggle(7).await.unwrap();
    session.open_confirmation().await.unwrap();

    session.cancel().await.unwrap();

    let state: StorefrontState = session.snapshot().await;
    assert_eq!(state.phase, CheckoutPhase::Browsing);
    assert_eq!(state.selection.to_vec(), vec![7]);
}

#[tokio::test]
async fn test_successful_purchase_hands_off_with_numbers() {
    let service: FakeRaffleService = FakeRaffleService::with_raffle(create_test_raffle(10, &[]));
    let calls: Arc<Mutex<RecordedCalls>> = Arc::clone(&service.calls);
    let session = open_session(service);
    session.load().await.unwrap();
    session.toggle(5).await.unwrap();
    session.toggle(2).await.unwrap();
    session.open_confirmation().await.unwrap();

    let order_id: OrderId = session.submit("  Maria ", None).await.unwrap();

    assert_eq!(order_id, OrderId::from(42));
    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.created.len(), 1);
        assert_eq!(calls.created[0].customer_name, "Maria");
        assert_eq!(calls.created[0].customer_phone, None);
        assert_eq!(calls.created[0].numbers, vec![2, 5]);
        assert_eq!(calls.created[0].raffle_eid, TEST_RAFFLE_EID);
    }

    let state: StorefrontState = session.snapshot().await;
    assert!(state.is_success_shown());
    assert!(state.selection.is_empty());
    let raffle = state.raffle.unwrap();
    assert_eq!(raffle.find_number(2).unwrap().status, NumberStatus::Reserved);
    assert_eq!(raffle.find_number(5).unwrap().status, NumberStatus::Reserved);

    let link: String = session.dismiss_success().await.unwrap();
    assert!(link.starts_with("https://wa.me/5511999990000?text="));
    let message = urlencoding::decode(link.split_once("?text=").unwrap().1).unwrap();
    assert!(message.contains("#42"));
    assert!(message.contains("Charity Bike"));
    assert!(message.contains("2, 5"));
    assert_eq!(
        session.snapshot().await.phase,
        CheckoutPhase::HandoffSent {
            order_id: OrderId::from(42)
        }
    );
}

#[tokio::test]
async fn test_submission_failure_keeps_selection() {
    let mut service: FakeRaffleService = FakeRaffleService::with_raffle(create_test_raffle(10, &[]));
    service.fail_create = true;
    let session = open_session(service);
    session.load().await.unwrap();
    session.toggle(2).await.unwrap();
    session.toggle(5).await.unwrap();
    session.open_confirmation().await.unwrap();

    let err = session.submit("Maria", None).await.unwrap_err();

    assert!(err.is_network());
    let state: StorefrontState = session.snapshot().await;
    assert_eq!(state.selection.to_vec(), vec![2, 5]);
    assert!(state.submit_error().is_some());
    assert!(!state.is_success_shown());

    session.dismiss_error().await.unwrap();
    assert!(session.snapshot().await.submit_error().is_none());
}

#[tokio::test]
async fn test_submit_with_blank_name_never_calls_service() {
    let service: FakeRaffleService = FakeRaffleService::with_raffle(create_test_raffle(10, &[]));
    let calls: Arc<Mutex<RecordedCalls>> = Arc::clone(&service.calls);
    let session = open_session(service);
    session.load().await.unwrap();
    session.toggle(1).await.unwrap();
    session.open_confirmation().await.unwrap();

    let err = session.submit("   ", Some("555")).await.unwrap_err();

    assert!(err.is_validation());
    assert!(calls.lock().unwrap().created.is_empty());
    let state: StorefrontState = session.snapshot().await;
    assert!(state.submit_error().is_some());
    assert_eq!(state.selection.to_vec(), vec![1]);
}

#[tokio::test]
async fn test_submit_outside_confirmation_is_rejected() {
    let session = loaded_session(&[]).await;
    session.toggle(1).await.unwrap();

    let err = session.submit("Maria", None).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(session.snapshot().await.phase, CheckoutPhase::Browsing);
}

#[tokio::test]
async fn test_dismiss_success_requires_success_step() {
    let session = loaded_session(&[]).await;

    assert!(session.dismiss_success().await.unwrap_err().is_validation());
}

#[tokio::test]
async fn test_selection_events_are_published() {
    let session = loaded_session(&[]).await;
    let mut rx = session.subscribe();

    session.toggle(3).await.unwrap();
    session.open_confirmation().await.unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        StoreEvent::SelectionChanged { numbers: vec![3] }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        StoreEvent::ConfirmationOpened { numbers: vec![3] }
    );
}

#[tokio::test]
async fn test_copy_payment_key_shows_notice_then_clears() {
    let mut session = loaded_session(&[]).await;
    let mut clipboard: MemoryClipboard = MemoryClipboard::default();

    session.copy_payment_key(&mut clipboard).await.unwrap();

    assert_eq!(clipboard.contents.as_deref(), Some(TEST_PAYMENT_KEY));
    let notice = session.snapshot().await.notice.unwrap();
    assert_eq!(notice.message, PAYMENT_KEY_COPIED_MESSAGE);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(session.snapshot().await.notice.is_none());
}

#[tokio::test]
async fn test_clipboard_failure_shows_no_notice() {
    let mut session = loaded_session(&[]).await;
    let mut clipboard: MemoryClipboard = MemoryClipboard {
        broken: true,
        ..MemoryClipboard::default()
    };

    assert!(session.copy_payment_key(&mut clipboard).await.is_err());
    assert!(session.snapshot().await.notice.is_none());
}

#[tokio::test]
async fn test_dropping_session_cancels_notice_timer() {
    let mut session = loaded_session(&[]).await;
    let mut rx = session.subscribe();
    session
        .copy_payment_key(&mut MemoryClipboard::default())
        .await
        .unwrap();
    assert!(matches!(rx.try_recv(), Ok(StoreEvent::NoticeShown { .. })));

    drop(session);
    tokio::time::sleep(Duration::from_millis(250)).await;

    loop {
        match rx.try_recv() {
            Ok(StoreEvent::NoticeCleared) => panic!("timer fired after the session was dropped"),
            Ok(_) => {}
            Err(_) => break,
        }
    }
}

#[tokio::test]
async fn test_expire_notice_ignores_early_calls() {
    let mut session = StorefrontSession::new(
        FakeRaffleService::with_raffle(create_test_raffle(10, &[])),
        create_test_config().with_notice_duration(Duration::from_secs(30)),
        TEST_RAFFLE_EID,
    );
    session.load().await.unwrap();
    session
        .copy_payment_key(&mut MemoryClipboard::default())
        .await
        .unwrap();
    let expires_at = session.snapshot().await.notice.unwrap().expires_at;

    session
        .expire_notice(expires_at - time::Duration::seconds(1))
        .await
        .unwrap();
    assert!(session.snapshot().await.notice.is_some());

    session.expire_notice(expires_at).await.unwrap();
    assert!(session.snapshot().await.notice.is_none());
}
