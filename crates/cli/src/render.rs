// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of each screen.

use raffle_shop::{AdminState, StorefrontState};
use raffle_shop_domain::{Order, Raffle, RankingEntry};

/// Numbers per board row.
const BOARD_COLUMNS: usize = 10;

/// Joins screen lines, each terminated by a newline.
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Renders the raffle header and its number board.
///
/// Available numbers are shown plain; every other number is bracketed
/// and marked with `x`.
pub fn render_board(raffle: &Raffle) -> String {
    let mut lines: Vec<String> = vec![raffle.name.clone()];
    if !raffle.description.is_empty() {
        lines.push(raffle.description.clone());
    }
    lines.push(format!("Price per number: {}", raffle.price));
    lines.push(format!("Total numbers: {}", raffle.total_numbers));
    lines.push(format!("Status: {}", raffle.status));
    lines.push(format!(
        "Available: {} of {}",
        raffle.available_numbers().len(),
        raffle.numbers.len()
    ));
    lines.push(String::new());

    let width: usize = raffle
        .numbers
        .iter()
        .map(|n| n.number.to_string().len())
        .max()
        .unwrap_or(1);
    for row in raffle.numbers.chunks(BOARD_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|n| {
                if n.status.is_available() {
                    format!("  {:>width$} ", n.number)
                } else {
                    format!("[x{:>width$}]", n.number)
                }
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    join_lines(&lines)
}

/// Renders the confirmation step: selected numbers and their total.
pub fn render_confirmation(state: &StorefrontState) -> String {
    let mut lines: Vec<String> = vec![format!("Numbers: {}", state.selection.display_list())];
    if let Some(total) = state.selection_total() {
        lines.push(format!("Total: {total}"));
    }
    join_lines(&lines)
}

/// Renders the admin order listing.
///
/// Orders that can still be approved or rejected are marked with `*`.
pub fn render_orders(orders: &[&Order], state: &AdminState) -> String {
    if orders.is_empty() {
        return String::from("No orders found.\n");
    }

    let mut lines: Vec<String> = vec![format!(
        "  {:<8} {:<24} {:<16} {:<10} {:>7}  {}",
        "ID", "Customer", "Phone", "Status", "Numbers", "Date"
    )];
    lines.extend(orders.iter().map(|order| {
        let marker: char = if state.can_approve(&order.id) { '*' } else { ' ' };
        format!(
            "{marker} {:<8} {:<24} {:<16} {:<10} {:>7}  {}",
            order.id.value(),
            order.customer_name,
            order.customer_phone.as_deref().unwrap_or("-"),
            order.status,
            order.purchased_count(),
            order.order_date.as_deref().unwrap_or("-"),
        )
    }));
    join_lines(&lines)
}

/// Renders the last admin message or error, if any.
pub fn render_admin_message(state: &AdminState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|err| format!("Error: {err}"))
        .or_else(|| state.message.clone())
}

/// Renders the buyer ranking with medals for the top three.
pub fn render_ranking(entries: &[RankingEntry]) -> String {
    if entries.is_empty() {
        return String::from("No purchases yet.\n");
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<2} {:>3}. {}: {} numbers in {} order{}",
                entry.medal().unwrap_or(""),
                entry.position,
                entry.customer_name,
                entry.total_numbers,
                entry.order_count,
                if entry.order_count == 1 { "" } else { "s" },
            )
        })
        .collect();
    join_lines(&lines)
}
