// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod clipboard;
mod render;

use std::collections::BTreeSet;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::eyre};
use futures::future::join_all;
use raffle_shop::{AdminState, StoreEvent, StorefrontState};
use raffle_shop_api::{
    AdminSession, ApiResult, DEFAULT_BASE_URL, HttpRaffleService, RaffleService, ServiceConfig,
    StoreEventBroadcaster, StorefrontSession, load_ranking,
};
use raffle_shop_domain::{OrderId, RankingEntry};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::clipboard::Osc52Clipboard;
use crate::render::{
    render_admin_message, render_board, render_confirmation, render_orders, render_ranking,
};

/// Raffle storefront - browse raffles, buy numbers and manage orders
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the order/raffle service
    #[arg(long, env = "RAFFLE_SHOP_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Messaging contact orders are handed off to
    #[arg(long, env = "RAFFLE_SHOP_CONTACT_PHONE", default_value = "", global = true)]
    contact_phone: String,

    /// Payment reference copied by `payment-key`
    #[arg(long, env = "RAFFLE_SHOP_PAYMENT_KEY", default_value = "", global = true)]
    payment_key: String,

    /// Print every store event as a JSON line on stderr
    #[arg(long, global = true)]
    events: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig::new(&self.base_url)
            .with_contact_phone(&self.contact_phone)
            .with_payment_key(&self.payment_key)
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show a raffle and its number board
    Show {
        /// External identifier of the raffle
        raffle_eid: String,
    },

    /// Buy numbers and get the messaging link to arrange payment
    Buy {
        /// External identifier of the raffle
        raffle_eid: String,

        /// Numbers to buy, comma separated
        #[arg(
            long,
            value_delimiter = ',',
            conflicts_with = "random",
            required_unless_present = "random"
        )]
        numbers: Vec<u32>,

        /// Let the shop pick this many available numbers
        #[arg(long)]
        random: Option<usize>,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer phone
        #[arg(long)]
        phone: Option<String>,
    },

    /// List orders
    Orders {
        /// Only show orders whose customer name contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Approve orders
    Approve {
        /// Order identifiers
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Reject orders
    Reject {
        /// Order identifiers
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show the buyer ranking
    Ranking,

    /// Copy the payment key to the terminal clipboard
    PaymentKey,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let broadcaster: StoreEventBroadcaster = StoreEventBroadcaster::new();
    let printer: Option<JoinHandle<()>> = args.events.then(|| spawn_event_printer(&broadcaster));

    let result: Result<()> = run(&args, &broadcaster).await;

    drop(broadcaster);
    if let Some(printer) = printer
        && let Err(err) = printer.await
    {
        warn!(%err, "Event printer stopped unexpectedly");
    }
    result
}

async fn run(args: &Args, broadcaster: &StoreEventBroadcaster) -> Result<()> {
    let config: ServiceConfig = args.service_config();
    let service: HttpRaffleService = HttpRaffleService::new(&config)?;
    info!(base_url = %service.base_url(), "Using collaborator service");

    match args.command.clone() {
        Command::Show { raffle_eid } => show(service, config, broadcaster, &raffle_eid).await,
        Command::Buy {
            raffle_eid,
            numbers,
            random,
            name,
            phone,
        } => {
            let session = StorefrontSession::new(service, config, &raffle_eid)
                .with_broadcaster(broadcaster.clone());
            buy(&session, &numbers, random, &name, phone.as_deref()).await
        }
        Command::Orders { filter } => {
            let session = AdminSession::new(service).with_broadcaster(broadcaster.clone());
            orders(&session, filter.as_deref()).await
        }
        Command::Approve { ids } => {
            let session = AdminSession::new(service).with_broadcaster(broadcaster.clone());
            bulk_action(&session, &ids, true).await
        }
        Command::Reject { ids } => {
            let session = AdminSession::new(service).with_broadcaster(broadcaster.clone());
            bulk_action(&session, &ids, false).await
        }
        Command::Ranking => {
            let entries: Vec<RankingEntry> = load_ranking(&service).await?;
            print!("{}", render_ranking(&entries));
            Ok(())
        }
        Command::PaymentKey => payment_key(service, config, broadcaster).await,
    }
}

async fn show(
    service: HttpRaffleService,
    config: ServiceConfig,
    broadcaster: &StoreEventBroadcaster,
    raffle_eid: &str,
) -> Result<()> {
    let session = StorefrontSession::new(service, config, raffle_eid)
        .with_broadcaster(broadcaster.clone());
    session.load().await?;

    let state: StorefrontState = session.snapshot().await;
    let raffle = state
        .raffle
        .ok_or_else(|| eyre!("Raffle {raffle_eid} was not loaded"))?;
    print!("{}", render_board(&raffle));
    Ok(())
}

async fn buy<S: RaffleService>(
    session: &StorefrontSession<S>,
    numbers: &[u32],
    random: Option<usize>,
    name: &str,
    phone: Option<&str>,
) -> Result<()> {
    session.load().await?;

    if let Some(count) = random {
        session.random_select(count).await?;
    } else {
        // Toggling twice would deselect a repeated number.
        let requested: BTreeSet<u32> = numbers.iter().copied().collect();
        for &number in &requested {
            session.toggle(number).await?;
        }
        let state: StorefrontState = session.snapshot().await;
        if let Some(taken) = requested.iter().find(|&&n| !state.selection.contains(n)) {
            return Err(eyre!("Number {taken} is not available"));
        }
    }

    session.open_confirmation().await?;
    print!("{}", render_confirmation(&session.snapshot().await));

    let order_id: OrderId = session.submit(name, phone).await?;
    println!("Order #{order_id} created.");

    let link: String = session.dismiss_success().await?;
    println!("Arrange the payment here: {link}");
    Ok(())
}

async fn orders(session: &AdminSession<HttpRaffleService>, filter: Option<&str>) -> Result<()> {
    session.load_orders().await?;
    if let Some(filter) = filter {
        session.set_filter(filter).await;
    }

    let state: AdminState = session.snapshot().await;
    print!("{}", render_orders(&state.visible_orders(), &state));
    Ok(())
}

/// Runs approve or reject for every id concurrently.
///
/// Duplicate ids are not collapsed; each one reaches the service.
async fn bulk_action(
    session: &AdminSession<HttpRaffleService>,
    ids: &[String],
    approve: bool,
) -> Result<()> {
    session.load_orders().await?;

    let order_ids: Vec<OrderId> = ids.iter().map(|id| OrderId::new(id)).collect();
    let outcomes: Vec<ApiResult<()>> = join_all(order_ids.iter().map(|id| async move {
        if approve {
            session.approve(id).await
        } else {
            session.reject(id).await
        }
    }))
    .await;

    let mut failed: usize = 0;
    for (order_id, outcome) in order_ids.iter().zip(&outcomes) {
        match outcome {
            Ok(()) => println!("Order {order_id}: done"),
            Err(err) => {
                failed += 1;
                println!("Order {order_id}: {err}");
            }
        }
    }
    if let Some(message) = render_admin_message(&session.snapshot().await) {
        println!("{message}");
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} actions failed", order_ids.len()));
    }
    Ok(())
}

async fn payment_key(
    service: HttpRaffleService,
    config: ServiceConfig,
    broadcaster: &StoreEventBroadcaster,
) -> Result<()> {
    if config.payment_key.is_empty() {
        return Err(eyre!(
            "No payment key configured; pass --payment-key or set RAFFLE_SHOP_PAYMENT_KEY"
        ));
    }

    let mut session =
        StorefrontSession::new(service, config, "").with_broadcaster(broadcaster.clone());
    let mut rx = session.subscribe();
    let mut clipboard = Osc52Clipboard::new(std::io::stdout());
    session.copy_payment_key(&mut clipboard).await?;

    if let Some(notice) = session.snapshot().await.notice {
        println!("{}", notice.message);
    }
    // Stay alive until the notice timer clears the notice.
    loop {
        match rx.recv().await {
            Ok(StoreEvent::NoticeCleared) | Err(RecvError::Closed) => break,
            Ok(_) | Err(RecvError::Lagged(_)) => {}
        }
    }
    Ok(())
}

/// Prints every event as a JSON line on stderr until the channel closes.
fn spawn_event_printer(broadcaster: &StoreEventBroadcaster) -> JoinHandle<()> {
    let mut rx = broadcaster.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(line) => eprintln!("{line}"),
                    Err(err) => warn!(%err, "Failed to serialize store event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event printer fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
