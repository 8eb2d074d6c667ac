//! wallet-sync-sim
//!
//! Drives the store the way the wallet app does: the owning thread holds the
//! store and its subscribers, while a background "sync engine" reports its
//! results through a cloned dispatcher.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use wallet_prefs::{AppConfig, FilePreferences, MemoryPreferences, PreferenceStore, StatePreferences};
use wallet_store::actions::{AlertAction, StartupAction, WalletAction};
use wallet_store::middleware::{LoggingMiddleware, PersistenceMiddleware, TelemetryMiddleware};
use wallet_store::state::{AlertKind, SyncState, Transaction, TransactionDirection};
use wallet_store::telemetry::LogTelemetry;
use wallet_store::{AppState, Dispatcher, Store, SubscriberId, Subscription, TriggerName};

mod logger;

const SYNC_STEPS: u32 = 10;

fn main() -> Result<()> {
    let config = AppConfig::load();
    logger::init(&config.log_level)?;

    log::info!("Starting wallet-sync-sim");

    let preferences = open_preferences(&config);
    let initial = AppState::initial(&StatePreferences::load(&*preferences));

    let mut store = Store::new(initial);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(PersistenceMiddleware::new(preferences)));
    if config.telemetry_enabled {
        store.add_middleware(Box::new(TelemetryMiddleware::new(LogTelemetry)));
    }

    let _views = attach_views(&mut store);

    store.dispatch(StartupAction::LoginSuccess);

    let sync = spawn_sync_engine(store.dispatcher().clone());
    while !sync.is_finished() {
        store.process_pending();
        thread::sleep(Duration::from_millis(20));
    }
    if sync.join().is_err() {
        log::error!("Sync engine thread panicked");
    }
    store.process_pending();

    store.trigger(TriggerName::Lock);

    println!("{}", serde_json::to_string_pretty(store.state())?);
    log::info!("Exiting wallet-sync-sim");
    Ok(())
}

fn open_preferences(config: &AppConfig) -> Box<dyn PreferenceStore> {
    let opened = config
        .preferences_path()
        .and_then(|path| FilePreferences::open(path).map_err(anyhow::Error::from));
    match opened {
        Ok(prefs) => {
            log::info!("Using preference file {:?}", prefs.path());
            Box::new(prefs)
        }
        Err(e) => {
            log::warn!("Falling back to in-memory preferences: {}", e);
            Box::new(MemoryPreferences::new())
        }
    }
}

/// Stand-ins for the screens that observe the store
fn attach_views(store: &mut Store) -> Vec<Subscription> {
    let header = SubscriberId::new();
    store.subscribe(
        header,
        |old, new| old.wallet.sync_progress != new.wallet.sync_progress,
        |state, _| {
            log::info!(
                "Header: sync {:.0}% (block time {})",
                state.wallet.sync_progress * 100.0,
                state.wallet.last_block_timestamp
            );
        },
    );

    let balance = SubscriberId::new();
    store.subscribe(
        balance,
        |old, new| old.wallet.balance != new.wallet.balance,
        |state, _| match state.wallet.balance {
            Some(amount) => log::info!("Balance: {} sat", amount),
            None => log::info!("Balance: unknown"),
        },
    );
    store.subscribe(
        balance,
        |old, new| old.wallet.sync_state != new.wallet.sync_state,
        |state, dispatcher| {
            if state.wallet.sync_state == SyncState::Success && state.wallet.balance.is_some() {
                dispatcher.dispatch(AlertAction::Show(AlertKind::ResolvedSuccess));
            }
        },
    );

    let modal = SubscriberId::new();
    store.subscribe(
        modal,
        |old, new| old.root_modal != new.root_modal,
        |state, _| {
            if state.root_modal.is_presented() {
                log::info!("Modal: presenting {}", state.root_modal.as_ref());
            }
        },
    );

    let security = SubscriberId::new();
    store.subscribe_trigger(security, TriggerName::Lock, |_, dispatcher| {
        log::info!("Locking wallet");
        dispatcher.dispatch(StartupAction::RequireLogin);
    });

    vec![header, balance, modal, security]
        .into_iter()
        .map(|id| Subscription::new(id, store.dispatcher().clone()))
        .collect()
}

fn spawn_sync_engine(dispatcher: Dispatcher) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        dispatcher.dispatch(WalletAction::SetSyncState(SyncState::Connecting));
        dispatcher.dispatch(WalletAction::SetIsConnected(true));
        dispatcher.dispatch(WalletAction::SetSyncState(SyncState::Syncing));

        let base_timestamp = 1_500_000_000;
        for step in 1..=SYNC_STEPS {
            thread::sleep(Duration::from_millis(50));
            dispatcher.dispatch(WalletAction::SetSyncProgress {
                progress: f64::from(step) / f64::from(SYNC_STEPS),
                timestamp: base_timestamp + step * 600,
            });
        }

        let transactions = vec![Transaction {
            hash: "5e1f0c2a".to_string(),
            direction: TransactionDirection::Received,
            amount: 250_000,
            fee: 0,
            timestamp: base_timestamp + 1_200,
            block_height: Some(1_024),
        }];
        dispatcher.dispatch(WalletAction::SetTransactions(transactions));
        dispatcher.dispatch(WalletAction::SetBalance(250_000));
        dispatcher.dispatch(WalletAction::SetSyncState(SyncState::Success));
    })
}
