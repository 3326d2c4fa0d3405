//! Drain semantics of the replay coordinator and the submit path,
//! driven through a recording fake backend.

use rattendance::core::replay::{DrainState, ReplayCoordinator};
use rattendance::core::submit::SubmitLogic;
use rattendance::db::cache;
use rattendance::db::initialize::init_db;
use rattendance::db::pool::DbPool;
use rattendance::errors::{AppError, AppResult};
use rattendance::models::action::{ActionKind, PendingAction};
use rattendance::models::coordinates::Coordinates;
use rattendance::models::employee::{Caller, Employee, Principal, UserProfile, UserRole};
use rattendance::models::record::AttendanceRecord;
use rattendance::queue::QueueStore;
use rattendance::remote::Backend;
use std::sync::Mutex;

/// Fake backend: records every attendance call, optionally rejecting
/// from the n-th call (1-based) onwards.
struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    reject_from: Option<usize>,
}

impl RecordingBackend {
    fn accepting() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_from: None,
        }
    }

    fn rejecting_from(n: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_from: Some(n),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) -> AppResult<()> {
        let mut calls = self.calls.lock().expect("calls lock");
        calls.push(call);
        if let Some(n) = self.reject_from
            && calls.len() >= n
        {
            return Err(AppError::Backend {
                status: 409,
                message: "rejected".to_string(),
            });
        }
        Ok(())
    }
}

impl Backend for RecordingBackend {
    fn check_in(&self, latitude: f64, longitude: f64) -> AppResult<()> {
        self.record(format!("check-in({},{})", latitude, longitude))
    }

    fn check_out(&self) -> AppResult<()> {
        self.record("check-out".to_string())
    }

    fn monthly_report(
        &self,
        _employee: &Principal,
        _year: i32,
        _month: u32,
    ) -> AppResult<Vec<AttendanceRecord>> {
        Ok(Vec::new())
    }

    fn all_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(Vec::new())
    }

    fn caller_profile(&self) -> AppResult<Option<UserProfile>> {
        Ok(None)
    }

    fn save_caller_profile(&self, _profile: &UserProfile) -> AppResult<()> {
        Ok(())
    }

    fn register_employee(&self, _name: &str, _email: &str) -> AppResult<()> {
        Ok(())
    }

    fn assign_role(&self, _user: &Principal, _role: UserRole) -> AppResult<()> {
        Ok(())
    }

    fn whoami(&self) -> AppResult<Caller> {
        Ok(Caller {
            principal: Principal::from("test-principal"),
            role: UserRole::User,
        })
    }

    fn ping(&self) -> bool {
        true
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    pool: DbPool,
    store: QueueStore,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("cache.sqlite");
    let pool = DbPool::new(&db_path.to_string_lossy()).expect("open db");
    init_db(&pool.conn).expect("init db");
    let store = QueueStore::new(dir.path().join("queue.json"));
    Fixture {
        _dir: dir,
        pool,
        store,
    }
}

fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).expect("valid coordinates")
}

fn seed_read_cache(pool: &mut DbPool) {
    cache::put(pool, cache::CURRENT_STATUS, "{}").expect("seed status");
    cache::put(pool, cache::ATTENDANCE_HISTORY, "[]").expect("seed history");
}

fn read_cache_present(pool: &mut DbPool) -> bool {
    let status = cache::get_fresh(pool, cache::CURRENT_STATUS, 3600).expect("get status");
    let history = cache::get_fresh(pool, cache::ATTENDANCE_HISTORY, 3600).expect("get history");
    status.is_some() || history.is_some()
}

// ---------------------------------------------------------------------------
// Drain
// ---------------------------------------------------------------------------

#[test]
fn full_drain_submits_in_order_and_empties_the_queue() {
    let mut fx = fixture();
    let backend = RecordingBackend::accepting();
    seed_read_cache(&mut fx.pool);

    fx.store.append(PendingAction::check_in(coords(1.0, 2.0)));
    fx.store.append(PendingAction::check_out());
    fx.store.append(PendingAction::check_in(coords(3.0, 4.0)));

    let mut coordinator = ReplayCoordinator::new();
    let report = coordinator.drain(&backend, &mut fx.pool, &fx.store, true);

    assert_eq!(report.attempted, 3);
    assert_eq!(report.submitted, 3);
    assert!(report.error.is_none());
    assert!(report.fully_drained());

    assert_eq!(
        backend.calls(),
        vec!["check-in(1,2)", "check-out", "check-in(3,4)"]
    );
    assert!(fx.store.read_all().is_empty());
    assert_eq!(coordinator.state(), DrainState::Idle);

    // Sync timestamp registrato e cache di lettura invalidata
    let last_sync = cache::get_meta(&mut fx.pool, cache::LAST_SYNC_TIME).expect("meta");
    assert!(last_sync.is_some());
    assert!(!read_cache_present(&mut fx.pool));
}

#[test]
fn rejected_item_keeps_only_the_unsubmitted_suffix() {
    let mut fx = fixture();
    let backend = RecordingBackend::rejecting_from(2);

    fx.store.append(PendingAction::check_in(coords(1.0, 2.0)));
    fx.store.append(PendingAction::check_in(coords(3.0, 4.0)));

    let mut coordinator = ReplayCoordinator::new();
    let report = coordinator.drain(&backend, &mut fx.pool, &fx.store, true);

    assert_eq!(report.attempted, 2);
    assert_eq!(report.submitted, 1);
    assert!(report.error.is_some());

    // Il primo è partito, il secondo è stato tentato e rifiutato
    assert_eq!(backend.calls(), vec!["check-in(1,2)", "check-in(3,4)"]);

    // In coda resta SOLO l'azione non confermata
    let queue = fx.store.read_all();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].payload, Some(coords(3.0, 4.0)));

    // Nessun timestamp di sync su un drain fallito
    let last_sync = cache::get_meta(&mut fx.pool, cache::LAST_SYNC_TIME).expect("meta");
    assert!(last_sync.is_none());
}

#[test]
fn failure_on_middle_item_stops_the_batch() {
    let mut fx = fixture();
    let backend = RecordingBackend::rejecting_from(2);

    fx.store.append(PendingAction::check_in(coords(1.0, 2.0)));
    fx.store.append(PendingAction::check_out());
    fx.store.append(PendingAction::check_in(coords(5.0, 6.0)));

    let mut coordinator = ReplayCoordinator::new();
    let report = coordinator.drain(&backend, &mut fx.pool, &fx.store, true);

    assert_eq!(report.submitted, 1);
    // La terza azione non viene mai tentata
    assert_eq!(backend.calls().len(), 2);

    let queue = fx.store.read_all();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].kind, ActionKind::CheckOut);
    assert_eq!(queue[1].payload, Some(coords(5.0, 6.0)));
}

#[test]
fn draining_an_empty_queue_is_a_noop() {
    let mut fx = fixture();
    let backend = RecordingBackend::accepting();

    let mut coordinator = ReplayCoordinator::new();
    let report = coordinator.drain(&backend, &mut fx.pool, &fx.store, true);

    assert_eq!(report.attempted, 0);
    assert!(backend.calls().is_empty());

    let last_sync = cache::get_meta(&mut fx.pool, cache::LAST_SYNC_TIME).expect("meta");
    assert!(last_sync.is_none());
}

#[test]
fn drain_is_skipped_while_offline() {
    let mut fx = fixture();
    let backend = RecordingBackend::accepting();

    fx.store.append(PendingAction::check_out());

    let mut coordinator = ReplayCoordinator::new();
    let report = coordinator.drain(&backend, &mut fx.pool, &fx.store, false);

    assert_eq!(report.attempted, 0);
    assert!(backend.calls().is_empty());
    assert_eq!(fx.store.len(), 1);
}

#[test]
fn retry_after_failure_resumes_from_the_failed_item() {
    let mut fx = fixture();

    fx.store.append(PendingAction::check_in(coords(1.0, 2.0)));
    fx.store.append(PendingAction::check_in(coords(3.0, 4.0)));

    let rejecting = RecordingBackend::rejecting_from(2);
    let mut coordinator = ReplayCoordinator::new();
    coordinator.drain(&rejecting, &mut fx.pool, &fx.store, true);
    assert_eq!(fx.store.len(), 1);

    // Secondo passaggio: il backend ora accetta e la coda si svuota
    let accepting = RecordingBackend::accepting();
    let report = coordinator.drain(&accepting, &mut fx.pool, &fx.store, true);

    assert_eq!(report.submitted, 1);
    assert_eq!(accepting.calls(), vec!["check-in(3,4)"]);
    assert!(fx.store.read_all().is_empty());
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[test]
fn failed_check_in_is_queued_and_surfaced() {
    let mut fx = fixture();
    let backend = RecordingBackend::rejecting_from(1);

    let result = SubmitLogic::check_in(&backend, &mut fx.pool, &fx.store, coords(45.0, 9.0));

    // Entrambi gli effetti: errore al chiamante E azione in coda
    assert!(result.is_err());
    let queue = fx.store.read_all();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].kind, ActionKind::CheckIn);
    assert_eq!(queue[0].payload, Some(coords(45.0, 9.0)));
}

#[test]
fn failed_check_out_is_queued_without_payload() {
    let mut fx = fixture();
    let backend = RecordingBackend::rejecting_from(1);

    let result = SubmitLogic::check_out(&backend, &mut fx.pool, &fx.store);

    assert!(result.is_err());
    let queue = fx.store.read_all();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].kind, ActionKind::CheckOut);
    assert_eq!(queue[0].payload, None);
}

#[test]
fn successful_check_in_invalidates_read_cache_and_queues_nothing() {
    let mut fx = fixture();
    let backend = RecordingBackend::accepting();
    seed_read_cache(&mut fx.pool);

    let result = SubmitLogic::check_in(&backend, &mut fx.pool, &fx.store, coords(45.0, 9.0));

    assert!(result.is_ok());
    assert!(fx.store.read_all().is_empty());
    assert!(!read_cache_present(&mut fx.pool));
}

// ---------------------------------------------------------------------------
// Monitor
// ---------------------------------------------------------------------------

#[test]
fn monitor_drains_when_online_and_updates_its_state() {
    let mut fx = fixture();
    let backend = RecordingBackend::accepting();

    fx.store.append(PendingAction::check_in(coords(1.0, 2.0)));
    fx.store.append(PendingAction::check_out());

    let mut monitor =
        rattendance::core::monitor::SyncMonitor::new(&mut fx.pool).expect("monitor");
    assert!(monitor.last_sync_time.is_none());

    let came_online = monitor.probe(&backend);
    assert!(came_online);
    monitor.refresh_pending(&fx.store);
    assert_eq!(monitor.pending_count, 2);

    let report = monitor.try_drain(&backend, &mut fx.pool, &fx.store);

    assert!(report.fully_drained());
    assert!(!monitor.is_syncing());
    assert_eq!(monitor.pending_count, 0);
    assert!(monitor.last_sync_time.is_some());
}
