use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use sickfits::config::{DatabaseConfig, StartupFlags};
use sickfits::startup::{Connector, SeedRoutine, connect_and_seed};

type Events = Arc<Mutex<Vec<&'static str>>>;

struct FakeConnector {
    events: Events,
    fail: bool,
}

struct FakeConnection;

impl Connector for FakeConnector {
    type Connection = FakeConnection;

    async fn connect(&self, _config: &DatabaseConfig) -> anyhow::Result<FakeConnection> {
        self.events.lock().unwrap().push("connect");
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(FakeConnection)
    }
}

struct FakeSeeder {
    events: Events,
    fail: bool,
}

impl SeedRoutine<FakeConnection> for FakeSeeder {
    async fn insert_seed_data(&self, _connection: &FakeConnection) -> anyhow::Result<()> {
        self.events.lock().unwrap().push("seed");
        if self.fail {
            return Err(anyhow!("duplicate key value"));
        }
        Ok(())
    }
}

fn fakes(connect_fails: bool, seed_fails: bool) -> (Events, FakeConnector, FakeSeeder) {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    (
        events.clone(),
        FakeConnector {
            events: events.clone(),
            fail: connect_fails,
        },
        FakeSeeder {
            events,
            fail: seed_fails,
        },
    )
}

fn database_config() -> DatabaseConfig {
    DatabaseConfig::from_lookup(&|_: &str| None)
}

#[tokio::test]
async fn test_seed_runs_once_after_connect_with_flag() {
    let (events, connector, seeder) = fakes(false, false);
    let flags = StartupFlags::from_args(["sickfits", "--seed-data"]);

    connect_and_seed(&database_config(), flags, &connector, &seeder)
        .await
        .unwrap();

    assert_eq!(*events.lock().unwrap(), vec!["connect", "seed"]);
}

#[tokio::test]
async fn test_seed_never_runs_without_flag() {
    let (events, connector, seeder) = fakes(false, false);
    let flags = StartupFlags::from_args(["sickfits"]);

    connect_and_seed(&database_config(), flags, &connector, &seeder)
        .await
        .unwrap();

    assert_eq!(*events.lock().unwrap(), vec!["connect"]);
}

#[tokio::test]
async fn test_seed_not_run_when_connect_fails() {
    let (events, connector, seeder) = fakes(true, false);
    let flags = StartupFlags::from_args(["--seed-data"]);

    let result = connect_and_seed(&database_config(), flags, &connector, &seeder).await;

    assert!(result.is_err());
    assert_eq!(*events.lock().unwrap(), vec!["connect"]);
}

#[tokio::test]
async fn test_seed_failure_aborts_startup_unchanged() {
    let (events, connector, seeder) = fakes(false, true);
    let flags = StartupFlags::from_args(["--seed-data"]);

    let err = connect_and_seed(&database_config(), flags, &connector, &seeder)
        .await
        .err()
        .unwrap();

    assert_eq!(err.to_string(), "duplicate key value");
    assert_eq!(*events.lock().unwrap(), vec!["connect", "seed"]);
}
