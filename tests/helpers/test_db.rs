use mailplate::infrastructure::persistence::Database;
use std::path::PathBuf;

pub struct TestDb {
    db: Database,
    path: PathBuf,
}

impl TestDb {
    pub fn db(&self) -> &Database {
        &self.db
    }
}

pub async fn setup_test_db() -> TestDb {
    // File-based SQLite, one file per test so tests can run in parallel
    let path = std::env::temp_dir().join(format!("mailplate_test_{}.db", uuid::Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect_with_pool_size(&db_url, 4)
        .await
        .expect("Failed to connect to test database");

    db.ensure_schema()
        .await
        .expect("Failed to create test schema");

    TestDb { db, path }
}

pub async fn teardown_test_db(test_db: TestDb) {
    test_db.db.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let mut file = test_db.path.clone().into_os_string();
        file.push(suffix);
        std::fs::remove_file(file).ok();
    }
}
