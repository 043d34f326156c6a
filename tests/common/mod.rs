#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use submission_server::AppState;
use submission_server::core::PersistenceError;
use submission_server::dtos::CreateSubmissionDTO;
use submission_server::entities::{STATUS_COMPLETE, Submission};
use submission_server::repositories::SubmissionStore;

/// `SubmissionStore` kept in a Vec, same semantics as the MySQL table:
/// auto-increment ids, non-unique (email, topic), update-all-matches.
#[derive(Default)]
pub struct InMemorySubmissions {
    rows: Mutex<Vec<Submission>>,
    next_id: Mutex<i32>,
    failing: bool,
}

impl InMemorySubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the database was unreachable
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PersistenceError> {
        if self.failing {
            Err(PersistenceError::Query(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissions {
    async fn list(&self) -> Result<Vec<Submission>, PersistenceError> {
        self.check()?;
        Ok(self.rows())
    }

    async fn create(&self, data: &CreateSubmissionDTO) -> Result<u64, PersistenceError> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(Submission {
            id: *next_id,
            name: data.name.clone(),
            email: data.email.clone(),
            topic: data.topic.clone(),
            status: data.status.clone(),
        });
        Ok(1)
    }

    async fn mark_complete(&self, email: &str, topic: &str) -> Result<u64, PersistenceError> {
        self.check()?;
        let mut updated = 0;
        for row in self.rows.lock().unwrap().iter_mut() {
            if row.email == email && row.topic == topic {
                row.status = STATUS_COMPLETE.to_string();
                updated += 1;
            }
        }
        Ok(updated)
    }
}

/// Directory that never exists, so the static fallback always answers 404
pub fn missing_static_dir() -> PathBuf {
    std::env::temp_dir().join("submission-server-tests-no-static-dir")
}

/// TestServer over the given store, static fallback pointing nowhere
pub fn create_test_server(store: Arc<InMemorySubmissions>) -> TestServer {
    create_test_server_with_static(store, missing_static_dir())
}

pub fn create_test_server_with_static(
    store: Arc<InMemorySubmissions>,
    static_dir: PathBuf,
) -> TestServer {
    let state = Arc::new(AppState::with_store(store, static_dir));
    let app = submission_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
