//! MySqlSubmissionRepository - `SubmissionStore` over the `submissions` table

use super::SubmissionStore;
use crate::core::{Database, PersistenceError};
use crate::dtos::CreateSubmissionDTO;
use crate::entities::{STATUS_COMPLETE, Submission};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

pub struct MySqlSubmissionRepository {
    db: Database,
}

impl MySqlSubmissionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubmissionStore for MySqlSubmissionRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Submission>, PersistenceError> {
        debug!("Listing submissions");
        let submissions = self
            .db
            .fetch_all(sqlx::query_as::<_, Submission>(
                r#"
                SELECT
                    id,
                    speaker_name AS name,
                    speaker_email AS email,
                    speaker_topic AS topic,
                    speaker_status AS status
                FROM submissions
                ORDER BY id ASC
                "#,
            ))
            .await?;

        debug!("Fetched {} submissions", submissions.len());
        Ok(submissions)
    }

    #[instrument(skip(self, data), fields(email = %data.email, topic = %data.topic))]
    async fn create(&self, data: &CreateSubmissionDTO) -> Result<u64, PersistenceError> {
        let result = self
            .db
            .execute(
                sqlx::query(
                    r#"
                    INSERT INTO submissions (speaker_name, speaker_email, speaker_topic, speaker_status)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(&data.name)
                .bind(&data.email)
                .bind(&data.topic)
                .bind(&data.status),
            )
            .await?;

        info!(
            id = result.last_insert_id(),
            "Inserted {} row(s) of data",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn mark_complete(&self, email: &str, topic: &str) -> Result<u64, PersistenceError> {
        let result = self
            .db
            .execute(
                sqlx::query(
                    "UPDATE submissions SET speaker_status = ? WHERE speaker_email = ? AND speaker_topic = ?",
                )
                .bind(STATUS_COMPLETE)
                .bind(email)
                .bind(topic),
            )
            .await?;

        info!("Updated {} row(s) of data", result.rows_affected());
        Ok(result.rows_affected())
    }
}
