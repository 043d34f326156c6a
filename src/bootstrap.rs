//! Bootstrap - destructive reset of the `submissions` table with two sample rows
//!
//! Only run when the operator passes `--populate`; any failure aborts startup.

use crate::core::{Database, PersistenceError};
use tracing::{info, instrument};

const DROP_TABLE: &str = "DROP TABLE IF EXISTS submissions";

const CREATE_TABLE: &str = r#"
CREATE TABLE submissions (
    id INT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    speaker_name VARCHAR(150),
    speaker_email VARCHAR(150),
    speaker_topic VARCHAR(150),
    speaker_status VARCHAR(50)
)
"#;

/// (name, email, topic, status)
pub const SAMPLE_SUBMISSIONS: [(&str, &str, &str, &str); 2] = [
    ("Jane Doe", "jane@blah.com", "Some really neat stuff", "COMPLETE"),
    ("John Doe", "john@blah.com", "Things you should know", "COMPLETE"),
];

#[instrument(skip(db))]
pub async fn seed(db: &Database) -> Result<(), PersistenceError> {
    db.execute_raw(DROP_TABLE).await?;
    info!("Finished dropping table (if existed)");

    db.execute_raw(CREATE_TABLE).await?;
    info!("Finished creating table");

    for (name, email, topic, status) in SAMPLE_SUBMISSIONS {
        let result = db
            .execute(
                sqlx::query(
                    "INSERT INTO submissions (speaker_name, speaker_email, speaker_topic, speaker_status) VALUES (?, ?, ?, ?)",
                )
                .bind(name)
                .bind(email)
                .bind(topic)
                .bind(status),
            )
            .await?;
        info!("Inserted {} row(s) of data", result.rows_affected());
    }

    info!("Seeding done");
    Ok(())
}
