//! Submission DTOs - payloads exchanged with the two vendor integrations

use crate::entities::{STATUS_COMPLETE, Submission};
use serde::{Deserialize, Deserializer, Serialize};

/// Response body of GET /vendor1/listsubmissions
#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionListDTO {
    pub submissions: Vec<Submission>,
}

/// Body of POST /vendor1/newsubmission. Any `id` sent by the caller is ignored,
/// the database assigns it. The status is stored as given.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateSubmissionDTO {
    pub name: String,
    pub email: String,
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Body of POST /vendor2/newsubmission. Only `email` and `topic` select rows;
/// `id` and `name` are echoed back untouched and `status` is discarded.
#[derive(Deserialize, Debug, Clone)]
pub struct CompleteSubmissionDTO {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub email: String,
    pub topic: String,
}

/// Optional fields may be absent or `null`; both decode to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CompleteSubmissionDTO {
    /// The submission as echoed to vendor2, with the forced status.
    pub fn into_completed(self) -> Submission {
        Submission {
            id: self.id,
            name: self.name,
            email: self.email,
            topic: self.topic,
            status: STATUS_COMPLETE.to_string(),
        }
    }
}
