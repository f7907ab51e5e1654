//! Document-gateway client.
//!
//! The store is a hosted JSON document database addressed as
//! `{DATABASE_URL}/{collection}/{id}.json`. The five operations the spec
//! of the console needs are wrapped here: get-by-id, full-collection
//! snapshot, create-with-generated-id, upsert-by-id, delete-by-id. Write
//! paths inject server-timestamp sentinels so the store's own clock stamps
//! `updatedAt` (and `createdAt` on a document's first write).

use std::collections::BTreeMap;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config;
use crate::services::error::ServiceError;

pub const USERS: &str = "users";
pub const MODULES: &str = "modules";
pub const SUB_MODULES: &str = "sub_modules";

#[derive(Deserialize)]
struct GeneratedKey {
    name: String,
}

/// One instance per call site, carrying the auth token of the current
/// session (anonymous reads are possible but the admin screens never use
/// them).
#[derive(Debug, Clone, Default)]
pub struct Documents {
    token: Option<String>,
}

impl Documents {
    pub fn new() -> Self {
        Documents::default()
    }

    pub fn with_token(token: &str) -> Self {
        Documents {
            token: Some(token.to_string()),
        }
    }

    fn url(&self, path: &str) -> String {
        let mut url = format!("{}/{}.json", config::DATABASE_URL, path);
        if let Some(token) = &self.token {
            url.push_str("?auth=");
            url.push_str(token);
        }
        url
    }

    /// Fetches one document; `Ok(None)` means the id does not exist.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, ServiceError> {
        let response = Request::get(&self.url(&format!("{collection}/{id}")))
            .send()
            .await
            .map_err(persistence)?;
        checked(&response)?;
        response.json::<Option<T>>().await.map_err(persistence)
    }

    /// Full collection snapshot as `(id, document)` pairs, in whatever
    /// order the store yields. An absent collection is an empty list.
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, T)>, ServiceError> {
        let response = Request::get(&self.url(collection))
            .send()
            .await
            .map_err(persistence)?;
        checked(&response)?;
        let snapshot: Option<BTreeMap<String, T>> =
            response.json().await.map_err(persistence)?;
        Ok(snapshot.map(|map| map.into_iter().collect()).unwrap_or_default())
    }

    /// Writes a new document and returns the id the store assigned to it.
    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        doc: &T,
    ) -> Result<String, ServiceError> {
        let response = Request::post(&self.url(collection))
            .json(&stamped(doc)?)
            .map_err(persistence)?
            .send()
            .await
            .map_err(persistence)?;
        checked(&response)?;
        let key: GeneratedKey = response.json().await.map_err(persistence)?;
        Ok(key.name)
    }

    /// Idempotent full-document write at a known id.
    pub async fn upsert<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), ServiceError> {
        let response = Request::put(&self.url(&format!("{collection}/{id}")))
            .json(&stamped(doc)?)
            .map_err(persistence)?
            .send()
            .await
            .map_err(persistence)?;
        checked(&response)
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), ServiceError> {
        let response = Request::delete(&self.url(&format!("{collection}/{id}")))
            .send()
            .await
            .map_err(persistence)?;
        checked(&response)
    }
}

fn persistence(err: impl ToString) -> ServiceError {
    ServiceError::Persistence(err.to_string())
}

fn checked(response: &Response) -> Result<(), ServiceError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ServiceError::Persistence(format!(
            "Document store responded {}",
            response.status()
        )))
    }
}

/// Serializes `doc` and injects the server-timestamp write sentinels. The
/// store replaces each sentinel with its own clock at commit time.
/// `createdAt` is only added when the serialized document does not already
/// carry one, i.e. on a document's first write.
fn stamped<T: Serialize>(doc: &T) -> Result<Value, ServiceError> {
    let mut value = serde_json::to_value(doc).map_err(persistence)?;
    if let Value::Object(fields) = &mut value {
        fields.insert("updatedAt".to_string(), server_timestamp());
        if !fields.contains_key("createdAt") {
            fields.insert("createdAt".to_string(), server_timestamp());
        }
    }
    Ok(value)
}

fn server_timestamp() -> Value {
    json!({ ".sv": "timestamp" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::level::Level;
    use common::model::module::Module;

    #[test]
    fn first_write_requests_both_stamps() {
        let module = Module {
            title: "Ownership".to_string(),
            level: Level::Beginner,
            ..Module::default()
        };
        let value = stamped(&module).unwrap();
        assert_eq!(value["createdAt"][".sv"], "timestamp");
        assert_eq!(value["updatedAt"][".sv"], "timestamp");
        assert_eq!(value["title"], "Ownership");
    }

    #[test]
    fn rewrite_keeps_the_creation_stamp() {
        let module = Module {
            title: "Ownership".to_string(),
            created_at: Some(1_700_000_000_000),
            updated_at: Some(1_700_000_000_000),
            ..Module::default()
        };
        let value = stamped(&module).unwrap();
        assert_eq!(value["createdAt"], 1_700_000_000_000u64);
        // the stale update stamp is replaced by a fresh server value
        assert_eq!(value["updatedAt"][".sv"], "timestamp");
    }
}
