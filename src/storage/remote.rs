use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, StoreError};
use super::HitStore;
use super::models::{Hit, NewHit};

const TEXTAREA_ENDPOINT: &str = "/api/insertHitsFromTextarea";
const DISPLAY_ENDPOINT: &str = "/api/insertHitsFromHitsList";
const GET_ENDPOINT: &str = "/api/getHits";
const CLEAN_ENDPOINT: &str = "/api/cleanHits";

#[derive(Serialize)]
struct HitsPayload<'a, T> {
    hits: &'a [T],
}

#[derive(Deserialize)]
struct SuccessResponse {
    success: bool,
}

#[derive(Deserialize)]
struct HitsResponse {
    hits: Vec<Hit>,
}

/// Record store that proxies every operation to a remote API server.
/// Storage semantics (index assignment, timestamps) are fully delegated.
pub struct RemoteStore {
    base_url: String,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder().build()?;
        Ok(RemoteStore {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn post_hits<T: Serialize>(&self, endpoint: &str, hits: &[T]) -> Result<bool> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(&HitsPayload { hits })
            .send()?;
        if !response.status().is_success() {
            return Err(StoreError::Server(format!(
                "{} returned {}",
                endpoint,
                response.status()
            )));
        }
        let body: SuccessResponse = response.json()?;
        Ok(body.success)
    }

    fn fetch_hits(&self) -> Result<Vec<Hit>> {
        let response = self.client.get(self.url(GET_ENDPOINT)).send()?;
        if !response.status().is_success() {
            return Err(StoreError::Server(format!(
                "{} returned {}",
                GET_ENDPOINT,
                response.status()
            )));
        }
        let body: HitsResponse = response.json()?;
        Ok(body.hits)
    }

    fn delete_all(&self) -> Result<bool> {
        let response = self.client.delete(self.url(CLEAN_ENDPOINT)).send()?;
        if !response.status().is_success() {
            return Err(StoreError::Server(format!(
                "{} returned {}",
                CLEAN_ENDPOINT,
                response.status()
            )));
        }
        let body: SuccessResponse = response.json()?;
        Ok(body.success)
    }
}

impl HitStore for RemoteStore {
    // connection and schema lifecycle belong to the server
    fn open_database(&mut self) -> Result<()> {
        Ok(())
    }

    fn init_tables(&mut self) -> Result<()> {
        Ok(())
    }

    fn close_database(&mut self) -> Result<()> {
        Ok(())
    }

    fn insert_hits_from_textarea(&self, hits: &[NewHit]) -> bool {
        match self.post_hits(TEXTAREA_ENDPOINT, hits) {
            Ok(ok) => ok,
            Err(e) => {
                eprintln!("hitbase: insert error: {}", e);
                false
            }
        }
    }

    fn insert_hits_from_display(&self, hits: &[Hit]) -> bool {
        match self.post_hits(DISPLAY_ENDPOINT, hits) {
            Ok(ok) => ok,
            Err(e) => {
                eprintln!("hitbase: insert error: {}", e);
                false
            }
        }
    }

    fn get_hits(&self) -> Vec<Hit> {
        match self.fetch_hits() {
            Ok(hits) => hits,
            Err(e) => {
                eprintln!("hitbase: fetch error: {}", e);
                Vec::new()
            }
        }
    }

    fn clean_hits(&self) -> bool {
        match self.delete_all() {
            Ok(ok) => ok,
            Err(e) => {
                eprintln!("hitbase: clean error: {}", e);
                false
            }
        }
    }
}
