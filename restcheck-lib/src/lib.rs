use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

mod http;

pub use crate::http::ClientError;

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone)]
pub struct Profile {
    pub id: i32,
    pub name: String,
}

impl Profile {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// Marker payload returned as the body of handled invalid-argument faults.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct ErrorDesc {}

/// Blocking client for the profile REST fixture. The base URL is expected to
/// already contain the fixture prefix, e.g. `http://127.0.0.1:8080/rest/test`.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    runtime: Runtime,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let client = Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            runtime,
        };

        Ok(client)
    }

    pub fn get_profile(&self, id: i32, name: &str) -> Result<Profile, ClientError> {
        let url = format!("{}/profile/{}/{}", self.base_url, id, name);
        self.runtime.block_on(async {
            let response = self.http.get(&url).send().await?;
            let response = http::check_status(response)?;
            Ok(response.json().await?)
        })
    }

    pub fn upgrade_profile(&self, profile: &Profile) -> Result<Profile, ClientError> {
        let url = format!("{}/profile", self.base_url);
        self.runtime.block_on(async {
            let response = self.http.post(&url).json(profile).send().await?;
            let response = http::check_status(response)?;
            Ok(response.json().await?)
        })
    }

    pub fn put_query(&self, a: Option<i64>, b: Option<i64>, c: i64) -> Result<(), ClientError> {
        let url = format!("{}/profile", self.base_url);

        let mut query: Vec<(&str, String)> = vec![("c", c.to_string())];
        if let Some(a) = a {
            query.push(("a", a.to_string()));
        }
        if let Some(b) = b {
            query.push(("b", b.to_string()));
        }

        self.runtime.block_on(async {
            let response = self.http.put(&url).query(&query).send().await?;
            http::check_status(response)?;
            Ok(())
        })
    }

    pub fn delete_profile(&self, id: i64) -> Result<(), ClientError> {
        let url = format!("{}/profile/{}", self.base_url, id);
        self.runtime.block_on(async {
            let response = self.http.delete(&url).send().await?;
            http::check_status(response)?;
            Ok(())
        })
    }

    pub fn put_profile(&self, id: i64, profile: &Profile) -> Result<(), ClientError> {
        let url = format!("{}/profile/{}", self.base_url, id);
        self.runtime.block_on(async {
            let response = self.http.put(&url).json(profile).send().await?;
            http::check_status(response)?;
            Ok(())
        })
    }

    pub fn bad_request(&self) -> Result<Profile, ClientError> {
        let url = format!("{}/bad-request", self.base_url);
        self.runtime.block_on(async {
            let response = self.http.get(&url).send().await?;
            let response = http::check_status(response)?;
            Ok(response.json().await?)
        })
    }

    pub fn unsupported(&self) -> Result<Profile, ClientError> {
        let url = format!("{}/unsupported", self.base_url);
        self.runtime.block_on(async {
            let response = self.http.get(&url).send().await?;
            let response = http::check_status(response)?;
            Ok(response.json().await?)
        })
    }
}
