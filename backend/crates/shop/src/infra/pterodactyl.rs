//! Pterodactyl application API client

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Value, json};

use crate::domain::ports::{
    HostingPanel, NewPanelAccount, NewPanelServer, PanelAccount, PanelServer,
};
use crate::error::{UpstreamError, UpstreamResult};
use crate::infra::{read_json, text_field};

#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Panel base URL, e.g. `https://panel.example.com`
    pub domain: String,
    /// Application API key (`ptla_…`)
    pub api_key: String,
    pub nest_id: u64,
    pub egg_id: u64,
    pub location_id: u64,
    pub docker_image: String,
    pub timeout: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            domain: "https://panel.example.com".to_string(),
            api_key: String::new(),
            nest_id: 5,
            egg_id: 15,
            location_id: 1,
            docker_image: "ghcr.io/parkervcp/yolks:nodejs_18".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PanelConfig {
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_egg(mut self, nest_id: u64, egg_id: u64) -> Self {
        self.nest_id = nest_id;
        self.egg_id = egg_id;
        self
    }

    pub fn with_location(mut self, location_id: u64) -> Self {
        self.location_id = location_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PterodactylClient {
    http: reqwest::Client,
    config: PanelConfig,
}

impl PterodactylClient {
    pub fn new(config: PanelConfig) -> UpstreamResult<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| UpstreamError::Malformed("panel API key is not a valid header value"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn domain(&self) -> &str {
        &self.config.domain
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/application{}", self.config.domain, path)
    }

    /// `errors[0].detail` of a panel error body
    fn error_of(body: &Value) -> Option<String> {
        let errors = body.get("errors")?.as_array()?;
        let first = errors.first()?;
        Some(text_field(&first["detail"]).unwrap_or_else(|| first.to_string()))
    }

    fn id_of(body: &Value) -> UpstreamResult<u64> {
        body["attributes"]["id"]
            .as_u64()
            .ok_or(UpstreamError::Malformed("attributes.id"))
    }

    async fn egg_startup(&self) -> UpstreamResult<String> {
        let url = self.api_url(&format!(
            "/nests/{}/eggs/{}",
            self.config.nest_id, self.config.egg_id
        ));
        let resp = self.http.get(url).send().await?;
        let data = read_json(resp, Self::error_of).await?;
        text_field(&data["attributes"]["startup"]).ok_or(UpstreamError::Malformed("egg startup"))
    }
}

impl HostingPanel for PterodactylClient {
    async fn create_account(&self, account: &NewPanelAccount) -> UpstreamResult<PanelAccount> {
        let body = json!({
            "email": account.email,
            "username": account.username.to_lowercase(),
            "first_name": account.first_name,
            "last_name": account.last_name,
            "language": "en",
            "password": account.password,
        });

        let resp = self.http.post(self.api_url("/users")).json(&body).send().await?;
        let data = read_json(resp, Self::error_of).await?;

        let attributes = &data["attributes"];
        Ok(PanelAccount {
            id: Self::id_of(&data)?,
            username: text_field(&attributes["username"]).unwrap_or_else(|| account.username.clone()),
            email: text_field(&attributes["email"]).unwrap_or_else(|| account.email.clone()),
        })
    }

    async fn create_server(&self, server: &NewPanelServer) -> UpstreamResult<PanelServer> {
        let startup = self.egg_startup().await?;

        let body = json!({
            "name": server.name,
            "description": server.description,
            "user": server.owner_id,
            "egg": self.config.egg_id,
            "docker_image": self.config.docker_image,
            "startup": startup,
            "environment": {
                "INST": "npm",
                "USER_UPLOAD": "0",
                "AUTO_UPDATE": "0",
                "CMD_RUN": "npm start",
            },
            "limits": {
                "memory": server.limits.ram,
                "swap": 0,
                "disk": server.limits.disk,
                "io": 500,
                "cpu": server.limits.cpu,
            },
            "feature_limits": {
                "databases": 5,
                "backups": 5,
                "allocations": 5,
            },
            "deploy": {
                "locations": [self.config.location_id],
                "dedicated_ip": false,
                "port_range": [],
            },
        });

        let resp = self
            .http
            .post(self.api_url("/servers"))
            .json(&body)
            .send()
            .await?;
        let data = read_json(resp, Self::error_of).await?;

        Ok(PanelServer {
            id: Self::id_of(&data)?,
        })
    }

    async fn annotate_server(&self, server_id: u64, description: &str) -> UpstreamResult<()> {
        let resp = self
            .http
            .patch(self.api_url(&format!("/servers/{server_id}")))
            .json(&json!({ "description": description }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(crate::infra::status_error(status));
        }
        Ok(())
    }
}
