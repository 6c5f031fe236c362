//! Pakasir QRIS gateway client

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::{PaymentGateway, QrisPayment};
use crate::error::{UpstreamError, UpstreamResult};
use crate::infra::{read_json, text_field};

const QR_RENDER_URL: &str = "https://quickchart.io/qr";

#[derive(Debug, Clone)]
pub struct PakasirConfig {
    pub base_url: String,
    pub project: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for PakasirConfig {
    fn default() -> Self {
        Self {
            base_url: "https://app.pakasir.com".to_string(),
            project: String::new(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PakasirConfig {
    pub fn new(project: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct CreateTransaction<'a> {
    project: &'a str,
    api_key: &'a str,
    order_id: &'a str,
    amount: u64,
}

#[derive(Debug, Clone)]
pub struct PakasirClient {
    http: reqwest::Client,
    config: PakasirConfig,
}

impl PakasirClient {
    pub fn new(config: PakasirConfig) -> UpstreamResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.base_url, path)
    }

    /// Hosted image when the gateway issued a payment code, otherwise a
    /// rendered QR of the raw payload.
    fn qr_url(&self, payment_code: Option<&str>, qris_string: Option<&str>) -> Option<String> {
        if let Some(code) = payment_code {
            return Some(format!("{}/qris/{code}.png", self.config.base_url));
        }
        let data = qris_string?;
        reqwest::Url::parse_with_params(
            QR_RENDER_URL,
            &[("text", data), ("size", "500"), ("format", "png")],
        )
        .ok()
        .map(String::from)
    }

    fn error_of(body: &Value) -> Option<String> {
        match body.get("error")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl PaymentGateway for PakasirClient {
    async fn create_qris(&self, order_id: &str, amount: u64) -> UpstreamResult<QrisPayment> {
        let body = CreateTransaction {
            project: &self.config.project,
            api_key: &self.config.api_key,
            order_id,
            amount,
        };

        let resp = self
            .http
            .post(self.api_url("/transactioncreate/qris"))
            .json(&body)
            .send()
            .await?;
        let data = read_json(resp, Self::error_of).await?;

        let payment = &data["payment"];
        let payment_code = text_field(&data["code"]).or_else(|| text_field(&payment["code"]));
        let qris_string = text_field(&data["qris_string"])
            .or_else(|| text_field(&payment["qris_string"]))
            .or_else(|| text_field(&payment["payment_number"]))
            .or_else(|| text_field(&data["payment_number"]));

        let qr_url = self
            .qr_url(payment_code.as_deref(), qris_string.as_deref())
            .ok_or(UpstreamError::Malformed("no payment code or QRIS payload"))?;

        tracing::debug!(order_id, has_code = payment_code.is_some(), "QRIS transaction created");

        Ok(QrisPayment {
            payment_code,
            qris_string,
            qr_url,
        })
    }

    async fn transaction_status(&self, order_id: &str, amount: u64) -> UpstreamResult<String> {
        let amount = amount.to_string();
        let resp = self
            .http
            .get(self.api_url("/transactiondetail"))
            .query(&[
                ("project", self.config.project.as_str()),
                ("amount", amount.as_str()),
                ("order_id", order_id),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;
        let data = read_json(resp, Self::error_of).await?;

        let tx = match &data["transaction"] {
            Value::Object(_) => &data["transaction"],
            _ => &data,
        };
        Ok(text_field(&tx["status"]).unwrap_or_default())
    }
}
