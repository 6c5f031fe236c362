//! In-crate fakes for the upstream ports

use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use captcha::{CaptchaResult, HumanVerifier};

use crate::domain::ports::{
    HostingPanel, NewPanelAccount, NewPanelServer, PanelAccount, PanelServer, PaymentGateway,
    QrisPayment,
};
use crate::error::{UpstreamError, UpstreamResult};

/// Gateway answering with a settable status
#[derive(Debug)]
pub struct FakeGateway {
    pub status: Mutex<String>,
    pub reject_create: Option<String>,
    pub polls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: Mutex::new(status.to_string()),
            reject_create: None,
            polls: AtomicUsize::new(0),
        }
    }

    pub fn set_status(&self, status: &str) {
        *self.status.lock().unwrap() = status.to_string();
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

impl PaymentGateway for FakeGateway {
    async fn create_qris(&self, order_id: &str, _amount: u64) -> UpstreamResult<QrisPayment> {
        if let Some(message) = &self.reject_create {
            return Err(UpstreamError::Rejected(message.clone()));
        }
        Ok(QrisPayment {
            payment_code: Some(format!("code-{order_id}")),
            qris_string: None,
            qr_url: format!("https://qr.test/{order_id}.png"),
        })
    }

    async fn transaction_status(&self, _order_id: &str, _amount: u64) -> UpstreamResult<String> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status.lock().unwrap().clone())
    }
}

/// Panel that records what it was asked to do
#[derive(Debug, Default)]
pub struct FakePanel {
    pub fail_with: Option<String>,
    pub accounts: Mutex<Vec<NewPanelAccount>>,
    pub servers: Mutex<Vec<NewPanelServer>>,
    pub annotations: Mutex<Vec<(u64, String)>>,
}

impl FakePanel {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn servers_created(&self) -> usize {
        self.servers.lock().unwrap().len()
    }
}

impl HostingPanel for FakePanel {
    async fn create_account(&self, account: &NewPanelAccount) -> UpstreamResult<PanelAccount> {
        if let Some(message) = &self.fail_with {
            return Err(UpstreamError::Rejected(message.clone()));
        }
        let mut accounts = self.accounts.lock().unwrap();
        accounts.push(account.clone());
        Ok(PanelAccount {
            id: accounts.len() as u64,
            username: account.username.clone(),
            email: account.email.clone(),
        })
    }

    async fn create_server(&self, server: &NewPanelServer) -> UpstreamResult<PanelServer> {
        let mut servers = self.servers.lock().unwrap();
        servers.push(server.clone());
        Ok(PanelServer {
            id: 100 + servers.len() as u64,
        })
    }

    async fn annotate_server(&self, server_id: u64, description: &str) -> UpstreamResult<()> {
        self.annotations
            .lock()
            .unwrap()
            .push((server_id, description.to_string()));
        Ok(())
    }
}

/// Verifier with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FakeVerifier(pub bool);

impl HumanVerifier for FakeVerifier {
    async fn verify(&self, _response: &str, _remote_ip: Option<IpAddr>) -> CaptchaResult<bool> {
        Ok(self.0)
    }
}
