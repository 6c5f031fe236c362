//! Application Configuration

#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Panel URL handed to buyers with their credentials
    pub panel_domain: String,
    /// Domain of the generated panel account emails
    pub account_email_domain: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            panel_domain: "https://panel.example.com".to_string(),
            account_email_domain: "panel.store".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn new(panel_domain: impl Into<String>) -> Self {
        Self {
            panel_domain: panel_domain.into(),
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self::new("http://localhost:8080")
    }
}
