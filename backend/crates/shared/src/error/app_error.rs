//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use super::report::ErrorReport;

/// Unified application error.
///
/// Built with a small builder API. The `message` is what the client sees and
/// is kept in Indonesian at the call sites; the `source` stays server-side and
/// only ends up in logs and in the [`ErrorReport`] of 5xx responses.
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Product tidak ditemukan");
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::new(ErrorKind::BadRequest, "Format email tidak valid")
///     .with_action("Periksa kembali email Anda");
/// assert_eq!(err.action(), Some("Periksa kembali email Anda"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    #[inline]
    pub fn too_many_requests(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message)
    }

    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Hint telling the user what to do next
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach the underlying error (server-side only)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Attach a plain-text cause when no error value is at hand
    #[inline]
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        self.with_source(Detail(detail.into()))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// Source chain joined with `: `, if any
    pub fn source_chain(&self) -> Option<String> {
        let mut current = self.source.as_deref().map(|e| e as &(dyn Error + 'static));
        let mut parts = Vec::new();
        while let Some(err) = current {
            parts.push(err.to_string());
            current = err.source();
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }

    /// Report for the central error reporter
    pub fn report(&self) -> ErrorReport {
        let report = ErrorReport::new(self.message.clone());
        match self.source_chain() {
            Some(detail) => report.with_detail(detail),
            None => report,
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Plain-text source used by [`AppError::with_detail`]
#[derive(Debug)]
struct Detail(String);

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Detail {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Token tidak ditemukan");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Token tidak ditemukan");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::too_many_requests("x").status_code(), 429);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_display_includes_action() {
        let err = AppError::new(ErrorKind::NotFound, "Order tidak ditemukan");
        assert_eq!(err.to_string(), "[Not Found] Order tidak ditemukan");

        let err = AppError::new(ErrorKind::BadRequest, "Plan tidak valid").with_action("Pilih plan lain");
        assert!(err.to_string().contains("Action:"));
    }

    #[test]
    fn test_source_chain_and_report() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
        let err = AppError::internal("Gagal membuat transaksi QRIS").with_source(io_err);
        assert!(err.source().is_some());
        assert_eq!(err.source_chain().as_deref(), Some("upstream timed out"));

        let report = err.report();
        assert_eq!(report.message, "Gagal membuat transaksi QRIS");
        assert_eq!(report.detail.as_deref(), Some("upstream timed out"));
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::internal("Format response QRIS tidak valid")
            .with_detail("missing payment_number");
        assert_eq!(err.source_chain().as_deref(), Some("missing payment_number"));
    }

    #[test]
    fn test_report_without_source() {
        let report = AppError::internal("Terjadi kesalahan server").report();
        assert!(report.detail.is_none());
    }
}
