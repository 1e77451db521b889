use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use billing_service::{BillingLedger, BillingService};
use coverage_service::CoverageCategory;

/// Main Medbill server state
#[derive(Clone)]
pub struct MedbillServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Billing service instance (catalog + calculator)
    pub billing: Arc<BillingService>,
    /// In-memory billing session registry
    pub sessions: Arc<RwLock<HashMap<Uuid, BillingSession>>>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Runtime environment, "development" or "production"
    pub environment: String,
}

impl ServerConfig {
    /// Load configuration from MEDBILL_* environment variables
    pub fn from_env() -> Self {
        Self {
            name: env::var("MEDBILL_SERVER_NAME")
                .unwrap_or_else(|_| "Medbill Engine".to_string()),
            environment: env::var("MEDBILL_ENV")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Medbill Engine".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// One clerk's bill-in-progress
///
/// Session-local and in-memory only; discarded when the process ends.
#[derive(Debug, Clone)]
pub struct BillingSession {
    pub id: Uuid,
    /// Free-text patient identifier (hospital number)
    pub patient_ref: String,
    /// Active coverage category; `Unspecified` until the clerk selects one
    pub category: CoverageCategory,
    pub ledger: BillingLedger,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BillingSession {
    /// Open a fresh session with an empty ledger
    pub fn open(patient_ref: String, category: CoverageCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            patient_ref,
            category,
            ledger: BillingLedger::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl MedbillServer {
    /// Create a new Medbill server instance
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            billing: Arc::new(BillingService::with_default_catalog()),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
