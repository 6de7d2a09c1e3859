use std::sync::Arc;

use dashmap::DashMap;
use shared::configurator::PriceBreakdown;

use crate::catalog::CatalogStore;
use crate::core::Config;
use crate::core::error::Result;
use crate::leads::{LeadService, LogNotifier, Notifier, WebhookNotifier};

/// Quote cache
///
/// DashMap keyed by the canonical selection key (product id plus the
/// normalized selection), holding computed price breakdowns. Lock-free
/// reads keep repeated quotes for popular configurations cheap. The
/// catalog is immutable for the process lifetime, so entries never go
/// stale and eviction is unnecessary.
#[derive(Debug, Default)]
pub struct QuoteCache {
    entries: DashMap<String, PriceBreakdown>,
}

impl QuoteCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Look up a cached breakdown for a selection key
    pub fn get(&self, key: &str) -> Option<PriceBreakdown> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    /// Store a computed breakdown under its selection key
    pub fn store(&self, key: String, breakdown: PriceBreakdown) {
        self.entries.insert(key, breakdown);
    }

    /// Number of cached selections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Server state holding shared references to every service
///
/// Cloning is cheap: everything behind the config is an `Arc`.
///
/// # Components
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | catalog | Arc<CatalogStore> | In-memory catalog |
/// | leads | Arc<LeadService> | Lead validation and notification |
/// | quotes | Arc<QuoteCache> | Memoized price breakdowns |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory catalog, loaded once at startup
    pub catalog: Arc<CatalogStore>,
    /// Lead intake service
    pub leads: Arc<LeadService>,
    /// Memoized price breakdowns
    pub quotes: Arc<QuoteCache>,
}

impl ServerState {
    /// Create server state from already-built parts
    ///
    /// Usually [`ServerState::initialize`] is used instead; tests build
    /// state directly from an in-memory catalog.
    pub fn new(
        config: Config,
        catalog: Arc<CatalogStore>,
        leads: Arc<LeadService>,
        quotes: Arc<QuoteCache>,
    ) -> Self {
        Self {
            config,
            catalog,
            leads,
            quotes,
        }
    }

    /// Initialize server state from configuration
    ///
    /// Loads and validates the catalog seed file, then wires the lead
    /// notifier: webhook delivery when `LEAD_WEBHOOK_URL` is set, local
    /// logging otherwise.
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = Arc::new(CatalogStore::load_file(&config.catalog_path)?);

        let notifier: Arc<dyn Notifier> = match &config.lead_webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(
                url.clone(),
                config.lead_webhook_timeout_ms,
            )?),
            None => Arc::new(LogNotifier),
        };
        let leads = Arc::new(LeadService::new(notifier));

        Ok(Self::new(
            config.clone(),
            catalog,
            leads,
            Arc::new(QuoteCache::new()),
        ))
    }

    /// Catalog accessor
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Log the startup summary banner
    pub fn print_startup_summary(&self) {
        let lead_sink = match &self.config.lead_webhook_url {
            Some(_) => "webhook",
            None => "log",
        };
        tracing::info!(
            "╔══════════════════════════════════════════════════════════════════════╗"
        );
        tracing::info!(
            "║                     TRAILER STOREFRONT - READY                       ║"
        );
        tracing::info!(
            "╚══════════════════════════════════════════════════════════════════════╝"
        );
        tracing::info!("  Environment : {}", self.config.environment);
        tracing::info!("  Products    : {}", self.catalog.product_count());
        tracing::info!("  Categories  : {}", self.catalog.category_count());
        tracing::info!("  Lead sink   : {}", lead_sink);
        tracing::info!(
            "  HTTP Server : http://{}:{}",
            self.config.host,
            self.config.port
        );
        tracing::info!(
            "════════════════════════════════════════════════════════════════════════"
        );
    }
}
