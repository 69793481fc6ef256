// file: src/describer/mod.rs
// description: table and equation description capability with strategy selection
// reference: internal capability interfaces

pub mod remote;
pub mod rule_based;

pub use remote::RemoteDescriber;
pub use rule_based::RuleBasedDescriber;

use crate::config::DescriberConfig;
use crate::error::Result;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::info;

/// A capability that turns structured content into a single paragraph of
/// prose. The remote variant may block on network I/O; implementations must
/// degrade rather than fail (a hard error from a describer aborts nothing
/// upstream, the substitutor falls back to rule-based prose per item).
pub trait Describer: Send + Sync {
    /// Canonical name of this describer, for logging.
    fn name(&self) -> &str;

    fn describe_table<'a>(&'a self, rows: &'a [Vec<String>]) -> BoxFuture<'a, Result<String>>;

    fn describe_equation<'a>(&'a self, equation: &'a str) -> BoxFuture<'a, Result<String>>;
}

/// Pick the describer at construction time: remote when an API key is
/// configured, rule-based otherwise.
pub fn select_describer(config: &DescriberConfig) -> Arc<dyn Describer> {
    match config.api_key.as_deref() {
        Some(key) if !key.is_empty() => {
            info!("Using remote describer (model: {})", config.model);
            Arc::new(RemoteDescriber::new(config.clone()))
        }
        _ => {
            info!("No describer API key configured, using rule-based descriptions");
            Arc::new(RuleBasedDescriber::new())
        }
    }
}
