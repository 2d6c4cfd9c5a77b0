//! Type context configuration.

use rsc_diagnostic::DiagnosticConfig;
use rsc_ir::CrateNum;

/// Step budget for bounded walks over the type graph.
pub const DEFAULT_RECURSION_LIMIT: u32 = 1024 * 16;

/// First node id the context hands out.
///
/// Ids below this are reserved for the driver's synthetic roots.
const DEFAULT_FIRST_NODE_ID: u32 = 7;

/// Configuration for a `TyCtx`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TyCtxConfig {
    /// Maximum indirection hops `destructure` follows, and maximum
    /// nesting depth `clone_type` descends, before giving up.
    pub recursion_limit: u32,
    /// Raw value of the first id `next_node_id` returns.
    pub first_node_id: u32,
    /// Crate stamped on identities minted by the context itself.
    pub current_crate: CrateNum,
    /// Limits for the queue of internal diagnostics.
    pub diagnostics: DiagnosticConfig,
}

impl Default for TyCtxConfig {
    fn default() -> Self {
        TyCtxConfig {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            first_node_id: DEFAULT_FIRST_NODE_ID,
            current_crate: CrateNum::UNKNOWN,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl TyCtxConfig {
    /// Use a different recursion limit.
    #[must_use]
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Start node id allocation at `first`.
    #[must_use]
    pub fn with_first_node_id(mut self, first: u32) -> Self {
        self.first_node_id = first;
        self
    }

    /// Set the crate the session is compiling.
    #[must_use]
    pub fn with_current_crate(mut self, crate_num: CrateNum) -> Self {
        self.current_crate = crate_num;
        self
    }

    /// Keep every queued diagnostic (for testing).
    #[must_use]
    pub fn with_unlimited_diagnostics(mut self) -> Self {
        self.diagnostics = DiagnosticConfig::unlimited();
        self
    }
}
