/// Stable keys under which snapshots live in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Snapshot written by the last notifying fetch cycle.
    Current,
    /// Snapshot carried over by the daily rotation job.
    Yesterday,
    /// Raw national total written by older deployments.
    LegacyTotal,
    /// Raw Stockholm count written by older deployments.
    LegacyStockholm,
}

impl StoreKey {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "covid-19:current",
            Self::Yesterday => "covid-19:yesterday",
            Self::LegacyTotal => "covid-19:total",
            Self::LegacyStockholm => "covid-19:stockholm",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
