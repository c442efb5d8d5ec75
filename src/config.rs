//! Decode limits
//!
//! Caps applied to wire-supplied lengths before any allocation they would
//! drive.

/// Default cap on any single byte section (16 MB)
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Default cap on the item count of one package
pub const DEFAULT_MAX_PACKAGE_ITEMS: usize = 1024;

/// Limits applied while decoding
///
/// A length prefix over its limit makes the whole frame malformed; the
/// decoder rejects it before allocating.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Max size of any single byte section (option payload, key, value)
    pub max_payload_size: usize,

    /// Max number of items accepted in one package
    pub max_package_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            max_package_items: DEFAULT_MAX_PACKAGE_ITEMS,
        }
    }
}

impl Limits {
    /// Create a new limits builder
    pub fn builder() -> LimitsBuilder {
        LimitsBuilder::default()
    }
}

/// Builder for Limits
#[derive(Default)]
pub struct LimitsBuilder {
    limits: Limits,
}

impl LimitsBuilder {
    /// Set the max size of any single byte section
    pub fn max_payload_size(mut self, size: usize) -> Self {
        self.limits.max_payload_size = size;
        self
    }

    /// Set the max number of items accepted in one package
    pub fn max_package_items(mut self, count: usize) -> Self {
        self.limits.max_package_items = count;
        self
    }

    pub fn build(self) -> Limits {
        self.limits
    }
}
