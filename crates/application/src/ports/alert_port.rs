//! User-facing alert port

#[cfg(test)]
use mockall::automock;

/// Port for the single blocking alert shown when a route cannot be built
#[cfg_attr(test, automock)]
pub trait AlertPort: Send + Sync {
    /// Show `message` to the user
    fn alert(&self, message: &str);
}
