//! Endpoint registry.
//!
//! Paths are constants grouped by resource and looked up by name, never
//! assembled per call.

/// User endpoints.
pub mod user {
    /// Discover the caller's own business.
    pub const DISCOVER: &str = "/api/v1/user/discover";
    /// Refine the caller's own business.
    pub const REFINE: &str = "/api/v1/user/refine";
}

/// Target business endpoints.
pub mod business {
    /// Discover a target business.
    pub const DISCOVER: &str = "/api/v1/business/discover";
    /// Refine a target business.
    pub const REFINE: &str = "/api/v1/business/refine";
    /// Score compatibility between two businesses.
    pub const COMPATIBILITY: &str = "/api/v1/business/compatibility";
}

/// Campaign endpoints.
pub mod campaign {
    /// Generate campaigns for a target business.
    pub const CREATE: &str = "/api/v1/campaigns/create";
    /// Refine generated campaigns.
    pub const REFINE: &str = "/api/v1/campaigns/refine";
}

/// Every registered path.
pub const ALL: [&str; 7] = [
    user::DISCOVER,
    user::REFINE,
    business::DISCOVER,
    business::REFINE,
    business::COMPATIBILITY,
    campaign::CREATE,
    campaign::REFINE,
];
