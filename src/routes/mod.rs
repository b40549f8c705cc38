/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated modules,
/// so that access control is applied explicitly at the module level (via Axum
/// layers) instead of being re-derived handler by handler.
///
/// The three modules map directly to the defined access tiers.

/// Routes accessible to all clients (marketing site reads, login, enquiry form).
pub mod public;

/// Routes protected by the plain-auth guard (`AuthUser`).
/// Requires a validated session token; no role check.
pub mod authenticated;

/// Routes restricted exclusively to holders of an 'admin' role token.
/// Covers every mutation endpoint plus the enquiry inbox.
pub mod admin;
