// linkstash state managers
// Managers own mutable state; the link manager owns the in-memory link
// collection mirrored from its backing store.

pub mod link_manager;
