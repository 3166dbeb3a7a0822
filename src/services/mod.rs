// linkstash services
// Pure logic with no owned state: URL handling, category detection,
// collection queries.

pub mod category_service;
pub mod search_service;
pub mod url_service;
