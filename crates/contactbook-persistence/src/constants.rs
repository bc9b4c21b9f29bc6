// DB constants
pub const DB_TABLE: &str = "table";
pub const DB_KEY: &str = "key";
pub const DB_COUNT: &str = "count";

pub const DB_SEARCH_TERM: &str = "search_term";
pub const DB_LIMIT: &str = "limit";
pub const DB_OFFSET: &str = "offset";
