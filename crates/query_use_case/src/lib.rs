mod query_use_case;

pub use self::query_use_case::*;
