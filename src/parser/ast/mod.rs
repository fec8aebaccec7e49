pub mod query;
pub use query::*;

pub mod projection;
pub use projection::*;

pub mod source;
pub use source::*;

pub mod join;
pub use join::*;

pub mod conditions;
pub use conditions::*;

pub mod where_parser;
pub use where_parser::*;

pub mod having_parser;
pub use having_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod order_by;
pub use order_by::*;

pub mod limit_offset_parser;
pub use limit_offset_parser::*;
