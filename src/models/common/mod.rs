pub mod choices;
pub mod pagination;
pub mod query;
pub mod response;
pub mod scope;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use query::ListQuery;
pub use response::{ActionStatus, ApiResponse};
pub use scope::RowScope;
