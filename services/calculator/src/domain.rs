// Domain layer modules
pub mod error_wording;
pub mod gateway;
pub mod operand;
pub mod operation;
pub mod query_schema;
pub mod route;

// Re-exports
pub use error_wording::ErrorWording;
pub use gateway::{GatewayRequest, GatewayResponse};
pub use operand::{parse_integer, Operands, ValidationError, VAL1, VAL2};
pub use operation::Operation;
pub use query_schema::{QueryValidator, SchemaViolation};
pub use route::Route;
