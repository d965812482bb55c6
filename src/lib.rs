pub mod forward;
pub mod http;
pub mod lambda_structure;
pub mod result;
