pub mod constants;
pub mod response;
pub mod types;

pub use constants::*;
pub use response::{LegacyResponse, RestResponse};
pub use types::*;
