pub mod admin;
pub mod lifecycle;
pub mod oracle;
pub mod providers;
pub mod submit;

pub use admin::*;
pub use lifecycle::*;
pub use oracle::*;
pub use providers::*;
pub use submit::*;
