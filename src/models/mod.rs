mod audit_log;
mod subscription;
mod user;

pub use audit_log::*;
pub use subscription::*;
pub use user::*;
