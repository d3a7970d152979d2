//! User aggregate
//!
//! A user owns notes. Users are created, listed, retrieved, renamed and
//! deleted through [`UserService`].

mod entity;
mod ids;
mod name;
mod ports;
mod service;

pub use entity::User;
pub use ids::UserId;
pub use name::UserName;
pub use ports::UserServicePort;
pub use service::UserService;
