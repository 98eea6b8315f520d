//! Domain models for the Nyumba Property Marketplace

mod apartment;
mod commercial;
mod house;
mod lodge;
mod message;
mod property;
mod reservation;
mod user;

pub use apartment::*;
pub use commercial::*;
pub use house::*;
pub use lodge::*;
pub use message::*;
pub use property::*;
pub use reservation::*;
pub use user::*;
