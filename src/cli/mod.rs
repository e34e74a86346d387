pub mod message;
pub mod rotors;
pub mod session;

pub use message::*;
pub use rotors::*;
pub use session::*;
