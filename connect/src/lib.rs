pub use board::*;
pub use errors::*;
pub use session::*;
pub use visualization::*;
pub use win::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod session;
mod visualization;
mod win;
