pub mod filter;
pub mod projection;
pub mod selection;
pub mod velocity;
