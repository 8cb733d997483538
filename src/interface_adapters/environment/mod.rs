pub mod mock;
pub mod replay;

pub use mock::MockEnvironment;
pub use replay::ReplayEnvironment;
