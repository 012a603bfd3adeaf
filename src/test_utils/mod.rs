pub mod fakes;
pub mod fixtures;
pub mod mocks;

pub use fakes::GatedIdentity;
pub use mocks::MockIdentity;
