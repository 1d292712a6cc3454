//! Student repository: persistence contract and test double

mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockStudentRepository;
pub use trait_::StudentRepository;
