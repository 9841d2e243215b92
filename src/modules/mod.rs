pub mod admin;
pub mod advice;
pub mod auth;
pub mod contact;
pub mod depression_test;
pub mod expert;
pub mod payment;
pub mod student;

pub use self::auth::model::LoginRequest;
pub use self::depression_test::model::TestResult;
