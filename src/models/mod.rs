pub mod place;
pub mod review;
pub mod session;
