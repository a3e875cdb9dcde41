mod not_found;
mod programs;

pub use not_found::NotFound;
pub use programs::Programs;
