pub mod assignment;
pub mod common;
pub mod employee;
pub mod meeting;
pub mod project;
