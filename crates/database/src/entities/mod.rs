pub mod assignment;
pub mod employee;
pub mod employee_meeting;
pub mod meeting;
pub mod project;

pub use assignment as assignments;
pub use employee as employees;
pub use employee_meeting as employee_meetings;
pub use meeting as meetings;
pub use project as projects;
