pub mod course;

pub use course::{Course, CoursePage, FieldErrors, validate_name};
