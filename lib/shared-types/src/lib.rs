mod faculty_id;
mod macros;
mod record_id;
mod template_id;
mod university_id;

pub use faculty_id::FacultyId;
pub use record_id::RecordId;
pub use template_id::TemplateId;
pub use university_id::UniversityId;
