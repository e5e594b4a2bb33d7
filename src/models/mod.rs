pub mod record;

pub use record::AttendanceRecord;
