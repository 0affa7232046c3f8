pub mod admission;
pub mod energy;
pub mod enums;
pub mod fuel;
pub mod guardian;
pub mod oil;
pub mod roadtrip;
pub mod student;
pub mod student_fee;
