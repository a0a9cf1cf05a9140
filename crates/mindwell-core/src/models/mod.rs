pub mod appointment;
pub mod medication;
pub mod screening;
pub mod symptom;
