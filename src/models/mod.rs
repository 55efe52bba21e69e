pub mod appointment;
pub mod doctor;
pub mod preferences;
pub mod review;
pub mod slot;
pub mod specialty;
