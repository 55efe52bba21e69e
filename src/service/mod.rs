pub mod api_service;
pub mod appointments;
pub mod booking;
pub mod calendar;
pub mod doctor_filter;
pub mod favorites;
pub mod notifier;
pub mod reviews;
pub mod slots;
pub mod translation;
