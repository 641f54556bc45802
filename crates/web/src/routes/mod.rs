pub mod health;
pub mod testimonials;
