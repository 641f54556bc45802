pub mod testimonial_repo;
