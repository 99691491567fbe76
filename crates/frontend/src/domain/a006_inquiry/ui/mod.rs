pub mod admin;
pub mod my_inquiries;
