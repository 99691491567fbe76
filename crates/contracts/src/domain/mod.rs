pub mod a001_service_category;
pub mod a002_reservation;
pub mod a003_account;
pub mod a004_notice;
pub mod a005_banner;
pub mod a006_inquiry;
pub mod a007_review;
pub mod a008_customer;
pub mod a009_manager;
