//! Wire contracts and client-side business rules of the home-service booking
//! platform. Shared by every client; contains no I/O.

pub mod domain;
pub mod shared;
pub mod system;
