pub mod request_sequence;

pub use request_sequence::RequestSequence;
