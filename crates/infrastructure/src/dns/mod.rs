pub mod message_builder;
pub mod ptr_resolver;
pub mod response_parser;
pub mod transport;

pub use message_builder::MessageBuilder;
pub use ptr_resolver::PtrHostnameResolver;
pub use response_parser::{PtrResponse, ResponseParser};
