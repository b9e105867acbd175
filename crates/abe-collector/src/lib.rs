mod collect;
pub use collect::Collector;

mod error;
pub use error::CollectError;

mod handler;
pub use handler::ScrapeHandler;
pub use handler::ScrapeOutput;
