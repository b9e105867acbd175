mod connection;
pub use connection::Connection;
pub use connection::ConnectionId;
pub use connection::ConnectionStatus;

mod job;
pub use job::Job;
pub use job::JobStatus;

mod sample;
pub use sample::SyncSample;

pub mod duration;
pub mod timestamp;
