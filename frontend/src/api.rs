pub mod notify;

pub use notify::GlooTransport;
