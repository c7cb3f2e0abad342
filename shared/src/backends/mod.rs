mod native;

pub use native::Timer;
