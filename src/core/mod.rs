pub mod backup;
pub mod clock;
pub mod journal;
pub mod log;
pub mod roster;
pub mod session;
pub mod store;
