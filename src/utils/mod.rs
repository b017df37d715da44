pub mod clock;
pub mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
