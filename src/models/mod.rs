pub mod presence;
pub mod weekday;

pub use presence::*;
pub use weekday::*;
