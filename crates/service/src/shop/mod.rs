pub mod clock;
pub mod directory;
pub mod queries;
pub mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use directory::{DirectorySettings, InMemoryDirectory, RepairShopDirectory};
pub use state::ShopState;
