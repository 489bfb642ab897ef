mod ranges;
pub use self::ranges::*;

mod store;
pub use self::store::*;
