mod placement;
pub use self::placement::*;

mod zones;
pub use self::zones::*;
