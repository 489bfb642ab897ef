use serde::{Deserialize, Serialize};

pub type FloatType = f64;

/// Identifier of a ship grid. Grids are assigned by the host engine; this
/// crate only ever compares them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GridId(pub u32);
