//! Location domain.

use mqlgen_expr::FixedType;

use crate::semantics::fixed_type;

pub use crate::people::BIRTH_PLACE_OF;

pub const IS_PLACE: FixedType = fixed_type("freebase:location.location");
pub const IS_COUNTRY: FixedType = fixed_type("freebase:location.country");
