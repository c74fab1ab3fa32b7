//! `From` implementations bridging `timelog_config` types to `timelog_core` types.

use crate::script::Composition;

impl From<timelog_config::Variant> for Composition {
    fn from(v: timelog_config::Variant) -> Self {
        match v {
            timelog_config::Variant::Monolithic => Composition::Monolithic,
            timelog_config::Variant::Horizontal => Composition::Horizontal,
            timelog_config::Variant::Vertical => Composition::Vertical,
        }
    }
}

impl From<&timelog_config::Config> for Composition {
    fn from(c: &timelog_config::Config) -> Self {
        c.composition.variant.into()
    }
}
