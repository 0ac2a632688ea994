// Domain layer: measurement values, bounds, money and the parcel aggregate,
// plus the ports (traits) the rule engine is written against.

pub mod bound;
pub mod measure;
pub mod money;
pub mod parcel;
pub mod ports;
