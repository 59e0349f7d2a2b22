// E-reputation scoring — month bucketing and sentiment aggregation.

pub mod aggregate;
pub mod months;
