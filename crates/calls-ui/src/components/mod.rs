//! Yew components exported by the calls UI crate.

pub mod icons;
