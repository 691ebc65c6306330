mod common;

pub mod native_knee;
pub mod one_year;
pub mod post_op;
pub mod pre_op;
pub mod unplanned_return;
