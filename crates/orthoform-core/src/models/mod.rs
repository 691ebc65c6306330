pub mod answer;
pub mod record;
pub mod review;
