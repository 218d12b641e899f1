pub mod athlete_type;
pub mod comparison;
pub mod question;
pub mod subscale;
pub mod test_result;
