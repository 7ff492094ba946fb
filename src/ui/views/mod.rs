pub mod exam;
pub mod home;
pub mod practice;
pub mod question_card;
pub mod random;
pub mod wrong;
