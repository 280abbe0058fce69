pub mod grading;
pub mod home;
pub mod loading;
pub mod question;
pub mod quiz;
pub mod quiz_intro;
pub mod result;
pub mod review;
pub mod uploads;
