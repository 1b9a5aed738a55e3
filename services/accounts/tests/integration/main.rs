mod helpers;
mod profile_test;
mod session_test;
