mod complaint_test;
mod helpers;
