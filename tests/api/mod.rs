//! API Tests

mod invitation_tests;
