mod harness;
mod validation_tests;
