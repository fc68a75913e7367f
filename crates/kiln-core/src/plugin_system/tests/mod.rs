mod manifest_tests;
mod discovery_tests;
