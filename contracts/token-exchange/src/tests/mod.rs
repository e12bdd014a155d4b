// Scenario tests for the exchange, grouped by entry point family.
// Every suite starts from the shared `TestSetup` fixture.
pub mod utils;
