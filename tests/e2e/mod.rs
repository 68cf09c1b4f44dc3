// End-to-end tests for the Speech Relay API
//
// Each test gets its own relay listening on an ephemeral port, wired exactly as
// in production except that the Azure endpoints point at a local fake provider.
// The fake records every request it receives so tests can assert on the SSML
// and headers that would have been sent to Azure.
//
// Architecture:
// - FakeAzure: axum server standing in for the token and synthesis endpoints
// - TestContext: relay router + fake provider, set up via test-context hooks
// - TestClient: hyper client talking to the relay over real HTTP

mod helpers;
mod test_health;
