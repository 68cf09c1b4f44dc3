use speech_relay::{
    controllers::{pages::PagesController, speech::SpeechController},
    domain::speech::SpeechService,
    infrastructure::{
        config::SpeechCredentials,
        http::create_router,
        repositories::{AzureSpeechRepository, HardcodedLanguageCatalogRepository, SpeechEndpoints},
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod fake_azure;

use api_client::TestClient;
use fake_azure::FakeAzure;

pub const TEST_SUBSCRIPTION_KEY: &str = "test-subscription-key";
pub const TEST_REGION: &str = "westeurope";

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// A running relay wired to a fake Azure provider
pub struct TestContext {
    pub client: TestClient,
    pub upstream: FakeAzure,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let upstream = FakeAzure::start().await;
            let endpoints = SpeechEndpoints {
                token_url: upstream.token_url(),
                synthesis_url: upstream.synthesis_url(),
            };
            let client = start_relay(endpoints).await;

            Self { client, upstream }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers are dropped with the tokio runtime of the test
        }
    }
}

/// Relay whose provider endpoints refuse connections
pub async fn unreachable_relay() -> TestClient {
    start_relay(SpeechEndpoints {
        token_url: "http://127.0.0.1:9/sts/v1.0/issueToken".to_string(),
        synthesis_url: "http://127.0.0.1:9/cognitiveservices/v1".to_string(),
    })
    .await
}

async fn start_relay(endpoints: SpeechEndpoints) -> TestClient {
    let credentials = SpeechCredentials {
        subscription_key: TEST_SUBSCRIPTION_KEY.to_string(),
        region: TEST_REGION.to_string(),
    };

    let speech_repo = Arc::new(AzureSpeechRepository::with_endpoints(credentials, endpoints));
    let catalog_repo = Arc::new(HardcodedLanguageCatalogRepository::new());
    let speech_service = Arc::new(SpeechService::new(speech_repo, catalog_repo.clone()));

    let app = create_router(
        STATIC_DIR,
        Arc::new(SpeechController::new(speech_service)),
        Arc::new(PagesController::new(catalog_repo)),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&format!("http://{}", addr))
}
