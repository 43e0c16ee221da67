//! Service attribute behaviour across both Gemini services.

use std::sync::Arc;

use gemini_connector::attributes::MODEL_ID_KEY;
use gemini_connector::providers::{
    GoogleAiGeminiChatCompletionService, VertexAiGeminiChatCompletionService,
};
use gemini_connector::service::ChatCompletionService;

#[test]
fn vertex_attributes_contain_model_id() {
    let service =
        VertexAiGeminiChatCompletionService::new("fake-model", "key", "location", "project");

    assert_eq!(service.attributes().get(MODEL_ID_KEY), Some("fake-model"));
}

#[test]
fn repeated_reads_return_same_value() {
    let service =
        VertexAiGeminiChatCompletionService::new("fake-model", "key", "location", "project");

    let reads: Vec<Option<&str>> = (0..3).map(|_| service.attributes().get(MODEL_ID_KEY)).collect();
    assert!(reads.iter().all(|r| *r == Some("fake-model")));
}

#[test]
fn model_id_round_trips_for_arbitrary_strings() {
    let cases = ["m", "", "gemini-1.5-pro-002", "ünïcödé", " padded ", "a/b:c"];
    for model in cases {
        let vertex = VertexAiGeminiChatCompletionService::new(model, "k", "l", "p");
        assert_eq!(vertex.attributes().get(MODEL_ID_KEY), Some(model));

        let google = GoogleAiGeminiChatCompletionService::new(model, "k");
        assert_eq!(google.attributes().get(MODEL_ID_KEY), Some(model));
    }
}

#[test]
fn services_work_as_trait_objects() {
    let services: Vec<Box<dyn ChatCompletionService>> = vec![
        Box::new(VertexAiGeminiChatCompletionService::new(
            "vertex-model",
            "k",
            "us-central1",
            "proj",
        )),
        Box::new(GoogleAiGeminiChatCompletionService::new("google-model", "k")),
    ];

    let ids: Vec<Option<&str>> = services.iter().map(|s| s.model_id()).collect();
    assert_eq!(ids, vec![Some("vertex-model"), Some("google-model")]);
}

#[test]
fn attributes_readable_from_many_threads() {
    let service = Arc::new(VertexAiGeminiChatCompletionService::new(
        "fake-model",
        "key",
        "location",
        "project",
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let svc = Arc::clone(&service);
            std::thread::spawn(move || svc.attributes().get(MODEL_ID_KEY).map(String::from))
        })
        .collect();

    for handle in handles {
        let value = handle.join().ok().flatten();
        assert_eq!(value.as_deref(), Some("fake-model"));
    }
}
