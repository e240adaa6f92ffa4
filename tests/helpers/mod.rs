#![allow(dead_code)]

mod fake_services;
mod mock_server;

pub use fake_services::{
    FakeLlmClient, FakeSpeechSynthesizer, FakeTranscriptionService, RemoteCall, snapshot,
    snapshot_with_words,
};
pub use mock_server::start_mock_server;
