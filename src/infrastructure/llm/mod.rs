mod fireworks_client;

pub use fireworks_client::{DEFAULT_BASE_URL, FireworksClient};
