pub mod intent;
pub mod synthesizer;
pub mod types;

pub use intent::IntentResolver;
pub use synthesizer::ResponseSynthesizer;
pub use types::{Intent, PacketMeta, ResponsePacket};
