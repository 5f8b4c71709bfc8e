pub mod bias;
pub mod conflict;
pub mod dialectic;
pub mod types;

pub use bias::BiasDetector;
pub use conflict::ConflictAnalyzer;
pub use dialectic::DialecticAnalyzer;
pub use types::{ArgumentEntry, BiasReport, ConflictReport, DialecticSummary};
