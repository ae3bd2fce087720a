pub mod color_file;
pub mod finder;
pub mod matcher;
pub mod normalize;
pub mod partition;
pub mod registry;
pub mod scorer;

pub use finder::Filter;
pub use matcher::FuzzyMatcher;
pub use normalize::normalize;
pub use partition::SystemPartition;
pub use registry::TintRegistry;
pub use scorer::{Ratio, Scorer, TokenSetRatio, WeightedRatio};
