use thiserror::Error;

/// Rejected wheel configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item height must be a positive finite number, got {0}")]
    ItemHeight(f64),
    #[error("visible count must be at least 1")]
    VisibleCount,
    #[error("tween duration must be a positive finite number of milliseconds, got {0}")]
    TweenDuration(f64),
    #[error("spring stiffness and damping must be positive, got k={stiffness} c={damping}")]
    Spring { stiffness: f64, damping: f64 },
    #[error("attribute `{name}` has unparsable value `{value}`")]
    Attribute { name: String, value: String },
}
