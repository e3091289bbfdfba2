/// Causal graph errors.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("unknown anchor: {id}")]
    UnknownAnchor { id: String },

    #[error("self-loop rejected on anchor {id}")]
    SelfLoop { id: String },

    #[error("duplicate anchor: {id}")]
    DuplicateAnchor { id: String },
}
