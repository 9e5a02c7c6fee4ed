use crate::container::TypeTag;

/// Error taxonomy for the container, codec, image, and animation layers.
///
/// Checksum mismatches, palette-size mismatches, and format confusion are
/// deliberately not variants here: those are logged warnings with no effect
/// on control flow, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("container error: {0}")]
    Container(String),

    #[error("entry not found (type={type_tag:?}, id={id:?})")]
    NotFound {
        type_tag: Option<TypeTag>,
        id: Option<u16>,
    },

    #[error("image decode error: {0}")]
    ImageDecode(String),

    #[error("assembly error: {0}")]
    Assembly(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
