use crate::identity::gravatar::RemoteImage;

const DEFAULT_ASSET: &str = "userpic/default.png";

/// Opaque image descriptor handed to the host rendering surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ImageSource {
    /// Bundled asset reference the host resolves locally.
    Asset(String),
    /// Remote image the host fetches (and may fail to load).
    Remote(RemoteImage),
}

impl ImageSource {
    /// The built-in fallback asset used when no default source is supplied.
    pub fn builtin_default() -> Self {
        Self::Asset(DEFAULT_ASSET.to_string())
    }

    /// Remote descriptor, when this source is remote.
    pub fn as_remote(&self) -> Option<&RemoteImage> {
        match self {
            Self::Remote(remote) => Some(remote),
            Self::Asset(_) => None,
        }
    }
}
