//! Locally-owned, revocable binary artifacts.
//!
//! Generation results are materialized into [`MediaArtifact`]s: binary
//! content the client owns outright, decoupled from any provider URL
//! lifetime. Artifacts are deliberately not `Clone`: each one has a single
//! owner, and revoking it (dropping it) frees the buffer.

use base64::prelude::*;

/// Binary generation output with its MIME type.
#[derive(Debug)]
pub struct MediaArtifact {
    // Immutable once materialized.
    data: Vec<u8>,
    mime_type: String,
}

impl MediaArtifact {
    pub(crate) fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the artifact and hand the buffer to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Self-contained, directly displayable form
    /// (`data:<mime>;base64,<payload>`). No further fetch is required.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64_STANDARD.encode(&self.data)
        )
    }
}

/// Single-owner output slot for one logical result (the latest image, the
/// latest video preview).
///
/// Installing a new artifact revokes the previous one first, so the slot
/// never holds two live artifacts and repeated generations cannot
/// accumulate transient buffers. Dropping the slot revokes whatever it
/// holds.
#[derive(Debug, Default)]
pub struct ArtifactSlot {
    current: Option<MediaArtifact>,
}

impl ArtifactSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new artifact, revoking the previous occupant.
    pub fn install(&mut self, artifact: MediaArtifact) {
        if self.current.is_some() {
            tracing::debug!("revoking superseded artifact");
        }
        self.current = Some(artifact);
    }

    /// Explicitly revoke the held artifact, if any.
    pub fn revoke(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&MediaArtifact> {
        self.current.as_ref()
    }

    /// Hand ownership of the held artifact to the caller.
    pub fn take(&mut self) -> Option<MediaArtifact> {
        self.current.take()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_replaces_the_previous_artifact() {
        let mut slot = ArtifactSlot::new();
        slot.install(MediaArtifact::new(vec![1, 2, 3], "image/jpeg"));
        slot.install(MediaArtifact::new(vec![4, 5], "image/jpeg"));

        // Only the new artifact is held; the superseded one is gone.
        let held = slot.take().unwrap();
        assert_eq!(held.bytes(), &[4, 5]);
        assert!(slot.take().is_none());
    }

    #[test]
    fn revoke_empties_the_slot() {
        let mut slot = ArtifactSlot::new();
        slot.install(MediaArtifact::new(vec![9; 16], "video/mp4"));
        slot.revoke();
        assert!(slot.is_empty());
        assert!(slot.current().is_none());
    }

    #[test]
    fn take_transfers_ownership() {
        let mut slot = ArtifactSlot::new();
        slot.install(MediaArtifact::new(vec![1], "image/jpeg"));
        let taken = slot.take().unwrap();
        assert_eq!(taken.bytes(), &[1]);
        assert!(slot.is_empty());
    }

    #[test]
    fn artifact_owns_its_buffer_outright() {
        let artifact = MediaArtifact::new(vec![1, 2, 3], "video/mp4");
        assert_eq!(artifact.len(), 3);
        // Consuming the artifact yields the buffer itself, no copy, no
        // shared handle left behind.
        assert_eq!(artifact.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn data_uri_is_self_contained() {
        let artifact = MediaArtifact::new(b"abc".to_vec(), "image/jpeg");
        assert_eq!(artifact.to_data_uri(), "data:image/jpeg;base64,YWJj");
    }
}
