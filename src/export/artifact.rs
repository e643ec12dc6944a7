use crate::error::ExportError;
use crate::synthesizer::GenerationOutput;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Version tag written with every artifact.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// A binary snapshot of one run: model, settings, dataset and report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunArtifact {
    pub format_version: u32,
    pub output: GenerationOutput,
}

impl RunArtifact {
    pub fn new(output: GenerationOutput) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            output,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        encode_to_vec(self, standard())
            .map_err(|e| ExportError::Serialization(format!("Serialization failed: {}", e)))
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ExportError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|source| ExportError::Io {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| ExportError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ExportError> {
        let mut file = fs::File::open(path).map_err(|source| ExportError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|source| ExportError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let artifact: Self = decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ExportError::Serialization(format!("Deserialization failed: {}", e)))?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ExportError::Serialization(format!(
                "Unsupported artifact format version {} (expected {})",
                artifact.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        Ok(artifact)
    }
}
