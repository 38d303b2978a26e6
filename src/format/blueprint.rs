// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io::{self, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use super::entries::PlacementEntry;

pub const BLUEPRINT_PREFIX: &str = "SHAPEZ2-1-";
pub const BLUEPRINT_SUFFIX: &str = "$";

const BUILDING_BLUEPRINT_TYPE: &str = "Building";
const DEFAULT_GAME_VERSION: u32 = 1095;

/// Settings for [`encode_blueprint`].
///
/// Passed by reference on every call; nothing is cached between encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintOptions {
    /// Game data version, written to both `V` and `BP.BinaryVersion`.
    pub version: u32,
    /// The four icon slots shown for the blueprint in game.
    pub icon: Vec<Option<String>>,
}

impl Default for BlueprintOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_GAME_VERSION,
            icon: vec![
                Some("icon:Buildings".to_owned()),
                None,
                None,
                Some("shape:CuCuCuCu".to_owned()),
            ],
        }
    }
}

#[derive(Debug)]
pub enum BlueprintError {
    MissingPrefix,
    MissingSuffix,
    Base64 { source: base64::DecodeError },
    Gzip { source: io::Error },
    Json { source: serde_json::Error },
}

impl fmt::Display for BlueprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => {
                write!(f, "blueprint code must start with {BLUEPRINT_PREFIX:?}")
            }
            Self::MissingSuffix => write!(f, "blueprint code must end with {BLUEPRINT_SUFFIX:?}"),
            Self::Base64 { source } => write!(f, "invalid base64 in blueprint code: {source}"),
            Self::Gzip { source } => write!(f, "invalid gzip stream in blueprint code: {source}"),
            Self::Json { source } => write!(f, "invalid blueprint json: {source}"),
        }
    }
}

impl std::error::Error for BlueprintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingPrefix | Self::MissingSuffix => None,
            Self::Base64 { source } => Some(source),
            Self::Gzip { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintIcon {
    #[serde(rename = "Data", default)]
    pub data: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(rename = "$type")]
    pub kind: String,
    #[serde(rename = "Icon")]
    pub icon: BlueprintIcon,
    #[serde(rename = "Entries", default)]
    pub entries: Vec<PlacementEntry>,
    #[serde(rename = "BinaryVersion")]
    pub binary_version: u32,
}

/// The JSON document carried inside a blueprint code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintDocument {
    #[serde(rename = "V")]
    pub version: u32,
    #[serde(rename = "BP")]
    pub blueprint: Blueprint,
}

impl BlueprintDocument {
    pub fn entries(&self) -> &[PlacementEntry] {
        &self.blueprint.entries
    }

    pub fn into_entries(self) -> Vec<PlacementEntry> {
        self.blueprint.entries
    }
}

#[derive(Serialize)]
struct BlueprintRef<'a> {
    #[serde(rename = "$type")]
    kind: &'static str,
    #[serde(rename = "Icon")]
    icon: IconRef<'a>,
    #[serde(rename = "Entries")]
    entries: &'a [PlacementEntry],
    #[serde(rename = "BinaryVersion")]
    binary_version: u32,
}

#[derive(Serialize)]
struct IconRef<'a> {
    #[serde(rename = "Data")]
    data: &'a [Option<String>],
}

#[derive(Serialize)]
struct BlueprintDocumentRef<'a> {
    #[serde(rename = "V")]
    version: u32,
    #[serde(rename = "BP")]
    blueprint: BlueprintRef<'a>,
}

/// Wraps `entries` into a pasteable `SHAPEZ2-1-…$` building blueprint code.
///
/// The payload is the blueprint JSON, gzip-compressed and base64-encoded.
pub fn encode_blueprint(
    entries: &[PlacementEntry],
    options: &BlueprintOptions,
) -> Result<String, BlueprintError> {
    let document = BlueprintDocumentRef {
        version: options.version,
        blueprint: BlueprintRef {
            kind: BUILDING_BLUEPRINT_TYPE,
            icon: IconRef { data: &options.icon },
            entries,
            binary_version: options.version,
        },
    };

    let json = serde_json::to_vec(&document).map_err(|source| BlueprintError::Json { source })?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).map_err(|source| BlueprintError::Gzip { source })?;
    let compressed = encoder.finish().map_err(|source| BlueprintError::Gzip { source })?;

    let payload = STANDARD.encode(compressed);
    Ok(format!("{BLUEPRINT_PREFIX}{payload}{BLUEPRINT_SUFFIX}"))
}

/// Parses a `SHAPEZ2-1-…$` blueprint code. Surrounding whitespace is ignored.
pub fn decode_blueprint(code: &str) -> Result<BlueprintDocument, BlueprintError> {
    let code = code.trim();
    let payload = code.strip_prefix(BLUEPRINT_PREFIX).ok_or(BlueprintError::MissingPrefix)?;
    let payload = payload.strip_suffix(BLUEPRINT_SUFFIX).ok_or(BlueprintError::MissingSuffix)?;

    let compressed =
        STANDARD.decode(payload.as_bytes()).map_err(|source| BlueprintError::Base64 { source })?;

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|source| BlueprintError::Gzip { source })?;

    serde_json::from_slice(&json).map_err(|source| BlueprintError::Json { source })
}

pub fn decode_blueprint_entries(code: &str) -> Result<Vec<PlacementEntry>, BlueprintError> {
    decode_blueprint(code).map(BlueprintDocument::into_entries)
}
