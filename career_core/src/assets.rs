//! Display assets for a recommended role
//!
//! Every role may have an illustrative image and a roadmap image. Missing
//! map entries, missing files and undecodable files are all reported as a
//! status, never as an error.

use crate::types::CareerLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default file names per role: (role, image, roadmap)
const BUILTIN_ASSETS: [(&str, &str, &str); 17] = [
    ("Database Administrator", "database-admin.webp", "RDatabaseAdministrator.jpg"),
    ("Hardware Engineer", "HwEngi.jpg", "RHardwareEngineer.jpg"),
    ("Application Support Engineer", "ApplicationSupportEngineer.png", "RApplicationSupportEngineer.jpg"),
    ("Cyber Security Specialist", "CyberSecuritySpecialist.jpg", "RCyberSecuritySpecialist.jpg"),
    ("Networking Engineer", "EnetWorkEngi.jpg", "RetworkEngineer.jpg"),
    ("Software Developer", "sw developer.webp", "RSoftwareDeveloper.jpg"),
    ("API Specialist", "APISpecialist.jpg", "RAPISpecialist.jpg"),
    ("Project Manager", "ProjectManager.png", "RProjectManagement.jpg"),
    ("Information Security Specialist", "InformationSecuritySpecialist.jpeg", "RInformationSecuritySpecilaist.jpg"),
    ("Technical Writer", "Technical Writer.jpg", "RTechnicalWriter.jpg"),
    ("AI ML Specialist", "AI_ML_Specialist.jpeg", "RAIMLSpecialist.jpg"),
    ("Software Tester", "swtester.jpg", "RSoftwareTesting.jpg"),
    ("Business Analyst", "Busnissanalyst.png", "RBusinessAnalyst.jpg"),
    ("Customer Service Executive", "CustomerServiceExecutive.jpg", "RCustomerServiceExecutive.jpg"),
    ("Data Scientist", "DataSciencist.png", "RDataScientist.jpg"),
    ("Helpdesk Engineer", "HelpDeskEnginner.webp", "RHelpDeskEngineer.jpg"),
    ("Graphics Designer", "GraphicsDesinger.webp", "RGraphicDesigner.jpg"),
];

/// Role -> relative image path, per asset kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMap {
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    #[serde(default)]
    pub roadmaps: BTreeMap<String, String>,
}

impl AssetMap {
    pub fn empty() -> Self {
        Self {
            images: BTreeMap::new(),
            roadmaps: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut map = Self::empty();
        for (role, image, roadmap) in BUILTIN_ASSETS {
            map.images.insert(role.to_string(), image.to_string());
            map.roadmaps.insert(role.to_string(), roadmap.to_string());
        }
        map
    }

    pub fn with_image(mut self, label: &str, path: &str) -> Self {
        self.images.insert(label.to_string(), path.to_string());
        self
    }

    pub fn with_roadmap(mut self, label: &str, path: &str) -> Self {
        self.roadmaps.insert(label.to_string(), path.to_string());
        self
    }

    /// Entries in `overrides` replace ours; everything else is kept.
    pub fn merge(mut self, overrides: &AssetMap) -> Self {
        self.images
            .extend(overrides.images.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.roadmaps
            .extend(overrides.roadmaps.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn path_for(&self, kind: AssetKind, label: &CareerLabel) -> Option<&str> {
        let table = match kind {
            AssetKind::Image => &self.images,
            AssetKind::Roadmap => &self.roadmaps,
        };
        table.get(label.as_str()).map(String::as_str)
    }
}

impl Default for AssetMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Roadmap,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Image => "Image",
            AssetKind::Roadmap => "Roadmap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    Available {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// No mapping, or the mapped file does not exist
    Unavailable,
    /// The file exists but is not a decodable PNG, JPEG, WebP, GIF or BMP image
    InvalidImage { path: PathBuf },
}

impl AssetStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, AssetStatus::Available { .. })
    }

    /// User-facing line for this status
    pub fn message(&self, kind: AssetKind, label: &CareerLabel) -> String {
        match self {
            AssetStatus::Available {
                path,
                width,
                height,
            } => format!(
                "{} {} ({}x{}): {}",
                label,
                kind.label(),
                width,
                height,
                path.display()
            ),
            AssetStatus::Unavailable => {
                format!("{} not available for this role.", kind.label())
            }
            AssetStatus::InvalidImage { .. } => {
                format!("{} file is not a valid image format.", kind.label())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAssets {
    pub image: AssetStatus,
    pub roadmap: AssetStatus,
}

/// Looks up and probes asset files under a base directory
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_dir: PathBuf,
    map: AssetMap,
}

impl AssetResolver {
    pub fn new(base_dir: impl Into<PathBuf>, map: AssetMap) -> Self {
        Self {
            base_dir: base_dir.into(),
            map,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn map(&self) -> &AssetMap {
        &self.map
    }

    pub fn resolve(&self, label: &CareerLabel) -> ResolvedAssets {
        ResolvedAssets {
            image: self.status(AssetKind::Image, label),
            roadmap: self.status(AssetKind::Roadmap, label),
        }
    }

    pub fn status(&self, kind: AssetKind, label: &CareerLabel) -> AssetStatus {
        match self.map.path_for(kind, label) {
            Some(relative) => probe_image(&self.base_dir.join(relative)),
            None => {
                log::debug!("No {} mapped for '{}'", kind.label(), label);
                AssetStatus::Unavailable
            }
        }
    }
}

/// Reads just enough of the file to learn its format and dimensions.
fn probe_image(path: &Path) -> AssetStatus {
    if !path.is_file() {
        log::debug!("Asset {} does not exist", path.display());
        return AssetStatus::Unavailable;
    }

    let reader = match image::ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("Failed to open asset {}: {}", path.display(), e);
            return AssetStatus::Unavailable;
        }
    };

    match reader.into_dimensions() {
        Ok((width, height)) => AssetStatus::Available {
            path: path.to_path_buf(),
            width,
            height,
        },
        Err(e) => {
            log::warn!("Asset {} is not a valid image: {}", path.display(), e);
            AssetStatus::InvalidImage {
                path: path.to_path_buf(),
            }
        }
    }
}
