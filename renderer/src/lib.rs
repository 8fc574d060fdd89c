//! # Renderer
//!
//! Out-of-process certificate renderer: takes the name/id/category triple the
//! validation endpoint returns and produces a single-page landscape PDF.
//!
//! The assets directory holds one template PNG per category (see
//! [`template::Template::file_name`]) plus two fonts: `serif.ttf` for the
//! participant name and `mono.ttf` for the id line.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use ab_glyph::FontVec;
use image::DynamicImage;
use thiserror::Error;

pub mod compose;
pub mod layout;
pub mod pdf;
pub mod template;

use template::Template;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load template {path}: {source}")]
    Template {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid font data in {path}")]
    Font { path: PathBuf },

    #[error("Failed to write PDF: {0}")]
    Pdf(String),
}

pub struct Assets {
    dir: PathBuf,
    pub name_font: FontVec,
    pub id_font: FontVec,
}

impl Assets {
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();

        let name_font = load_font(&dir.join("serif.ttf"))?;
        let id_font = load_font(&dir.join("mono.ttf"))?;

        Ok(Self {
            dir,
            name_font,
            id_font,
        })
    }

    pub fn template_image(&self, template: Template) -> Result<DynamicImage, RenderError> {
        let path = self.dir.join(template.file_name());

        image::open(&path).map_err(|source| RenderError::Template { path, source })
    }
}

fn load_font(path: &Path) -> Result<FontVec, RenderError> {
    let bytes = fs::read(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    FontVec::try_from_vec(bytes).map_err(|_| RenderError::Font {
        path: path.to_path_buf(),
    })
}

/// Full render chain: template select → composite → PDF. Any failure along
/// the chain surfaces as a [`RenderError`] and nothing is written.
pub fn render_certificate(
    assets: &Assets,
    name: &str,
    certificate_id: &str,
    category: &str,
    out: impl Write,
) -> Result<(), RenderError> {
    let template = Template::for_category(category);
    let image = assets.template_image(template)?;

    let page = compose::compose(
        &image,
        &assets.name_font,
        &assets.id_font,
        name,
        certificate_id,
    );

    pdf::write_pdf(&page, out)
}
