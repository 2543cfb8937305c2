//! Paragraph dispatcher.
//!
//! Maps every known paragraph type to its shape renderer. Paragraphs with an
//! unknown type tag produce nothing and are left out of the containing
//! collection.

use tracing::debug;

use drakkar_sdk::types::{Paragraph, ParagraphType};

use super::reader::fields;
use super::renderers;
use super::{ProjectedRecord, Projector};

impl Projector<'_> {
    /// Render a paragraph with the renderer for its type.
    ///
    /// Returns `None` when the type tag is not a known [`ParagraphType`].
    pub fn dispatch(&self, paragraph: &Paragraph) -> Option<ProjectedRecord> {
        let Some(kind) = paragraph.paragraph_type() else {
            debug!(
                bundle = %paragraph.bundle,
                uuid = %paragraph.uuid,
                "no renderer for paragraph type; omitting"
            );
            return None;
        };
        Some(self.render(kind, paragraph))
    }

    fn render(&self, kind: ParagraphType, p: &Paragraph) -> ProjectedRecord {
        match kind {
            ParagraphType::PageSection => renderers::page_section(self, p),
            ParagraphType::Hero => renderers::hero(self, p),
            ParagraphType::Slide => renderers::slide(self, p),
            ParagraphType::TwoColumnsImageAndText => renderers::two_columns(self, p),
            ParagraphType::AccordionGroup => renderers::accordion_group(self, p),
            ParagraphType::Button => renderers::button(self, p),
            ParagraphType::Form => renderers::form(self, p),
            ParagraphType::Gallery => renderers::gallery(self, p),
            ParagraphType::IconAndText => renderers::icon_and_text(self, p),
            ParagraphType::Image => renderers::image(self, p),
            ParagraphType::ImageAndTextCta => renderers::image_and_text_cta(self, p),
            ParagraphType::ImageAndTextCtaDrawer => renderers::image_and_text_cta_drawer(self, p),
            ParagraphType::InspirationBanner => renderers::inspiration_banner(self, p),
            ParagraphType::Map => renderers::map(self, p),
            ParagraphType::TestimonialsGroup => renderers::testimonials_group(self, p),
            ParagraphType::TextBlock => renderers::text_block(self, p),
            ParagraphType::ArticleReference => renderers::article_reference(self, p),
            ParagraphType::Video => renderers::video(self, p),
            ParagraphType::LogoGroup | ParagraphType::VectorItem => {
                renderers::vector_items(self, p, kind, fields::PARA_REFERENCE)
            }
            ParagraphType::RegionCta => {
                renderers::vector_items(self, p, kind, fields::PARA_REFERENCE_REGION)
            }
        }
    }
}
