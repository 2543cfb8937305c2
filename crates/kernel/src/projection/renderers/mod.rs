//! Shape renderers, one per paragraph type.
//!
//! Each renderer is a total function from a paragraph to a fixed
//! `{type, content, style?}` record. Renderers for container types iterate
//! their reference field in stored order.

mod article;
mod columns;
mod cta;
mod hero;
mod media;
mod page_section;
mod text;

pub(crate) use article::article_reference;
pub(crate) use columns::two_columns;
pub(crate) use cta::{
    button, icon_and_text, image_and_text_cta, image_and_text_cta_drawer, inspiration_banner,
    vector_items,
};
pub(crate) use hero::{hero, hero_content, slide};
pub(crate) use media::{gallery, image, map, video};
pub(crate) use page_section::page_section;
pub(crate) use text::{accordion_group, form, testimonials_group, text_block};
