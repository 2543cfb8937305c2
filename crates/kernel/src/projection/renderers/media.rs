//! Image, gallery, video, and map renderers.

use serde_json::{Value, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use crate::projection::{ProjectedRecord, Projector, fields};

pub(crate) fn image(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "image": r.image(fields::IMAGE_SINGLE),
        "imageStyle": r.string(fields::IMAGE_STYLE),
    });
    ProjectedRecord::new(ParagraphType::Image, content)
}

/// Files that cannot be resolved are skipped.
pub(crate) fn gallery(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let images: Vec<Value> = projector
        .reader(p)
        .image_urls(fields::IMAGE)
        .into_iter()
        .map(|url| json!({ "url": url }))
        .collect();
    ProjectedRecord::new(ParagraphType::Gallery, json!({ "images": images }))
}

pub(crate) fn video(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    ProjectedRecord::new(ParagraphType::Video, json!({ "id": r.string(fields::TEXT) }))
}

/// Coordinates are numbers when set and `""` otherwise.
pub(crate) fn map(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let point = match r.geo(fields::MAP) {
        Some(geo) => json!({ "lat": geo.lat, "lng": geo.lng }),
        None => json!({ "lat": "", "lng": "" }),
    };
    let content = json!({
        "map": point,
        "label": r.string(fields::TEXT),
        "city": r.string(fields::CITY),
        "address": r.string(fields::SUBTITLE),
        "phone": r.string(fields::PHONE),
        "tollFreeNumber": r.string(fields::TOLL_FREE_NUMBER),
        "fax": r.string(fields::FAX),
    });
    ProjectedRecord::new(ParagraphType::Map, content)
}
